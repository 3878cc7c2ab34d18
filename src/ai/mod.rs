//! Narrative generation for inspection reports.

pub mod gemini;
pub mod narrative;

pub use gemini::GeminiGenerator;
pub use narrative::{NarrativeClient, NarrativeState, TextGenerator};
