use crate::errors::{AppError, AppResult};

/// Anything that turns a prompt into text. `Ok(None)` means the service
/// answered but produced no text.
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> AppResult<Option<String>>;
}

/// Observable state of the last narrative request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NarrativeState {
    #[default]
    Idle,
    Loading,
    Success(String),
    Error(String),
}

impl NarrativeState {
    pub fn text(&self) -> Option<&str> {
        match self {
            NarrativeState::Success(t) => Some(t),
            _ => None,
        }
    }
}

/// Wraps a generator and records the outcome of every request.
pub struct NarrativeClient<G: TextGenerator> {
    generator: G,
    state: NarrativeState,
}

impl<G: TextGenerator> NarrativeClient<G> {
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            state: NarrativeState::Idle,
        }
    }

    pub fn state(&self) -> &NarrativeState {
        &self.state
    }

    /// Send a prompt. Empty or whitespace-only answers are errors.
    pub fn send_prompt(&mut self, prompt: &str) -> AppResult<String> {
        self.state = NarrativeState::Loading;

        let result = match self.generator.generate(prompt) {
            Ok(Some(text)) if !text.trim().is_empty() => Ok(text.trim().to_string()),
            Ok(_) => Err(AppError::EmptyAiResponse),
            Err(e) => Err(e),
        };

        self.state = match &result {
            Ok(text) => NarrativeState::Success(text.clone()),
            Err(AppError::EmptyAiResponse) => NarrativeState::Error("empty response".to_string()),
            Err(e) => NarrativeState::Error(e.to_string()),
        };

        result
    }
}
