//! Client for the Generative Language `generateContent` REST endpoint.

use crate::ai::narrative::TextGenerator;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

pub struct GeminiGenerator {
    client: reqwest::blocking::Client,
    model: String,
    api_key: String,
}

impl GeminiGenerator {
    pub fn new(model: &str, api_key: &str, timeout_seconds: u64) -> AppResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| AppError::Ai(format!("HTTP client setup failed: {e}")))?;

        Ok(Self {
            client,
            model: model.to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        Self::new(&cfg.ai_model, &cfg.api_key()?, cfg.ai_timeout_seconds)
    }

    fn endpoint(&self) -> String {
        format!("{GEMINI_API_BASE}/{}:generateContent", self.model)
    }
}

/// Concatenated text of the first candidate, if any.
fn extract_text(response: GeminiResponse) -> Option<String> {
    let parts = response.candidates.into_iter().next()?.content?.parts;
    let text: String = parts.into_iter().map(|p| p.text).collect();
    Some(text)
}

impl TextGenerator for GeminiGenerator {
    fn generate(&self, prompt: &str) -> AppResult<Option<String>> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig { temperature: 0.4 },
        };

        let resp = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .map_err(|e| AppError::Ai(format!("request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(AppError::Ai(format!("API error {status}: {}", body.trim())));
        }

        let parsed: GeminiResponse = resp
            .json()
            .map_err(|e| AppError::Ai(format!("unreadable response: {e}")))?;

        Ok(extract_text(parsed))
    }
}
