// Copyright 2025 ReasonEval Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Response sources. The evaluator only needs text for a question;
//! [`ResponseSource`] abstracts over where it comes from, and
//! [`OllamaClient`] is the HTTP implementation against a local
//! Ollama server.

use async_trait::async_trait;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::debug;

/// Prompt asking the model for first-principles reasoning followed by
/// a labeled final answer, so the response splitter can find both.
pub const DEFAULT_PROMPT_TEMPLATE: &str = "\
You are an expert reasoner who thinks from first principles.

When answering, follow this structure:

REASONING:
Break the problem down to its fundamental truths. Reason step by step,
numbering each step. For example, when asked whether a tomato is a
fruit, start from the definition of a fruit, check whether a tomato
satisfies it, and only then conclude.

FINAL ANSWER:
State your answer concisely.

Question: {question}";

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("api error: {0}")]
    ApiError(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Anything that can produce a free-text response for a question.
#[async_trait]
pub trait ResponseSource: Send + Sync {
    async fn fetch(&self, question: &str) -> Result<String, SourceError>;
}

/// Client for the Ollama `/api/generate` endpoint.
pub struct OllamaClient {
    base_url: String,
    model: String,
    prompt_template: String,
    temperature: f64,
    top_p: f64,
    client: reqwest::Client,
}

impl OllamaClient {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model: model.into(),
            prompt_template: DEFAULT_PROMPT_TEMPLATE.to_string(),
            temperature: 0.7,
            top_p: 0.9,
            client: reqwest::Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_prompt_template(mut self, template: impl Into<String>) -> Self {
        self.prompt_template = template.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn render_prompt(&self, question: &str) -> String {
        self.prompt_template.replace("{question}", question)
    }
}

#[async_trait]
impl ResponseSource for OllamaClient {
    async fn fetch(&self, question: &str) -> Result<String, SourceError> {
        let url = format!("{}/api/generate", self.base_url);
        let payload = json!({
            "model": self.model,
            "prompt": self.render_prompt(question),
            "stream": false,
            "options": {
                "temperature": self.temperature,
                "top_p": self.top_p,
            },
        });

        debug!(model = %self.model, %url, "requesting generation");
        let response = self.client.post(&url).json(&payload).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::ApiError(format!("{}: {}", status, body)));
        }

        let data: Value = response.json().await?;
        data["response"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| {
                SourceError::InvalidResponse("missing 'response' field in generation".to_string())
            })
    }
}
