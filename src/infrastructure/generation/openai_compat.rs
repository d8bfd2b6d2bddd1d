// src/infrastructure/generation/openai_compat.rs
//! Generation gateway speaking the OpenAI-compatible chat/completions wire
//! format. Groq is the default host; any compatible endpoint works via
//! configuration. One attempt per call, no retries.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::ports::generation::{ChatMessage, ContentGenerator};

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

const TEMPERATURE: f64 = 0.7;
const MAX_TOKENS: u32 = 1000;

pub struct OpenAiCompatGenerator {
    http_client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiCompatGenerator {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> ApplicationResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .map_err(|err| {
                ApplicationError::infrastructure(format!("failed to build HTTP client: {err}"))
            })?;

        Ok(Self {
            http_client,
            api_key: api_key.into(),
            base_url: base_url.into(),
            model: model.into(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

#[async_trait]
impl ContentGenerator for OpenAiCompatGenerator {
    async fn generate(&self, messages: &[ChatMessage]) -> ApplicationResult<String> {
        let payload = json!({
            "model": self.model,
            "messages": messages,
            "temperature": TEMPERATURE,
            "max_tokens": MAX_TOKENS,
        });

        let response = self
            .http_client
            .post(&self.base_url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|err| ApplicationError::upstream(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, "generation request rejected");
            return Err(ApplicationError::upstream(format!(
                "generation service returned {status}: {body}"
            )));
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|err| ApplicationError::upstream(err.to_string()))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        Ok(content)
    }
}
