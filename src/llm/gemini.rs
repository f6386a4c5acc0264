use super::{
    LlmClient,
    types::{ErrorEnvelope, GenerateContentRequest, GenerateContentResponse},
};
use crate::{Error, Result, config::LlmConfig};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const API_KEY_ENV_VAR: &str = "GEMINI_API_KEY";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Client for the native Gemini `generateContent` endpoint.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    api_base: String,
}

impl GeminiClient {
    pub fn new(config: &LlmConfig) -> Self {
        let api_base = config
            .base_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(API_BASE)
            .trim_end_matches('/')
            .to_string();

        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            api_base,
        }
    }

    fn generate_url(&self, model: &str) -> String {
        format!("{}/models/{}:generateContent", self.api_base, model)
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn complete(&self, model: &str, prompt: &str) -> Result<String> {
        let url = self.generate_url(model);
        debug!("Calling {} ({} prompt bytes)", url, prompt.len());

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            let detail = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|envelope| envelope.error.message)
                .unwrap_or(body);
            return Err(Error::llm(format!("[{}] {}", status, detail)));
        }

        let completion: GenerateContentResponse = response.json().await?;
        debug!(
            "Received generateContent response with {} candidates",
            completion.candidates.len()
        );

        completion.text().ok_or_else(|| {
            match completion
                .prompt_feedback
                .as_ref()
                .and_then(|feedback| feedback.block_reason.as_deref())
            {
                Some(reason) => Error::llm(format!("Prompt was blocked: {}", reason)),
                None => Error::llm("Model returned no text"),
            }
        })
    }
}
