use super::gemini::GeminiClient;
use crate::{
    Error, Result,
    config::{LlmConfig, LlmProvider},
};
use async_openai::{Client, config::OpenAIConfig, types as openai_types};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// A single text-completion call against a generative model.
///
/// Implementations do not retry and do not reinterpret upstream failures.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, model: &str, prompt: &str) -> Result<String>;
}

/// Builds the client for the configured provider.
pub fn create_client(config: &LlmConfig) -> Arc<dyn LlmClient> {
    match config.provider {
        LlmProvider::Gemini => Arc::new(GeminiClient::new(config)),
        LlmProvider::Openai => Arc::new(OpenAiClient::new(config)),
    }
}

/// Chat completions client for OpenAI-compatible endpoints, Gemini's
/// `/v1beta/openai` compatibility layer included.
pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
}

impl OpenAiClient {
    pub fn new(config: &LlmConfig) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_key(config.api_key.clone());

        if let Some(base_url) = config.base_url.as_deref().filter(|url| !url.is_empty()) {
            openai_config = openai_config.with_api_base(base_url.trim_end_matches('/'));
        }

        Self {
            client: Client::with_config(openai_config),
        }
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn complete(&self, model: &str, prompt: &str) -> Result<String> {
        debug!(
            "Creating chat completion with model {} ({} prompt bytes)",
            model,
            prompt.len()
        );

        let message: openai_types::ChatCompletionRequestMessage =
            openai_types::ChatCompletionRequestUserMessageArgs::default()
                .content(openai_types::ChatCompletionRequestUserMessageContent::Text(
                    prompt.to_string(),
                ))
                .build()?
                .into();

        let request = openai_types::CreateChatCompletionRequestArgs::default()
            .model(model)
            .messages(vec![message])
            .build()?;

        let response = self.client.chat().create(request).await?;

        debug!(
            "Received chat completion response with {} choices",
            response.choices.len()
        );

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.unwrap_or_default())
            .ok_or_else(|| Error::llm("Completion response contained no choices"))
    }
}
