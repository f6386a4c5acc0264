mod extract;
pub mod prompts;
mod types;

pub use extract::{ExtractError, Shape, extract_json, locate_json};
pub use types::*;

use crate::{Result, llm::LlmClient};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error};
use uuid::Uuid;

/// A planning request: knows its prompt and the JSON shape to expect back.
pub trait PlanRequest: DeserializeOwned + Send + Sync + 'static {
    const SHAPE: Shape;
    /// Short capability name used in logs.
    const KIND: &'static str;

    fn prompt(&self) -> String;
}

/// Prompt → completion → extraction, shared by every capability.
pub struct Planner {
    client: Arc<dyn LlmClient>,
    model: String,
}

impl Planner {
    pub fn new(client: Arc<dyn LlmClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn plan<R: PlanRequest>(&self, request: &R) -> Result<Value> {
        let request_id = Uuid::new_v4();
        let prompt = request.prompt();
        debug!(
            %request_id,
            kind = R::KIND,
            "Sending {} byte prompt to {}",
            prompt.len(),
            self.model
        );

        let text = self
            .client
            .complete(&self.model, &prompt)
            .await
            .inspect_err(|e| error!(%request_id, kind = R::KIND, "Completion failed: {}", e))?;

        debug!(%request_id, kind = R::KIND, "Received {} byte completion", text.len());

        let value = extract_json(&text, R::SHAPE).inspect_err(|e| {
            error!(%request_id, kind = R::KIND, "Failed to extract JSON: {}", e)
        })?;

        Ok(value)
    }
}
