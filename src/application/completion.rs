//! CompletionClient - the single entry point from task handlers to the AI provider.
//!
//! Sends one prompt, returns one string. Provider failures never escape: they
//! are logged and replaced by [`APOLOGY`], which structured tasks then fail to
//! parse and turn into their fallback.

use std::sync::Arc;

use crate::domain::trade::TaskKind;
use crate::ports::{AIProvider, CompletionRequest, RequestMetadata};

/// Reply used in place of any provider failure.
pub const APOLOGY: &str = "Sorry, I encountered an error. Please try again later.";

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-1.5-pro-001";

/// Thin wrapper around an injected [`AIProvider`].
#[derive(Clone)]
pub struct CompletionClient {
    provider: Arc<dyn AIProvider>,
    model: String,
}

impl std::fmt::Debug for CompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionClient")
            .field("provider", &self.provider.provider_info().name)
            .field("model", &self.model)
            .finish()
    }
}

impl CompletionClient {
    /// Creates a client targeting [`DEFAULT_MODEL`].
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self {
            provider,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Targets a different model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// The model every request targets.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends `prompt` as a single user message and returns the raw reply.
    ///
    /// A truncated or filtered reply is still returned as is. Returns
    /// [`APOLOGY`] if the provider fails for any reason.
    pub async fn generate(&self, task: TaskKind, prompt: &str) -> String {
        let metadata = RequestMetadata::for_task(task);
        let trace_id = metadata.trace_id.clone();
        let request = CompletionRequest::new(metadata, prompt).with_model(self.model.clone());

        match self.provider.complete(request).await {
            Ok(response) => {
                if !response.finish_reason.is_complete() {
                    tracing::warn!(
                        task = %task,
                        trace_id = %trace_id,
                        finish_reason = ?response.finish_reason,
                        "Completion ended early"
                    );
                }
                tracing::debug!(
                    task = %task,
                    trace_id = %trace_id,
                    model = %response.model,
                    finish_reason = ?response.finish_reason,
                    prompt_tokens = response.usage.prompt_tokens,
                    completion_tokens = response.usage.completion_tokens,
                    "Completion succeeded"
                );
                response.content
            }
            Err(err) => {
                tracing::error!(
                    task = %task,
                    trace_id = %trace_id,
                    error = %err,
                    "Error generating completion"
                );
                APOLOGY.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::ports::FinishReason;

    #[tokio::test]
    async fn returns_raw_provider_text() {
        let provider = MockAIProvider::new().with_response("```json\n{}\n```");
        let client = CompletionClient::new(Arc::new(provider));

        assert_eq!(
            client.generate(TaskKind::Freeform, "hi").await,
            "```json\n{}\n```"
        );
    }

    #[tokio::test]
    async fn provider_error_becomes_apology() {
        let provider = MockAIProvider::new().with_error(MockError::Network {
            message: "connection reset".to_string(),
        });
        let client = CompletionClient::new(Arc::new(provider));

        assert_eq!(client.generate(TaskKind::Chat, "hi").await, APOLOGY);
    }

    #[tokio::test]
    async fn sends_single_user_message_to_configured_model() {
        let provider = MockAIProvider::new().with_response("ok");
        let client =
            CompletionClient::new(Arc::new(provider.clone())).with_model("gemini-1.5-flash");

        client.generate(TaskKind::MarketIntelligence, "prompt text").await;

        let calls = provider.get_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].prompt, "prompt text");
        assert_eq!(calls[0].model.as_deref(), Some("gemini-1.5-flash"));
        assert_eq!(calls[0].metadata.task, TaskKind::MarketIntelligence);
    }

    #[tokio::test]
    async fn truncated_reply_is_returned_unchanged() {
        let provider = MockAIProvider::new()
            .with_finished_response("{\"baseCost\": 12", FinishReason::Length);
        let client = CompletionClient::new(Arc::new(provider));

        assert_eq!(
            client.generate(TaskKind::ShippingEstimate, "estimate").await,
            "{\"baseCost\": 12"
        );
    }

    #[test]
    fn defaults_to_pro_model() {
        let client = CompletionClient::new(Arc::new(MockAIProvider::new()));
        assert_eq!(client.model(), "gemini-1.5-pro-001");
    }
}
