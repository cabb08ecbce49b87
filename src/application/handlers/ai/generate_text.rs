//! GenerateTextHandler - passes a caller prompt straight to the model.

use crate::application::completion::CompletionClient;
use crate::domain::trade::TaskKind;

/// Command with a raw prompt.
#[derive(Debug, Clone)]
pub struct GenerateTextCommand {
    pub prompt: String,
}

/// Raw model output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateTextResult {
    pub text: String,
    pub model: String,
}

/// Handler for raw prompt requests.
#[derive(Debug, Clone)]
pub struct GenerateTextHandler {
    client: CompletionClient,
}

impl GenerateTextHandler {
    pub fn new(client: CompletionClient) -> Self {
        Self { client }
    }

    pub async fn handle(&self, cmd: GenerateTextCommand) -> GenerateTextResult {
        let text = self.client.generate(TaskKind::Freeform, &cmd.prompt).await;
        GenerateTextResult {
            text,
            model: self.client.model().to_string(),
        }
    }
}
