//! AnalyzeDocumentHandler - checks a trade document for compliance issues.

use crate::application::completion::CompletionClient;
use crate::domain::trade::{parse_or_fallback, DocumentAnalysis, TaskKind};

/// Command to analyze a document's text.
#[derive(Debug, Clone)]
pub struct AnalyzeDocumentCommand {
    /// Free-form type label, e.g. "invoice" or "bill of lading".
    pub document_type: String,
    pub document_content: String,
}

/// Handler for document compliance analysis.
#[derive(Debug, Clone)]
pub struct AnalyzeDocumentHandler {
    client: CompletionClient,
}

impl AnalyzeDocumentHandler {
    pub fn new(client: CompletionClient) -> Self {
        Self { client }
    }

    /// Returns the model's analysis, or the fallback if the reply doesn't parse.
    pub async fn handle(&self, cmd: AnalyzeDocumentCommand) -> DocumentAnalysis {
        let prompt = build_prompt(&cmd);
        let raw = self.client.generate(TaskKind::DocumentAnalysis, &prompt).await;
        parse_or_fallback(&raw)
    }
}

fn build_prompt(cmd: &AnalyzeDocumentCommand) -> String {
    format!(
        r#"You are an expert in international trade documentation.
Please analyze this {} document and check for any issues or errors.
Provide a detailed analysis including:
1. Is this document valid and compliant with international standards?
2. List any issues or errors found in the document.
3. Provide suggestions for improvement.

Document content:
{}

Format your response as JSON with the following structure:
{{
  "isValid": boolean,
  "issues": [list of issues found],
  "suggestions": [list of suggestions]
}}"#,
        cmd.document_type, cmd.document_content
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::domain::trade::ResponseContract;
    use std::sync::Arc;

    fn handler(provider: &MockAIProvider) -> AnalyzeDocumentHandler {
        AnalyzeDocumentHandler::new(CompletionClient::new(Arc::new(provider.clone())))
    }

    fn invoice() -> AnalyzeDocumentCommand {
        AnalyzeDocumentCommand {
            document_type: "invoice".to_string(),
            document_content: "INVOICE #42\nSeller: Acme Exports\nTotal: 1,200 USD".to_string(),
        }
    }

    #[tokio::test]
    async fn returns_parsed_analysis_unchanged() {
        let provider = MockAIProvider::new()
            .with_response(r#"{"isValid": true, "issues": [], "suggestions": []}"#);

        let analysis = handler(&provider).handle(invoice()).await;

        assert_eq!(
            analysis,
            DocumentAnalysis {
                is_valid: true,
                issues: vec![],
                suggestions: vec![],
            }
        );
    }

    #[tokio::test]
    async fn non_json_reply_returns_fallback() {
        let provider = MockAIProvider::new().with_response("not json");
        let analysis = handler(&provider).handle(invoice()).await;
        assert_eq!(analysis, DocumentAnalysis::fallback());
    }

    #[tokio::test]
    async fn fenced_reply_is_not_unwrapped() {
        let provider = MockAIProvider::new()
            .with_response("```json\n{\"isValid\": true, \"issues\": [], \"suggestions\": []}\n```");
        let analysis = handler(&provider).handle(invoice()).await;
        assert_eq!(analysis, DocumentAnalysis::fallback());
    }

    #[tokio::test]
    async fn wrong_shape_returns_fallback() {
        let provider = MockAIProvider::new().with_response(r#"{"valid": "yes"}"#);
        let analysis = handler(&provider).handle(invoice()).await;
        assert_eq!(analysis, DocumentAnalysis::fallback());
    }

    #[tokio::test]
    async fn provider_failure_returns_fallback() {
        let provider = MockAIProvider::new().with_error(MockError::RateLimited);
        let analysis = handler(&provider).handle(invoice()).await;
        assert_eq!(analysis, DocumentAnalysis::fallback());
    }

    #[tokio::test]
    async fn prompt_names_type_and_embeds_content() {
        let provider = MockAIProvider::new();
        handler(&provider).handle(invoice()).await;

        let prompt = provider.last_prompt().unwrap();
        assert!(prompt.contains("analyze this invoice document"));
        assert!(prompt.contains("INVOICE #42\nSeller: Acme Exports\nTotal: 1,200 USD"));
        assert!(prompt.contains("\"isValid\": boolean"));
    }
}
