//! EstimateShippingHandler - cost and transit time estimate for a consignment.

use crate::application::completion::CompletionClient;
use crate::domain::trade::{parse_or_fallback, strip_code_fence, ShippingEstimate, TaskKind};

/// Command to estimate shipping costs.
#[derive(Debug, Clone)]
pub struct EstimateShippingCommand {
    pub origin: String,
    pub destination: String,
    pub cargo_type: String,
    pub weight_kg: f64,
    pub volume_m3: f64,
}

/// Handler for shipping cost estimates.
#[derive(Debug, Clone)]
pub struct EstimateShippingHandler {
    client: CompletionClient,
}

impl EstimateShippingHandler {
    pub fn new(client: CompletionClient) -> Self {
        Self { client }
    }

    /// Returns the model's estimate, or the fallback if the reply doesn't parse.
    ///
    /// One leading and one trailing markdown fence are removed before parsing.
    pub async fn handle(&self, cmd: EstimateShippingCommand) -> ShippingEstimate {
        let prompt = build_prompt(&cmd);
        let raw = self
            .client
            .generate(TaskKind::ShippingEstimate, &prompt)
            .await;
        let estimate: ShippingEstimate = parse_or_fallback(strip_code_fence(&raw));

        if !estimate.is_total_consistent() {
            tracing::warn!(
                base_cost = estimate.base_cost,
                fees_total = estimate.fees_total(),
                total_cost = estimate.total_cost,
                "Shipping estimate total does not match base cost plus fees"
            );
        }

        estimate
    }
}

fn build_prompt(cmd: &EstimateShippingCommand) -> String {
    format!(
        r#"You are an expert in international shipping and logistics.
Please estimate shipping costs for the following cargo:
- Origin: {}
- Destination: {}
- Cargo Type: {}
- Weight: {} kg
- Volume: {} cubic meters

Provide a detailed cost breakdown including:
1. Base shipping cost
2. Additional fees (customs, handling, documentation, etc.)
3. Total cost
4. Currency (use USD)
5. Estimated transit time in days
6. Cost-saving recommendations

Format your response as JSON with the following structure:
{{
  "baseCost": number,
  "additionalFees": {{
    "customsClearance": number,
    "handlingFee": number,
    "documentationFee": number
  }},
  "totalCost": number,
  "currency": "USD",
  "estimatedTransitDays": number,
  "recommendations": [list of recommendations]
}}
Respond ONLY with JSON."#,
        cmd.origin, cmd.destination, cmd.cargo_type, cmd.weight_kg, cmd.volume_m3
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::domain::trade::ResponseContract;
    use std::sync::Arc;

    const VALID: &str = r#"{
        "baseCost": 2400,
        "additionalFees": {"customsClearance": 150, "handlingFee": 80, "documentationFee": 45},
        "totalCost": 2675,
        "currency": "USD",
        "estimatedTransitDays": 28,
        "recommendations": ["Consolidate with other LCL cargo"]
    }"#;

    fn handler(provider: &MockAIProvider) -> EstimateShippingHandler {
        EstimateShippingHandler::new(CompletionClient::new(Arc::new(provider.clone())))
    }

    fn command() -> EstimateShippingCommand {
        EstimateShippingCommand {
            origin: "Shanghai".to_string(),
            destination: "Rotterdam".to_string(),
            cargo_type: "Electronics".to_string(),
            weight_kg: 500.0,
            volume_m3: 2.5,
        }
    }

    #[tokio::test]
    async fn parses_plain_json() {
        let provider = MockAIProvider::new().with_response(VALID);
        let estimate = handler(&provider).handle(command()).await;

        assert_eq!(estimate.base_cost, 2400.0);
        assert_eq!(estimate.additional_fees.len(), 3);
        assert_eq!(estimate.estimated_transit_days, 28);
        assert!(estimate.is_total_consistent());
    }

    #[tokio::test]
    async fn strips_code_fence_before_parsing() {
        let provider = MockAIProvider::new().with_response(format!("```json\n{}\n```", VALID));
        let estimate = handler(&provider).handle(command()).await;

        assert_eq!(estimate.total_cost, 2675.0);
        assert_eq!(estimate.currency, "USD");
    }

    #[tokio::test]
    async fn uppercase_fence_and_float_days_still_parse() {
        let provider = MockAIProvider::new().with_response(
            "```JSON\n{\"baseCost\": 100, \"additionalFees\": {}, \"totalCost\": 100,\n\
             \"currency\": \"USD\", \"estimatedTransitDays\": 14.0, \"recommendations\": []}\n```",
        );
        let estimate = handler(&provider).handle(command()).await;

        assert_eq!(estimate.base_cost, 100.0);
        assert_eq!(estimate.estimated_transit_days, 14);
    }

    #[tokio::test]
    async fn non_json_returns_fallback() {
        let provider = MockAIProvider::new().with_response("not json");
        let estimate = handler(&provider).handle(command()).await;

        assert_eq!(estimate, ShippingEstimate::fallback());
        assert_eq!(estimate.additional_fees.get("estimation error"), Some(&0.0));
        assert!(estimate.is_total_consistent());
    }

    #[tokio::test]
    async fn provider_failure_returns_fallback() {
        let provider = MockAIProvider::new().with_error(MockError::Unavailable {
            message: "503".to_string(),
        });
        let estimate = handler(&provider).handle(command()).await;
        assert_eq!(estimate, ShippingEstimate::fallback());
    }

    #[tokio::test]
    async fn negative_fee_returns_fallback() {
        let provider = MockAIProvider::new().with_response(
            r#"{"baseCost": 100, "additionalFees": {"rebate": -20}, "totalCost": 80,
                "currency": "USD", "estimatedTransitDays": 3, "recommendations": []}"#,
        );
        let estimate = handler(&provider).handle(command()).await;
        assert_eq!(estimate, ShippingEstimate::fallback());
    }

    #[tokio::test]
    async fn inconsistent_total_is_kept() {
        let provider = MockAIProvider::new().with_response(
            r#"{"baseCost": 100, "additionalFees": {"handlingFee": 20}, "totalCost": 500,
                "currency": "USD", "estimatedTransitDays": 3, "recommendations": []}"#,
        );
        let estimate = handler(&provider).handle(command()).await;

        assert_eq!(estimate.total_cost, 500.0);
        assert!(!estimate.is_total_consistent());
    }

    #[tokio::test]
    async fn prompt_embeds_parameters_and_json_only_instruction() {
        let provider = MockAIProvider::new();
        handler(&provider).handle(command()).await;

        let prompt = provider.last_prompt().unwrap();
        assert!(prompt.contains("- Origin: Shanghai"));
        assert!(prompt.contains("- Destination: Rotterdam"));
        assert!(prompt.contains("- Cargo Type: Electronics"));
        assert!(prompt.contains("- Weight: 500 kg"));
        assert!(prompt.contains("- Volume: 2.5 cubic meters"));
        assert!(prompt.contains("Currency (use USD)"));
        assert!(prompt.ends_with("Respond ONLY with JSON."));
    }
}
