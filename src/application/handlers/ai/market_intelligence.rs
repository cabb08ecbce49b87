//! MarketIntelligenceHandler - market outlook for a product in a country.
//!
//! The result is also stored as a dated snapshot. Storage is best-effort and
//! never changes what the caller gets back.

use std::sync::Arc;

use crate::application::completion::CompletionClient;
use crate::domain::foundation::Timestamp;
use crate::domain::trade::{
    parse_or_fallback, MarketIntelligence, MarketIntelligenceRecord, TaskKind,
};
use crate::ports::MarketIntelligenceRepository;

/// Command to look up market intelligence.
#[derive(Debug, Clone)]
pub struct MarketIntelligenceCommand {
    pub country: String,
    pub product_category: String,
}

/// Handler for market intelligence lookups.
#[derive(Clone)]
pub struct MarketIntelligenceHandler {
    client: CompletionClient,
    repository: Arc<dyn MarketIntelligenceRepository>,
}

impl MarketIntelligenceHandler {
    pub fn new(
        client: CompletionClient,
        repository: Arc<dyn MarketIntelligenceRepository>,
    ) -> Self {
        Self { client, repository }
    }

    pub async fn handle(&self, cmd: MarketIntelligenceCommand) -> MarketIntelligence {
        let prompt = build_prompt(&cmd);
        let raw = self
            .client
            .generate(TaskKind::MarketIntelligence, &prompt)
            .await;
        let intelligence: MarketIntelligence = parse_or_fallback(&raw);

        let record = MarketIntelligenceRecord::from_intelligence(
            &cmd.country,
            &cmd.product_category,
            &intelligence,
            Timestamp::now().date(),
        );
        if let Err(err) = self.repository.insert(&record).await {
            tracing::error!(
                country = %cmd.country,
                product_category = %cmd.product_category,
                error = %err,
                "Error storing market intelligence"
            );
        }

        intelligence
    }
}

fn build_prompt(cmd: &MarketIntelligenceCommand) -> String {
    format!(
        r#"You are an expert in international trade and market analysis.
Please provide market intelligence for exporting {} to {}.
Include information about:
1. Current demand trends (increasing, stable, or decreasing)
2. Price trends (increasing, stable, or decreasing)
3. Recent or upcoming regulatory changes
4. Overall opportunity score (0-10, where 10 is highest opportunity)
5. Brief analysis of the market situation

Format your response as JSON with the following structure:
{{
  "demandTrend": "increasing|stable|decreasing",
  "priceTrend": "increasing|stable|decreasing",
  "regulatoryChanges": "description of changes",
  "opportunityScore": number,
  "analysis": "brief analysis"
}}"#,
        cmd.product_category, cmd.country
    )
}
