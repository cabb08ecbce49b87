//! Market intelligence result and its persisted record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::contract::{GenerationFailure, ResponseContract};
use super::numbers::whole_number;

/// Lowest allowed opportunity score.
pub const MIN_OPPORTUNITY_SCORE: f64 = 0.0;

/// Highest allowed opportunity score.
pub const MAX_OPPORTUNITY_SCORE: f64 = 10.0;

/// Direction of a demand or price trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Stable,
    Decreasing,
}

impl Trend {
    /// Returns the lowercase wire/database name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Increasing => "increasing",
            Trend::Stable => "stable",
            Trend::Decreasing => "decreasing",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Export market outlook for a product category in a destination country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketIntelligence {
    pub demand_trend: Trend,
    pub price_trend: Trend,
    pub regulatory_changes: String,
    /// Opportunity on a 0-10 scale, 10 being the best.
    #[serde(with = "whole_number")]
    pub opportunity_score: f64,
    pub analysis: String,
}

impl ResponseContract for MarketIntelligence {
    const NAME: &'static str = "market_intelligence";

    fn check(&self) -> Result<(), GenerationFailure> {
        let score = self.opportunity_score;
        if !(MIN_OPPORTUNITY_SCORE..=MAX_OPPORTUNITY_SCORE).contains(&score) {
            return Err(GenerationFailure::schema(format!(
                "opportunityScore {} outside {}..={}",
                score, MIN_OPPORTUNITY_SCORE, MAX_OPPORTUNITY_SCORE
            )));
        }
        Ok(())
    }

    fn fallback() -> Self {
        Self {
            demand_trend: Trend::Stable,
            price_trend: Trend::Stable,
            regulatory_changes: "Unable to retrieve regulatory information".to_string(),
            opportunity_score: 5.0,
            analysis: "Failed to generate market analysis. Please try again.".to_string(),
        }
    }
}

/// A market intelligence lookup as stored for later reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketIntelligenceRecord {
    pub country: String,
    pub product_category: String,
    pub demand_trend: Trend,
    pub price_trend: Trend,
    pub regulatory_changes: String,
    pub opportunity_score: f64,
    pub data_date: NaiveDate,
}

impl MarketIntelligenceRecord {
    /// Builds the record for a lookup made on `data_date`.
    pub fn from_intelligence(
        country: impl Into<String>,
        product_category: impl Into<String>,
        intelligence: &MarketIntelligence,
        data_date: NaiveDate,
    ) -> Self {
        Self {
            country: country.into(),
            product_category: product_category.into(),
            demand_trend: intelligence.demand_trend,
            price_trend: intelligence.price_trend,
            regulatory_changes: intelligence.regulatory_changes.clone(),
            opportunity_score: intelligence.opportunity_score,
            data_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::trade::parse_response;

    const SAMPLE: &str = r#"{
        "demandTrend": "increasing",
        "priceTrend": "decreasing",
        "regulatoryChanges": "New labelling rules from 2025",
        "opportunityScore": 7.5,
        "analysis": "Strong growth in urban retail"
    }"#;

    #[test]
    fn parses_valid_response() {
        let intel: MarketIntelligence = parse_response(SAMPLE).unwrap();
        assert_eq!(intel.demand_trend, Trend::Increasing);
        assert_eq!(intel.price_trend, Trend::Decreasing);
        assert_eq!(intel.opportunity_score, 7.5);
    }

    #[test]
    fn rejects_unknown_trend() {
        let raw = SAMPLE.replace("\"increasing\"", "\"booming\"");
        let err = parse_response::<MarketIntelligence>(&raw).unwrap_err();
        assert!(matches!(err, GenerationFailure::Schema(_)));
    }

    #[test]
    fn rejects_score_above_ten() {
        let raw = SAMPLE.replace("7.5", "11");
        let err = parse_response::<MarketIntelligence>(&raw).unwrap_err();
        assert!(err.to_string().contains("opportunityScore 11"));
    }

    #[test]
    fn accepts_score_bounds() {
        for score in ["0", "10"] {
            let raw = SAMPLE.replace("7.5", score);
            assert!(parse_response::<MarketIntelligence>(&raw).is_ok());
        }
    }

    #[test]
    fn fallback_is_neutral() {
        let fallback = MarketIntelligence::fallback();
        assert_eq!(fallback.demand_trend, Trend::Stable);
        assert_eq!(fallback.price_trend, Trend::Stable);
        assert_eq!(fallback.opportunity_score, 5.0);
    }

    #[test]
    fn integer_score_round_trips_as_integer() {
        let raw = SAMPLE.replace("7.5", "8");
        let intel: MarketIntelligence = parse_response(&raw).unwrap();
        let wire = serde_json::to_value(&intel).unwrap();

        assert_eq!(wire, serde_json::from_str::<serde_json::Value>(&raw).unwrap());
        assert_eq!(
            serde_json::to_value(MarketIntelligence::fallback()).unwrap()["opportunityScore"],
            serde_json::json!(5)
        );
    }

    #[test]
    fn record_copies_intelligence_fields() {
        let intel: MarketIntelligence = parse_response(SAMPLE).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let record = MarketIntelligenceRecord::from_intelligence("Kenya", "Coffee", &intel, date);

        assert_eq!(record.country, "Kenya");
        assert_eq!(record.product_category, "Coffee");
        assert_eq!(record.demand_trend.as_str(), "increasing");
        assert_eq!(record.regulatory_changes, intel.regulatory_changes);
        assert_eq!(record.data_date, date);
    }
}
