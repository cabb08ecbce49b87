//! Shipping cost estimate.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::contract::{GenerationFailure, ResponseContract};
use super::numbers::{day_count, whole_number, whole_number_map};

/// Tolerance used when comparing the total against its parts.
const COST_TOLERANCE: f64 = 0.01;

/// Estimated cost and transit time for moving a consignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingEstimate {
    #[serde(with = "whole_number")]
    pub base_cost: f64,
    /// Fee name to amount, e.g. "customsClearance" -> 150.0.
    #[serde(with = "whole_number_map")]
    pub additional_fees: BTreeMap<String, f64>,
    #[serde(with = "whole_number")]
    pub total_cost: f64,
    /// ISO 4217 style three letter code.
    pub currency: String,
    #[serde(with = "day_count")]
    pub estimated_transit_days: u32,
    pub recommendations: Vec<String>,
}

impl ShippingEstimate {
    /// Sum of all additional fees.
    pub fn fees_total(&self) -> f64 {
        self.additional_fees.values().sum()
    }

    /// True when `total_cost` equals `base_cost` plus all fees.
    ///
    /// Advisory only: model output is not rejected when this is false.
    pub fn is_total_consistent(&self) -> bool {
        (self.base_cost + self.fees_total() - self.total_cost).abs() <= COST_TOLERANCE
    }
}

impl ResponseContract for ShippingEstimate {
    const NAME: &'static str = "shipping_estimate";

    fn check(&self) -> Result<(), GenerationFailure> {
        if self.base_cost < 0.0 {
            return Err(GenerationFailure::schema("baseCost must be non-negative"));
        }
        if self.total_cost < 0.0 {
            return Err(GenerationFailure::schema("totalCost must be non-negative"));
        }
        if let Some((name, _)) = self.additional_fees.iter().find(|(_, fee)| **fee < 0.0) {
            return Err(GenerationFailure::schema(format!(
                "additional fee '{}' must be non-negative",
                name
            )));
        }
        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(GenerationFailure::schema(format!(
                "currency '{}' is not a three letter code",
                self.currency
            )));
        }
        Ok(())
    }

    fn fallback() -> Self {
        let mut additional_fees = BTreeMap::new();
        additional_fees.insert("estimation error".to_string(), 0.0);

        Self {
            base_cost: 1000.0,
            additional_fees,
            total_cost: 1000.0,
            currency: "USD".to_string(),
            estimated_transit_days: 14,
            recommendations: vec![
                "Failed to generate accurate recommendations. Please try again.".to_string(),
            ],
        }
    }
}
