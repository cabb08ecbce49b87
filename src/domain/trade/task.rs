//! AI task kinds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of work a completion request performs.
///
/// Carried in request metadata so provider logs can be grouped by task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    DocumentAnalysis,
    MarketIntelligence,
    ShippingEstimate,
    Chat,
    Freeform,
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TaskKind::DocumentAnalysis => "document_analysis",
            TaskKind::MarketIntelligence => "market_intelligence",
            TaskKind::ShippingEstimate => "shipping_estimate",
            TaskKind::Chat => "chat",
            TaskKind::Freeform => "freeform",
        };
        write!(f, "{}", s)
    }
}
