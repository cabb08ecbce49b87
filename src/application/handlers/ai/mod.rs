//! AI task handlers.

mod analyze_document;
mod chat;
mod estimate_shipping;
mod generate_text;
mod market_intelligence;

pub use analyze_document::{AnalyzeDocumentCommand, AnalyzeDocumentHandler};
pub use chat::{ChatCommand, ChatHandler, ChatResult};
pub use estimate_shipping::{EstimateShippingCommand, EstimateShippingHandler};
pub use generate_text::{GenerateTextCommand, GenerateTextHandler, GenerateTextResult};
pub use market_intelligence::{MarketIntelligenceCommand, MarketIntelligenceHandler};
