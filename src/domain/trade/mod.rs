//! Trade module - AI task results and the response contract.
//!
//! Every structured AI task result implements [`ResponseContract`]: it is
//! parsed from raw model text, checked against its schema, and replaced by a
//! total fallback value when either step fails.

mod contract;
mod conversation;
mod document_analysis;
mod market_intelligence;
mod numbers;
mod shipping_estimate;
mod task;

pub use contract::{
    parse_or_fallback, parse_response, strip_code_fence, strip_emphasis, GenerationFailure,
    ResponseContract,
};
pub use conversation::{ChatRole, ChatTurn, ConversationRecord};
pub use document_analysis::DocumentAnalysis;
pub use market_intelligence::{MarketIntelligence, MarketIntelligenceRecord, Trend};
pub use shipping_estimate::ShippingEstimate;
pub use task::TaskKind;
