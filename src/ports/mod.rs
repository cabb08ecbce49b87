//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## AI Ports
//!
//! - `AIProvider` - Generative model completions
//!
//! ## Persistence Ports
//!
//! - `ShipmentRepository` - Shipments and tracking events
//! - `DocumentRepository` - Trade document metadata
//! - `MarketIntelligenceRepository` - Market snapshot rows (best-effort)
//! - `ConversationLog` - Chat exchange log (best-effort)

mod ai_provider;
mod conversation_log;
mod document_repository;
mod market_intelligence_repository;
mod shipment_repository;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    RequestMetadata, TokenUsage,
};
pub use conversation_log::ConversationLog;
pub use document_repository::DocumentRepository;
pub use market_intelligence_repository::MarketIntelligenceRepository;
pub use shipment_repository::ShipmentRepository;
