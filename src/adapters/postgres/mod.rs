//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! All adapters share one `PgPool`. Tables are expected to exist.
//!
//! - `PostgresShipmentRepository` - `shipments` and `tracking`
//! - `PostgresDocumentRepository` - `documents`
//! - `PostgresMarketIntelligenceRepository` - `market_intelligence`
//! - `PostgresConversationLog` - `ai_conversations`

mod conversation_log;
mod document_repository;
mod market_intelligence_repository;
mod shipment_repository;

pub use conversation_log::PostgresConversationLog;
pub use document_repository::PostgresDocumentRepository;
pub use market_intelligence_repository::PostgresMarketIntelligenceRepository;
pub use shipment_repository::PostgresShipmentRepository;
