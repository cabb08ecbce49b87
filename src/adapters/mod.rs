//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to external systems:
//! - `ai` - Completion providers (Gemini, scripted mock)
//! - `http` - Axum REST API
//! - `memory` - In-memory repositories for development and tests
//! - `postgres` - PostgreSQL repositories

pub mod ai;
pub mod http;
pub mod memory;
pub mod postgres;

pub use ai::{GeminiConfig, GeminiProvider, MockAIProvider};
pub use memory::{
    InMemoryConversationLog, InMemoryDocumentRepository, InMemoryMarketIntelligenceRepository,
    InMemoryShipmentRepository,
};
pub use postgres::{
    PostgresConversationLog, PostgresDocumentRepository, PostgresMarketIntelligenceRepository,
    PostgresShipmentRepository,
};
