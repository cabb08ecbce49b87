//! In-memory adapters for development and tests.
//!
//! Used when no database is configured. Nothing survives a restart.

mod conversation_log;
mod document_repository;
mod market_intelligence_repository;
mod shipment_repository;

pub use conversation_log::InMemoryConversationLog;
pub use document_repository::InMemoryDocumentRepository;
pub use market_intelligence_repository::InMemoryMarketIntelligenceRepository;
pub use shipment_repository::InMemoryShipmentRepository;

use std::sync::{Mutex, MutexGuard};

use crate::domain::foundation::{DomainError, ErrorCode};

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, DomainError> {
    mutex
        .lock()
        .map_err(|_| DomainError::new(ErrorCode::InternalError, "In-memory store lock poisoned"))
}
