//! In-memory market intelligence store.

use async_trait::async_trait;
use std::sync::Mutex;

use super::lock;
use crate::domain::foundation::DomainError;
use crate::domain::trade::MarketIntelligenceRecord;
use crate::ports::MarketIntelligenceRepository;

/// In-memory implementation of the MarketIntelligenceRepository port.
#[derive(Default)]
pub struct InMemoryMarketIntelligenceRepository {
    records: Mutex<Vec<MarketIntelligenceRecord>>,
}

impl InMemoryMarketIntelligenceRepository {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all stored records.
    pub fn records(&self) -> Vec<MarketIntelligenceRecord> {
        self.records.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl MarketIntelligenceRepository for InMemoryMarketIntelligenceRepository {
    async fn insert(&self, record: &MarketIntelligenceRecord) -> Result<(), DomainError> {
        lock(&self.records)?.push(record.clone());
        Ok(())
    }
}
