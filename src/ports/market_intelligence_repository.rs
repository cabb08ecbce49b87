//! Market intelligence repository port.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::trade::MarketIntelligenceRecord;

/// Write-only store for market intelligence snapshots.
///
/// Callers treat writes as best-effort.
#[async_trait]
pub trait MarketIntelligenceRepository: Send + Sync {
    /// Insert one snapshot row.
    async fn insert(&self, record: &MarketIntelligenceRecord) -> Result<(), DomainError>;
}
