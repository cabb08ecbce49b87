//! Document repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ShipmentId};
use crate::domain::logistics::Document;

/// Repository port for trade document metadata.
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Persist a newly created document record.
    async fn create(&self, document: &Document) -> Result<(), DomainError>;

    /// List documents, newest first.
    ///
    /// When `shipment_id` is given only that shipment's documents are returned.
    async fn list(&self, shipment_id: Option<&ShipmentId>) -> Result<Vec<Document>, DomainError>;
}
