//! CreateDocumentHandler - records document metadata for a shipment.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::logistics::{Document, NewDocument};
use crate::ports::DocumentRepository;

/// Handler for creating document records.
pub struct CreateDocumentHandler {
    repository: Arc<dyn DocumentRepository>,
}

impl CreateDocumentHandler {
    pub fn new(repository: Arc<dyn DocumentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: NewDocument) -> Result<Document, DomainError> {
        let document = Document::create(cmd, Timestamp::now());
        self.repository.create(&document).await?;

        tracing::info!(
            document_id = %document.id,
            shipment_id = %document.shipment_id,
            document_type = %document.document_type,
            "Document created"
        );

        Ok(document)
    }
}
