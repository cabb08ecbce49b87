//! ListDocumentsHandler - document records, newest first.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ShipmentId};
use crate::domain::logistics::Document;
use crate::ports::DocumentRepository;

/// Query for documents, optionally for one shipment.
#[derive(Debug, Clone, Default)]
pub struct ListDocumentsQuery {
    pub shipment_id: Option<ShipmentId>,
}

/// Handler for listing documents.
pub struct ListDocumentsHandler {
    repository: Arc<dyn DocumentRepository>,
}

impl ListDocumentsHandler {
    pub fn new(repository: Arc<dyn DocumentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListDocumentsQuery) -> Result<Vec<Document>, DomainError> {
        self.repository.list(query.shipment_id.as_ref()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryDocumentRepository;
    use crate::application::handlers::logistics::CreateDocumentHandler;
    use crate::domain::logistics::{DocumentType, NewDocument, ValidationStatus};

    fn new_document(shipment_id: ShipmentId, name: &str) -> NewDocument {
        NewDocument {
            shipment_id,
            document_type: DocumentType::PackingList,
            file_path: format!("uploads/{}", name),
            file_name: name.to_string(),
            validation_status: ValidationStatus::default(),
            validation_notes: None,
        }
    }

    #[tokio::test]
    async fn filters_by_shipment_when_given() {
        let repo = Arc::new(InMemoryDocumentRepository::new());
        let create = CreateDocumentHandler::new(repo.clone());
        let list = ListDocumentsHandler::new(repo);
        let target = ShipmentId::new();

        create.handle(new_document(target, "pl-1.pdf")).await.unwrap();
        create
            .handle(new_document(ShipmentId::new(), "pl-2.pdf"))
            .await
            .unwrap();

        let filtered = list
            .handle(ListDocumentsQuery {
                shipment_id: Some(target),
            })
            .await
            .unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].file_name, "pl-1.pdf");
        assert_eq!(filtered[0].validation_status, ValidationStatus::Pending);

        let all = list.handle(ListDocumentsQuery::default()).await.unwrap();
        assert_eq!(all.len(), 2);
    }
}
