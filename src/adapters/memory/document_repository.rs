//! In-memory document repository.

use async_trait::async_trait;
use std::sync::Mutex;

use super::lock;
use crate::domain::foundation::{DomainError, ShipmentId};
use crate::domain::logistics::Document;
use crate::ports::DocumentRepository;

/// In-memory implementation of the DocumentRepository port.
#[derive(Default)]
pub struct InMemoryDocumentRepository {
    documents: Mutex<Vec<Document>>,
}

impl InMemoryDocumentRepository {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentRepository for InMemoryDocumentRepository {
    async fn create(&self, document: &Document) -> Result<(), DomainError> {
        lock(&self.documents)?.push(document.clone());
        Ok(())
    }

    async fn list(&self, shipment_id: Option<&ShipmentId>) -> Result<Vec<Document>, DomainError> {
        let mut documents: Vec<Document> = lock(&self.documents)?
            .iter()
            .rev()
            .filter(|d| shipment_id.map_or(true, |id| &d.shipment_id == id))
            .cloned()
            .collect();
        documents.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(documents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Timestamp;
    use crate::domain::logistics::{DocumentType, NewDocument, ValidationStatus};

    fn document(shipment_id: ShipmentId, name: &str) -> Document {
        Document::create(
            NewDocument {
                shipment_id,
                document_type: DocumentType::Invoice,
                file_path: format!("docs/{}", name),
                file_name: name.to_string(),
                validation_status: ValidationStatus::Pending,
                validation_notes: None,
            },
            Timestamp::now(),
        )
    }

    #[tokio::test]
    async fn list_filters_by_shipment() {
        let repo = InMemoryDocumentRepository::new();
        let a = ShipmentId::new();
        let b = ShipmentId::new();
        repo.create(&document(a, "a.pdf")).await.unwrap();
        repo.create(&document(b, "b.pdf")).await.unwrap();

        let only_a = repo.list(Some(&a)).await.unwrap();
        assert_eq!(only_a.len(), 1);
        assert_eq!(only_a[0].file_name, "a.pdf");

        assert_eq!(repo.list(None).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn list_returns_latest_insert_first() {
        let repo = InMemoryDocumentRepository::new();
        let id = ShipmentId::new();
        repo.create(&document(id, "first.pdf")).await.unwrap();
        repo.create(&document(id, "second.pdf")).await.unwrap();

        let docs = repo.list(None).await.unwrap();
        assert_eq!(docs[0].file_name, "second.pdf");
    }
}
