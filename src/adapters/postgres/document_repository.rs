//! PostgreSQL implementation of DocumentRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DocumentId, DomainError, ErrorCode, ShipmentId, Timestamp};
use crate::domain::logistics::{Document, DocumentType, ValidationStatus};
use crate::ports::DocumentRepository;

/// PostgreSQL implementation of the DocumentRepository port.
///
/// Stores metadata only. `file_path` points at wherever the file was uploaded.
#[derive(Clone)]
pub struct PostgresDocumentRepository {
    pool: PgPool,
}

impl std::fmt::Debug for PostgresDocumentRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresDocumentRepository")
            .field("pool", &"PgPool")
            .finish()
    }
}

impl PostgresDocumentRepository {
    /// Creates a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx query mapping.
#[derive(Debug, sqlx::FromRow)]
struct DocumentRow {
    id: Uuid,
    shipment_id: Uuid,
    #[sqlx(rename = "type")]
    document_type: String,
    file_path: String,
    file_name: String,
    validation_status: String,
    validation_notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl DocumentRow {
    fn into_document(self) -> Result<Document, DomainError> {
        let id = self.id;
        let invalid = move |err: crate::domain::foundation::ValidationError| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid documents row {}: {}", id, err),
            )
        };

        Ok(Document {
            id: DocumentId::from_uuid(self.id),
            shipment_id: ShipmentId::from_uuid(self.shipment_id),
            document_type: self
                .document_type
                .parse::<DocumentType>()
                .map_err(invalid)?,
            file_path: self.file_path,
            file_name: self.file_name,
            validation_status: self
                .validation_status
                .parse::<ValidationStatus>()
                .map_err(invalid)?,
            validation_notes: self.validation_notes,
            created_at: Timestamp::from_datetime(self.created_at),
            updated_at: Timestamp::from_datetime(self.updated_at),
        })
    }
}

#[async_trait]
impl DocumentRepository for PostgresDocumentRepository {
    async fn create(&self, document: &Document) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO documents (
                id, shipment_id, type, file_path, file_name,
                validation_status, validation_notes, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(document.id.as_uuid())
        .bind(document.shipment_id.as_uuid())
        .bind(document.document_type.as_str())
        .bind(&document.file_path)
        .bind(&document.file_name)
        .bind(document.validation_status.as_str())
        .bind(&document.validation_notes)
        .bind(document.created_at.as_datetime())
        .bind(document.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert document", e))?;

        Ok(())
    }

    async fn list(&self, shipment_id: Option<&ShipmentId>) -> Result<Vec<Document>, DomainError> {
        let rows = sqlx::query_as::<_, DocumentRow>(
            r#"
            SELECT id, shipment_id, type, file_path, file_name,
                   validation_status, validation_notes, created_at, updated_at
            FROM documents
            WHERE ($1::uuid IS NULL OR shipment_id = $1)
            ORDER BY created_at DESC
            "#,
        )
        .bind(shipment_id.map(|id| *id.as_uuid()))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch documents", e))?;

        rows.into_iter().map(DocumentRow::into_document).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(document_type: &str) -> DocumentRow {
        let now = Utc::now();
        DocumentRow {
            id: Uuid::new_v4(),
            shipment_id: Uuid::new_v4(),
            document_type: document_type.to_string(),
            file_path: "uploads/coo.pdf".to_string(),
            file_name: "coo.pdf".to_string(),
            validation_status: "validated".to_string(),
            validation_notes: Some("Stamped by chamber of commerce".to_string()),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn row_maps_to_document() {
        let doc = row("certificate_of_origin").into_document().unwrap();
        assert_eq!(doc.document_type, DocumentType::CertificateOfOrigin);
        assert_eq!(doc.validation_status, ValidationStatus::Validated);
    }

    #[test]
    fn unknown_type_in_row_is_database_error() {
        let err = row("napkin_sketch").into_document().unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }
}
