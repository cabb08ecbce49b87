//! Trade document records attached to shipments.
//!
//! Only metadata lives here. The file itself sits in external storage at
//! `file_path`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{DocumentId, ShipmentId, Timestamp, ValidationError};

/// Kind of trade document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Invoice,
    PackingList,
    BillOfLading,
    CertificateOfOrigin,
    CustomsDeclaration,
    Other,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Invoice => "invoice",
            DocumentType::PackingList => "packing_list",
            DocumentType::BillOfLading => "bill_of_lading",
            DocumentType::CertificateOfOrigin => "certificate_of_origin",
            DocumentType::CustomsDeclaration => "customs_declaration",
            DocumentType::Other => "other",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "invoice" => Ok(DocumentType::Invoice),
            "packing_list" => Ok(DocumentType::PackingList),
            "bill_of_lading" => Ok(DocumentType::BillOfLading),
            "certificate_of_origin" => Ok(DocumentType::CertificateOfOrigin),
            "customs_declaration" => Ok(DocumentType::CustomsDeclaration),
            "other" => Ok(DocumentType::Other),
            other => Err(ValidationError::invalid_value(
                "type",
                format!("unknown document type '{}'", other),
            )),
        }
    }
}

/// Review state of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStatus {
    #[default]
    Pending,
    Validated,
    Rejected,
}

impl ValidationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationStatus::Pending => "pending",
            ValidationStatus::Validated => "validated",
            ValidationStatus::Rejected => "rejected",
        }
    }
}

impl FromStr for ValidationStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ValidationStatus::Pending),
            "validated" => Ok(ValidationStatus::Validated),
            "rejected" => Ok(ValidationStatus::Rejected),
            other => Err(ValidationError::invalid_value(
                "validation_status",
                format!("unknown validation status '{}'", other),
            )),
        }
    }
}

/// Validated input for registering a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDocument {
    pub shipment_id: ShipmentId,
    pub document_type: DocumentType,
    pub file_path: String,
    pub file_name: String,
    pub validation_status: ValidationStatus,
    pub validation_notes: Option<String>,
}

/// A stored trade document record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    pub id: DocumentId,
    pub shipment_id: ShipmentId,
    #[serde(rename = "type")]
    pub document_type: DocumentType,
    pub file_path: String,
    pub file_name: String,
    pub validation_status: ValidationStatus,
    pub validation_notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Document {
    pub fn create(new: NewDocument, now: Timestamp) -> Self {
        Self {
            id: DocumentId::new(),
            shipment_id: new.shipment_id,
            document_type: new.document_type,
            file_path: new.file_path,
            file_name: new.file_name,
            validation_status: new.validation_status,
            validation_notes: new.validation_notes,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_type_round_trips_through_str() {
        for kind in [
            DocumentType::Invoice,
            DocumentType::PackingList,
            DocumentType::BillOfLading,
            DocumentType::CertificateOfOrigin,
            DocumentType::CustomsDeclaration,
            DocumentType::Other,
        ] {
            assert_eq!(kind.as_str().parse::<DocumentType>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_document_type_names_field() {
        match "receipt".parse::<DocumentType>() {
            Err(ValidationError::InvalidValue { field, .. }) => assert_eq!(field, "type"),
            other => panic!("Expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn validation_status_defaults_to_pending() {
        assert_eq!(ValidationStatus::default(), ValidationStatus::Pending);
    }

    #[test]
    fn document_serializes_wire_names() {
        let doc = Document::create(
            NewDocument {
                shipment_id: ShipmentId::new(),
                document_type: DocumentType::BillOfLading,
                file_path: "docs/bol-1.pdf".to_string(),
                file_name: "bol-1.pdf".to_string(),
                validation_status: ValidationStatus::Pending,
                validation_notes: None,
            },
            Timestamp::now(),
        );

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["type"], "bill_of_lading");
        assert_eq!(json["validation_status"], "pending");
    }
}
