//! Request DTOs for shipment, tracking and document endpoints.
//!
//! Responses serialize the domain records directly.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

use crate::domain::foundation::{
    DomainError, ShipmentId, Timestamp, UserId, ValidationError,
};
use crate::domain::logistics::{
    require_field, DocumentType, NewDocument, NewShipment, ShipmentStatus, ShipmentType,
    ValidationStatus, DEFAULT_CURRENCY,
};

fn parse_shipment_id(field: &str, raw: &str) -> Result<ShipmentId, ValidationError> {
    raw.trim()
        .parse()
        .map_err(|_| ValidationError::invalid_value(field, "not a valid UUID"))
}

/// Body of `POST /api/shipments`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateShipmentRequest {
    pub shipment_number: Option<String>,
    pub user_id: Option<String>,
    #[serde(rename = "type")]
    pub shipment_type: Option<String>,
    pub status: Option<String>,
    pub origin_country: Option<String>,
    pub destination_country: Option<String>,
    pub estimated_departure: Option<NaiveDate>,
    pub estimated_arrival: Option<NaiveDate>,
    pub actual_departure: Option<NaiveDate>,
    pub actual_arrival: Option<NaiveDate>,
    pub value: Option<f64>,
    pub currency: Option<String>,
}

impl CreateShipmentRequest {
    /// Checks required fields in a fixed order, reporting the first missing one.
    pub fn into_new_shipment(self) -> Result<NewShipment, DomainError> {
        let shipment_number = require_field("shipment_number", self.shipment_number)?;
        let user_id = require_field("user_id", self.user_id)?;
        let shipment_type = require_field("type", self.shipment_type)?;
        let status = require_field("status", self.status)?;
        let origin_country = require_field("origin_country", self.origin_country)?;
        let destination_country = require_field("destination_country", self.destination_country)?;

        if let Some(value) = self.value {
            if !value.is_finite() || value < 0.0 {
                return Err(
                    ValidationError::invalid_value("value", "must be a non-negative number").into(),
                );
            }
        }

        Ok(NewShipment {
            shipment_number,
            user_id: UserId::new(user_id)?,
            shipment_type: shipment_type.parse::<ShipmentType>()?,
            status: status.parse::<ShipmentStatus>()?,
            origin_country,
            destination_country,
            estimated_departure: self.estimated_departure,
            estimated_arrival: self.estimated_arrival,
            actual_departure: self.actual_departure,
            actual_arrival: self.actual_arrival,
            value: self.value,
            currency: self
                .currency
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        })
    }
}

/// Body of `POST /api/shipments/:id/tracking`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddTrackingRequest {
    pub location: Option<String>,
    pub status: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

impl AddTrackingRequest {
    pub fn timestamp(&self) -> Option<Timestamp> {
        self.timestamp.map(Timestamp::from_datetime)
    }
}

/// Body of `POST /api/documents`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateDocumentRequest {
    pub shipment_id: Option<String>,
    #[serde(rename = "type")]
    pub document_type: Option<String>,
    pub file_path: Option<String>,
    pub file_name: Option<String>,
    pub validation_status: Option<String>,
    pub validation_notes: Option<String>,
}

impl CreateDocumentRequest {
    pub fn into_new_document(self) -> Result<NewDocument, DomainError> {
        let shipment_id = require_field("shipment_id", self.shipment_id)?;
        let document_type = require_field("type", self.document_type)?;
        let file_path = require_field("file_path", self.file_path)?;
        let file_name = require_field("file_name", self.file_name)?;

        let validation_status = match self.validation_status.filter(|s| !s.trim().is_empty()) {
            Some(raw) => raw.parse::<ValidationStatus>()?,
            None => ValidationStatus::default(),
        };

        Ok(NewDocument {
            shipment_id: parse_shipment_id("shipment_id", &shipment_id)?,
            document_type: document_type.parse::<DocumentType>()?,
            file_path,
            file_name,
            validation_status,
            validation_notes: self.validation_notes,
        })
    }
}

/// Query of `GET /api/documents`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDocumentsParams {
    pub shipment_id: Option<String>,
}

impl ListDocumentsParams {
    /// The shipment filter, if one was given.
    pub fn shipment_id(&self) -> Result<Option<ShipmentId>, DomainError> {
        match self.shipment_id.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => Ok(Some(parse_shipment_id("shipmentId", raw)?)),
        }
    }
}

/// Parses the `:id` path segment of a shipment route.
pub fn shipment_id_from_path(raw: &str) -> Result<ShipmentId, DomainError> {
    Ok(parse_shipment_id("id", raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use serde_json::json;

    fn full_shipment() -> serde_json::Value {
        json!({
            "shipment_number": "SHP-2024-001",
            "user_id": "user-1",
            "type": "export",
            "status": "documentation",
            "origin_country": "Vietnam",
            "destination_country": "Canada",
            "estimated_departure": "2024-03-01",
            "value": 48000.0
        })
    }

    #[test]
    fn shipment_request_maps_all_fields() {
        let req: CreateShipmentRequest = serde_json::from_value(full_shipment()).unwrap();
        let new = req.into_new_shipment().unwrap();

        assert_eq!(new.shipment_type, ShipmentType::Export);
        assert_eq!(new.status, ShipmentStatus::Documentation);
        assert_eq!(new.estimated_departure, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(new.currency, "USD");
    }

    #[test]
    fn first_missing_field_is_reported() {
        let mut body = full_shipment();
        body.as_object_mut().unwrap().remove("status");
        body.as_object_mut().unwrap().remove("origin_country");

        let req: CreateShipmentRequest = serde_json::from_value(body).unwrap();
        let err = req.into_new_shipment().unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.message, "status is required");
    }

    #[test]
    fn unknown_shipment_type_is_a_validation_error() {
        let mut body = full_shipment();
        body["type"] = json!("transit");

        let req: CreateShipmentRequest = serde_json::from_value(body).unwrap();
        let err = req.into_new_shipment().unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(err.message.contains("type"));
    }

    #[test]
    fn document_request_defaults_to_pending() {
        let req: CreateDocumentRequest = serde_json::from_value(json!({
            "shipment_id": "6f1c1c7e-7d2b-4c7a-9a57-2a4f0e9b8d11",
            "type": "packing_list",
            "file_path": "docs/packing.pdf",
            "file_name": "packing.pdf"
        }))
        .unwrap();

        let new = req.into_new_document().unwrap();
        assert_eq!(new.validation_status, ValidationStatus::Pending);
        assert_eq!(new.document_type, DocumentType::PackingList);
    }

    #[test]
    fn document_request_requires_file_path() {
        let req: CreateDocumentRequest = serde_json::from_value(json!({
            "shipment_id": "6f1c1c7e-7d2b-4c7a-9a57-2a4f0e9b8d11",
            "type": "invoice",
            "file_name": "invoice.pdf"
        }))
        .unwrap();

        assert_eq!(
            req.into_new_document().unwrap_err().message,
            "file_path is required"
        );
    }

    #[test]
    fn blank_document_filter_means_all() {
        let params = ListDocumentsParams {
            shipment_id: Some(" ".to_string()),
        };
        assert_eq!(params.shipment_id().unwrap(), None);
    }

    #[test]
    fn malformed_document_filter_is_rejected() {
        let params = ListDocumentsParams {
            shipment_id: Some("SHP-1".to_string()),
        };
        assert_eq!(
            params.shipment_id().unwrap_err().code,
            ErrorCode::ValidationFailed
        );
    }
}
