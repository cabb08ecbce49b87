//! Logistics module - shipments, tracking and document records.

mod document;
mod shipment;

pub use document::{Document, DocumentType, NewDocument, ValidationStatus};
pub use shipment::{
    NewShipment, Shipment, ShipmentStatus, ShipmentType, TrackingEvent, DEFAULT_CURRENCY,
};

use crate::domain::foundation::ValidationError;

/// Returns the value when present and not blank, otherwise an
/// `EmptyField` error naming `field`.
pub fn require_field(field: &str, value: Option<String>) -> Result<String, ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ValidationError::empty_field(field)),
    }
}
