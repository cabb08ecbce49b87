//! Shipment records and their tracking history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{ShipmentId, Timestamp, TrackingEventId, UserId, ValidationError};

/// Currency used when a shipment does not state one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Direction of trade for a shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShipmentType {
    Export,
    Import,
}

impl ShipmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShipmentType::Export => "export",
            ShipmentType::Import => "import",
        }
    }
}

impl fmt::Display for ShipmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShipmentType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "export" => Ok(ShipmentType::Export),
            "import" => Ok(ShipmentType::Import),
            other => Err(ValidationError::invalid_value(
                "type",
                format!("unknown shipment type '{}'", other),
            )),
        }
    }
}

/// Where a shipment is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    Documentation,
    CustomsClearance,
    InTransit,
    Delivered,
}

impl ShipmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShipmentStatus::Documentation => "documentation",
            ShipmentStatus::CustomsClearance => "customs_clearance",
            ShipmentStatus::InTransit => "in_transit",
            ShipmentStatus::Delivered => "delivered",
        }
    }
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShipmentStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "documentation" => Ok(ShipmentStatus::Documentation),
            "customs_clearance" => Ok(ShipmentStatus::CustomsClearance),
            "in_transit" => Ok(ShipmentStatus::InTransit),
            "delivered" => Ok(ShipmentStatus::Delivered),
            other => Err(ValidationError::invalid_value(
                "status",
                format!("unknown shipment status '{}'", other),
            )),
        }
    }
}

/// Validated input for creating a shipment.
#[derive(Debug, Clone, PartialEq)]
pub struct NewShipment {
    pub shipment_number: String,
    pub user_id: UserId,
    pub shipment_type: ShipmentType,
    pub status: ShipmentStatus,
    pub origin_country: String,
    pub destination_country: String,
    pub estimated_departure: Option<NaiveDate>,
    pub estimated_arrival: Option<NaiveDate>,
    pub actual_departure: Option<NaiveDate>,
    pub actual_arrival: Option<NaiveDate>,
    pub value: Option<f64>,
    pub currency: String,
}

/// A shipment with its tracking history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shipment {
    pub id: ShipmentId,
    pub shipment_number: String,
    pub user_id: UserId,
    #[serde(rename = "type")]
    pub shipment_type: ShipmentType,
    pub status: ShipmentStatus,
    pub origin_country: String,
    pub destination_country: String,
    pub estimated_departure: Option<NaiveDate>,
    pub estimated_arrival: Option<NaiveDate>,
    pub actual_departure: Option<NaiveDate>,
    pub actual_arrival: Option<NaiveDate>,
    pub value: Option<f64>,
    pub currency: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// Tracking events, oldest first.
    pub tracking: Vec<TrackingEvent>,
}

impl Shipment {
    /// Creates a shipment from validated input.
    pub fn create(new: NewShipment, now: Timestamp) -> Self {
        Self {
            id: ShipmentId::new(),
            shipment_number: new.shipment_number,
            user_id: new.user_id,
            shipment_type: new.shipment_type,
            status: new.status,
            origin_country: new.origin_country,
            destination_country: new.destination_country,
            estimated_departure: new.estimated_departure,
            estimated_arrival: new.estimated_arrival,
            actual_departure: new.actual_departure,
            actual_arrival: new.actual_arrival,
            value: new.value,
            currency: new.currency,
            created_at: now,
            updated_at: now,
            tracking: Vec::new(),
        }
    }

    /// Adds a tracking event, keeping events ordered by timestamp.
    pub fn push_tracking(&mut self, event: TrackingEvent) {
        let pos = self
            .tracking
            .partition_point(|existing| existing.timestamp <= event.timestamp);
        self.tracking.insert(pos, event);
    }
}

/// A location/status update for a shipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackingEvent {
    pub id: TrackingEventId,
    pub shipment_id: ShipmentId,
    pub location: String,
    pub status: String,
    pub timestamp: Timestamp,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}

impl TrackingEvent {
    /// Creates a tracking event, rejecting blank location or status.
    pub fn new(
        shipment_id: ShipmentId,
        location: impl Into<String>,
        status: impl Into<String>,
        timestamp: Timestamp,
        notes: Option<String>,
    ) -> Result<Self, ValidationError> {
        let location = location.into();
        let status = status.into();
        if location.trim().is_empty() {
            return Err(ValidationError::empty_field("location"));
        }
        if status.trim().is_empty() {
            return Err(ValidationError::empty_field("status"));
        }

        Ok(Self {
            id: TrackingEventId::new(),
            shipment_id,
            location,
            status,
            timestamp,
            notes,
            created_at: Timestamp::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn at(rfc3339: &str) -> Timestamp {
        Timestamp::from_datetime(
            DateTime::parse_from_rfc3339(rfc3339)
                .unwrap()
                .with_timezone(&Utc),
        )
    }

    fn sample_new() -> NewShipment {
        NewShipment {
            shipment_number: "SHP-001".to_string(),
            user_id: UserId::new("user-1").unwrap(),
            shipment_type: ShipmentType::Export,
            status: ShipmentStatus::Documentation,
            origin_country: "India".to_string(),
            destination_country: "Germany".to_string(),
            estimated_departure: None,
            estimated_arrival: None,
            actual_departure: None,
            actual_arrival: None,
            value: Some(12500.0),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }

    #[test]
    fn enums_parse_their_wire_names() {
        assert_eq!("import".parse::<ShipmentType>().unwrap(), ShipmentType::Import);
        assert_eq!(
            "customs_clearance".parse::<ShipmentStatus>().unwrap(),
            ShipmentStatus::CustomsClearance
        );
        assert!("air".parse::<ShipmentType>().is_err());
        assert!("lost".parse::<ShipmentStatus>().is_err());
    }

    #[test]
    fn create_copies_fields_and_starts_untracked() {
        let now = Timestamp::now();
        let shipment = Shipment::create(sample_new(), now);

        assert_eq!(shipment.shipment_number, "SHP-001");
        assert_eq!(shipment.created_at, now);
        assert_eq!(shipment.updated_at, now);
        assert!(shipment.tracking.is_empty());
    }

    #[test]
    fn serializes_type_field_name() {
        let shipment = Shipment::create(sample_new(), Timestamp::now());
        let json = serde_json::to_value(&shipment).unwrap();
        assert_eq!(json["type"], "export");
        assert_eq!(json["status"], "documentation");
    }

    #[test]
    fn push_tracking_keeps_timestamp_order() {
        let mut shipment = Shipment::create(sample_new(), Timestamp::now());
        let id = shipment.id;
        let later = TrackingEvent::new(id, "Hamburg", "arrived", at("2024-02-10T00:00:00Z"), None)
            .unwrap();
        let earlier =
            TrackingEvent::new(id, "Mumbai", "departed", at("2024-01-20T00:00:00Z"), None)
                .unwrap();

        shipment.push_tracking(later);
        shipment.push_tracking(earlier);

        assert_eq!(shipment.tracking[0].location, "Mumbai");
        assert_eq!(shipment.tracking[1].location, "Hamburg");
    }

    #[test]
    fn tracking_event_requires_location() {
        let err = TrackingEvent::new(ShipmentId::new(), " ", "departed", Timestamp::now(), None)
            .unwrap_err();
        assert_eq!(err, ValidationError::empty_field("location"));
    }
}
