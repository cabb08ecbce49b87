//! PostgreSQL implementation of ShipmentRepository.
//!
//! Shipments live in `shipments`, tracking events in `tracking`. Reads load
//! both and attach events to their shipment.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;

use crate::domain::foundation::{
    DomainError, ErrorCode, ShipmentId, Timestamp, TrackingEventId, UserId,
};
use crate::domain::logistics::{Shipment, ShipmentStatus, ShipmentType, TrackingEvent};
use crate::ports::ShipmentRepository;

/// PostgreSQL implementation of the ShipmentRepository port.
#[derive(Clone)]
pub struct PostgresShipmentRepository {
    pool: PgPool,
}

impl std::fmt::Debug for PostgresShipmentRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresShipmentRepository")
            .field("pool", &"PgPool")
            .finish()
    }
}

impl PostgresShipmentRepository {
    /// Creates a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn tracking_for(&self, ids: &[Uuid]) -> Result<Vec<TrackingEvent>, DomainError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<_, TrackingRow>(
            r#"
            SELECT id, shipment_id, location, status, timestamp, notes, created_at
            FROM tracking
            WHERE shipment_id = ANY($1)
            ORDER BY timestamp ASC
            "#,
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch tracking events", e))?;

        Ok(rows.into_iter().map(TrackingRow::into_event).collect())
    }
}

/// Internal row type for sqlx query mapping.
#[derive(Debug, sqlx::FromRow)]
struct ShipmentRow {
    id: Uuid,
    shipment_number: String,
    user_id: String,
    #[sqlx(rename = "type")]
    shipment_type: String,
    status: String,
    origin_country: String,
    destination_country: String,
    estimated_departure: Option<NaiveDate>,
    estimated_arrival: Option<NaiveDate>,
    actual_departure: Option<NaiveDate>,
    actual_arrival: Option<NaiveDate>,
    value: Option<f64>,
    currency: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ShipmentRow {
    fn into_shipment(self) -> Result<Shipment, DomainError> {
        let invalid = |field: &str, err: &dyn std::fmt::Display| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid {} in shipments row {}: {}", field, self.id, err),
            )
        };

        let user_id = UserId::new(&self.user_id).map_err(|e| invalid("user_id", &e))?;
        let shipment_type = self
            .shipment_type
            .parse::<ShipmentType>()
            .map_err(|e| invalid("type", &e))?;
        let status = self
            .status
            .parse::<ShipmentStatus>()
            .map_err(|e| invalid("status", &e))?;

        Ok(Shipment {
            id: ShipmentId::from_uuid(self.id),
            shipment_number: self.shipment_number,
            user_id,
            shipment_type,
            status,
            origin_country: self.origin_country,
            destination_country: self.destination_country,
            estimated_departure: self.estimated_departure,
            estimated_arrival: self.estimated_arrival,
            actual_departure: self.actual_departure,
            actual_arrival: self.actual_arrival,
            value: self.value,
            currency: self.currency,
            created_at: Timestamp::from_datetime(self.created_at),
            updated_at: Timestamp::from_datetime(self.updated_at),
            tracking: Vec::new(),
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct TrackingRow {
    id: Uuid,
    shipment_id: Uuid,
    location: String,
    status: String,
    timestamp: DateTime<Utc>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
}

impl TrackingRow {
    fn into_event(self) -> TrackingEvent {
        TrackingEvent {
            id: TrackingEventId::from_uuid(self.id),
            shipment_id: ShipmentId::from_uuid(self.shipment_id),
            location: self.location,
            status: self.status,
            timestamp: Timestamp::from_datetime(self.timestamp),
            notes: self.notes,
            created_at: Timestamp::from_datetime(self.created_at),
        }
    }
}

/// Attaches events to their shipments, keeping event order.
fn attach_tracking(shipments: &mut [Shipment], events: Vec<TrackingEvent>) {
    let index: HashMap<ShipmentId, usize> = shipments
        .iter()
        .enumerate()
        .map(|(i, s)| (s.id, i))
        .collect();

    for event in events {
        if let Some(&i) = index.get(&event.shipment_id) {
            shipments[i].tracking.push(event);
        }
    }
}

const SELECT_SHIPMENTS: &str = r#"
    SELECT id, shipment_number, user_id, type, status, origin_country, destination_country,
           estimated_departure, estimated_arrival, actual_departure, actual_arrival,
           value::float8 AS value, currency, created_at, updated_at
    FROM shipments
"#;

#[async_trait]
impl ShipmentRepository for PostgresShipmentRepository {
    async fn create(&self, shipment: &Shipment) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO shipments (
                id, shipment_number, user_id, type, status,
                origin_country, destination_country,
                estimated_departure, estimated_arrival, actual_departure, actual_arrival,
                value, currency, created_at, updated_at
            ) VALUES (
                $1, $2, $3, $4, $5,
                $6, $7,
                $8, $9, $10, $11,
                $12::float8, $13, $14, $15
            )
            "#,
        )
        .bind(shipment.id.as_uuid())
        .bind(&shipment.shipment_number)
        .bind(shipment.user_id.as_str())
        .bind(shipment.shipment_type.as_str())
        .bind(shipment.status.as_str())
        .bind(&shipment.origin_country)
        .bind(&shipment.destination_country)
        .bind(shipment.estimated_departure)
        .bind(shipment.estimated_arrival)
        .bind(shipment.actual_departure)
        .bind(shipment.actual_arrival)
        .bind(shipment.value)
        .bind(&shipment.currency)
        .bind(shipment.created_at.as_datetime())
        .bind(shipment.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert shipment", e))?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<Shipment>, DomainError> {
        let rows = sqlx::query_as::<_, ShipmentRow>(&format!(
            "{} ORDER BY created_at DESC",
            SELECT_SHIPMENTS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to fetch shipments", e))?;

        let ids: Vec<Uuid> = rows.iter().map(|r| r.id).collect();
        let mut shipments = rows
            .into_iter()
            .map(ShipmentRow::into_shipment)
            .collect::<Result<Vec<_>, _>>()?;

        let events = self.tracking_for(&ids).await?;
        attach_tracking(&mut shipments, events);

        Ok(shipments)
    }

    async fn find_by_id(&self, id: &ShipmentId) -> Result<Option<Shipment>, DomainError> {
        let row = sqlx::query_as::<_, ShipmentRow>(&format!("{} WHERE id = $1", SELECT_SHIPMENTS))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::database("Failed to fetch shipment", e))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut shipment = row.into_shipment()?;
        shipment.tracking = self.tracking_for(&[*id.as_uuid()]).await?;
        Ok(Some(shipment))
    }

    async fn add_tracking_event(&self, event: &TrackingEvent) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO tracking (id, shipment_id, location, status, timestamp, notes, created_at)
            SELECT $1, s.id, $3, $4, $5, $6, $7
            FROM shipments s
            WHERE s.id = $2
            "#,
        )
        .bind(event.id.as_uuid())
        .bind(event.shipment_id.as_uuid())
        .bind(&event.location)
        .bind(&event.status)
        .bind(event.timestamp.as_datetime())
        .bind(&event.notes)
        .bind(event.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("Failed to insert tracking event", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ShipmentNotFound,
                format!("Shipment not found: {}", event.shipment_id),
            ));
        }

        Ok(())
    }
}
