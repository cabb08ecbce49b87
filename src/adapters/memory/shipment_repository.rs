//! In-memory shipment repository.

use async_trait::async_trait;
use std::sync::Mutex;

use super::lock;
use crate::domain::foundation::{DomainError, ErrorCode, ShipmentId};
use crate::domain::logistics::{Shipment, TrackingEvent};
use crate::ports::ShipmentRepository;

/// In-memory implementation of the ShipmentRepository port.
///
/// Shipments are kept in insertion order with their tracking attached.
#[derive(Default)]
pub struct InMemoryShipmentRepository {
    shipments: Mutex<Vec<Shipment>>,
}

impl InMemoryShipmentRepository {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShipmentRepository for InMemoryShipmentRepository {
    async fn create(&self, shipment: &Shipment) -> Result<(), DomainError> {
        lock(&self.shipments)?.push(shipment.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Shipment>, DomainError> {
        let mut shipments = lock(&self.shipments)?.clone();
        // Ties go to the most recent insert.
        shipments.reverse();
        shipments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(shipments)
    }

    async fn find_by_id(&self, id: &ShipmentId) -> Result<Option<Shipment>, DomainError> {
        Ok(lock(&self.shipments)?.iter().find(|s| &s.id == id).cloned())
    }

    async fn add_tracking_event(&self, event: &TrackingEvent) -> Result<(), DomainError> {
        let mut shipments = lock(&self.shipments)?;
        let shipment = shipments
            .iter_mut()
            .find(|s| s.id == event.shipment_id)
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::ShipmentNotFound,
                    format!("Shipment not found: {}", event.shipment_id),
                )
            })?;

        shipment.push_tracking(event.clone());
        Ok(())
    }
}
