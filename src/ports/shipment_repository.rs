//! Shipment repository port.
//!
//! Shipments and their tracking events are stored together behind one port,
//! since every read returns a shipment with its tracking history attached.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ShipmentId};
use crate::domain::logistics::{Shipment, TrackingEvent};

/// Repository port for shipment records.
#[async_trait]
pub trait ShipmentRepository: Send + Sync {
    /// Persist a newly created shipment.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn create(&self, shipment: &Shipment) -> Result<(), DomainError>;

    /// List all shipments, newest first.
    ///
    /// Each shipment carries its tracking events in timestamp order.
    async fn list(&self) -> Result<Vec<Shipment>, DomainError>;

    /// Find a shipment by ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &ShipmentId) -> Result<Option<Shipment>, DomainError>;

    /// Append a tracking event to an existing shipment.
    ///
    /// # Errors
    ///
    /// - `ShipmentNotFound` if the shipment doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn add_tracking_event(&self, event: &TrackingEvent) -> Result<(), DomainError>;
}
