//! AddTrackingEventHandler - appends a location/status update to a shipment.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ShipmentId, Timestamp};
use crate::domain::logistics::TrackingEvent;
use crate::ports::ShipmentRepository;

/// Command to add a tracking event.
#[derive(Debug, Clone)]
pub struct AddTrackingEventCommand {
    pub shipment_id: ShipmentId,
    pub location: String,
    pub status: String,
    /// When the event happened. Defaults to now.
    pub timestamp: Option<Timestamp>,
    pub notes: Option<String>,
}

/// Handler for tracking updates.
pub struct AddTrackingEventHandler {
    repository: Arc<dyn ShipmentRepository>,
}

impl AddTrackingEventHandler {
    pub fn new(repository: Arc<dyn ShipmentRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// - `ValidationFailed` if location or status is blank
    /// - `ShipmentNotFound` if the shipment doesn't exist
    pub async fn handle(&self, cmd: AddTrackingEventCommand) -> Result<TrackingEvent, DomainError> {
        let event = TrackingEvent::new(
            cmd.shipment_id,
            cmd.location,
            cmd.status,
            cmd.timestamp.unwrap_or_else(Timestamp::now),
            cmd.notes,
        )?;

        self.repository.add_tracking_event(&event).await?;
        Ok(event)
    }
}
