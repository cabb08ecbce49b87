//! ListShipmentsHandler - all shipments with tracking, newest first.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::logistics::Shipment;
use crate::ports::ShipmentRepository;

/// Handler for listing shipments.
pub struct ListShipmentsHandler {
    repository: Arc<dyn ShipmentRepository>,
}

impl ListShipmentsHandler {
    pub fn new(repository: Arc<dyn ShipmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<Shipment>, DomainError> {
        self.repository.list().await
    }
}
