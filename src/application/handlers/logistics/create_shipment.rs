//! CreateShipmentHandler - records a new shipment.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::logistics::{NewShipment, Shipment};
use crate::ports::ShipmentRepository;

/// Handler for creating shipments.
pub struct CreateShipmentHandler {
    repository: Arc<dyn ShipmentRepository>,
}

impl CreateShipmentHandler {
    pub fn new(repository: Arc<dyn ShipmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: NewShipment) -> Result<Shipment, DomainError> {
        let shipment = Shipment::create(cmd, Timestamp::now());
        self.repository.create(&shipment).await?;

        tracing::info!(
            shipment_id = %shipment.id,
            shipment_number = %shipment.shipment_number,
            "Shipment created"
        );

        Ok(shipment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryShipmentRepository;
    use crate::domain::foundation::UserId;
    use crate::domain::logistics::{ShipmentStatus, ShipmentType, DEFAULT_CURRENCY};

    #[tokio::test]
    async fn persists_and_returns_shipment() {
        let repo = Arc::new(InMemoryShipmentRepository::new());
        let handler = CreateShipmentHandler::new(repo.clone());

        let shipment = handler
            .handle(NewShipment {
                shipment_number: "EXP-2024-001".to_string(),
                user_id: UserId::new("user-1").unwrap(),
                shipment_type: ShipmentType::Export,
                status: ShipmentStatus::Documentation,
                origin_country: "India".to_string(),
                destination_country: "UAE".to_string(),
                estimated_departure: None,
                estimated_arrival: None,
                actual_departure: None,
                actual_arrival: None,
                value: Some(48000.0),
                currency: DEFAULT_CURRENCY.to_string(),
            })
            .await
            .unwrap();

        let stored = repo.find_by_id(&shipment.id).await.unwrap().unwrap();
        assert_eq!(stored, shipment);
    }
}
