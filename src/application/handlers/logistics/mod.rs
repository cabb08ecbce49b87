//! Shipment, tracking and document handlers.

mod add_tracking_event;
mod create_document;
mod create_shipment;
mod list_documents;
mod list_shipments;

pub use add_tracking_event::{AddTrackingEventCommand, AddTrackingEventHandler};
pub use create_document::CreateDocumentHandler;
pub use create_shipment::CreateShipmentHandler;
pub use list_documents::{ListDocumentsHandler, ListDocumentsQuery};
pub use list_shipments::ListShipmentsHandler;
