//! Axum router configuration for logistics endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    add_tracking_event, create_document, create_shipment, list_documents, list_shipments,
    LogisticsAppState,
};

/// Create the logistics API router.
///
/// # Routes
///
/// - `GET /api/shipments` - List shipments with tracking
/// - `POST /api/shipments` - Create a shipment
/// - `POST /api/shipments/:id/tracking` - Append a tracking event
/// - `GET /api/documents` - List documents (query: shipmentId)
/// - `POST /api/documents` - Register a document
pub fn logistics_router() -> Router<LogisticsAppState> {
    Router::new()
        .route("/api/shipments", get(list_shipments).post(create_shipment))
        .route("/api/shipments/:id/tracking", post(add_tracking_event))
        .route("/api/documents", get(list_documents).post(create_document))
}
