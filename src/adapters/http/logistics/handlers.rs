//! HTTP handlers for shipment, tracking and document endpoints.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapters::http::error::{json_body, ApiError};
use crate::application::handlers::logistics::{
    AddTrackingEventCommand, AddTrackingEventHandler, CreateDocumentHandler,
    CreateShipmentHandler, ListDocumentsHandler, ListDocumentsQuery, ListShipmentsHandler,
};
use crate::ports::{DocumentRepository, ShipmentRepository};

use super::dto::{
    shipment_id_from_path, AddTrackingRequest, CreateDocumentRequest, CreateShipmentRequest,
    ListDocumentsParams,
};

const INVALID_BODY: &str = "Request body must be a JSON object";
const FETCH_SHIPMENTS_FAILED: &str = "Failed to fetch shipments";
const CREATE_SHIPMENT_FAILED: &str = "Failed to create shipment";
const ADD_TRACKING_FAILED: &str = "Failed to add tracking event";
const FETCH_DOCUMENTS_FAILED: &str = "Failed to fetch documents";
const CREATE_DOCUMENT_FAILED: &str = "Failed to create document";

/// Shared state for the logistics endpoints.
#[derive(Clone)]
pub struct LogisticsAppState {
    pub shipment_repository: Arc<dyn ShipmentRepository>,
    pub document_repository: Arc<dyn DocumentRepository>,
}

impl LogisticsAppState {
    pub fn create_shipment_handler(&self) -> CreateShipmentHandler {
        CreateShipmentHandler::new(self.shipment_repository.clone())
    }

    pub fn list_shipments_handler(&self) -> ListShipmentsHandler {
        ListShipmentsHandler::new(self.shipment_repository.clone())
    }

    pub fn add_tracking_event_handler(&self) -> AddTrackingEventHandler {
        AddTrackingEventHandler::new(self.shipment_repository.clone())
    }

    pub fn create_document_handler(&self) -> CreateDocumentHandler {
        CreateDocumentHandler::new(self.document_repository.clone())
    }

    pub fn list_documents_handler(&self) -> ListDocumentsHandler {
        ListDocumentsHandler::new(self.document_repository.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Shipments
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/shipments - All shipments, newest first, with tracking
pub async fn list_shipments(
    State(state): State<LogisticsAppState>,
) -> Result<impl IntoResponse, ApiError> {
    let shipments = state
        .list_shipments_handler()
        .handle()
        .await
        .map_err(|e| ApiError::from_domain(e, FETCH_SHIPMENTS_FAILED))?;

    Ok(Json(shipments))
}

/// POST /api/shipments - Create a shipment
pub async fn create_shipment(
    State(state): State<LogisticsAppState>,
    payload: Result<Json<CreateShipmentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let new = json_body(payload, INVALID_BODY)?
        .into_new_shipment()
        .map_err(|e| ApiError::from_domain(e, CREATE_SHIPMENT_FAILED))?;

    let shipment = state
        .create_shipment_handler()
        .handle(new)
        .await
        .map_err(|e| ApiError::from_domain(e, CREATE_SHIPMENT_FAILED))?;

    Ok((StatusCode::CREATED, Json(shipment)))
}

/// POST /api/shipments/:id/tracking - Append a tracking event
pub async fn add_tracking_event(
    State(state): State<LogisticsAppState>,
    Path(id): Path<String>,
    payload: Result<Json<AddTrackingRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let shipment_id =
        shipment_id_from_path(&id).map_err(|e| ApiError::from_domain(e, ADD_TRACKING_FAILED))?;
    let body = json_body(payload, INVALID_BODY)?;

    let cmd = AddTrackingEventCommand {
        shipment_id,
        timestamp: body.timestamp(),
        location: body.location.unwrap_or_default(),
        status: body.status.unwrap_or_default(),
        notes: body.notes,
    };

    let event = state
        .add_tracking_event_handler()
        .handle(cmd)
        .await
        .map_err(|e| ApiError::from_domain(e, ADD_TRACKING_FAILED))?;

    Ok((StatusCode::CREATED, Json(event)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Documents
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/documents?shipmentId=… - Documents, newest first
pub async fn list_documents(
    State(state): State<LogisticsAppState>,
    Query(params): Query<ListDocumentsParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = ListDocumentsQuery {
        shipment_id: params
            .shipment_id()
            .map_err(|e| ApiError::from_domain(e, FETCH_DOCUMENTS_FAILED))?,
    };

    let documents = state
        .list_documents_handler()
        .handle(query)
        .await
        .map_err(|e| ApiError::from_domain(e, FETCH_DOCUMENTS_FAILED))?;

    Ok(Json(documents))
}

/// POST /api/documents - Register a document
pub async fn create_document(
    State(state): State<LogisticsAppState>,
    payload: Result<Json<CreateDocumentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let new = json_body(payload, INVALID_BODY)?
        .into_new_document()
        .map_err(|e| ApiError::from_domain(e, CREATE_DOCUMENT_FAILED))?;

    let document = state
        .create_document_handler()
        .handle(new)
        .await
        .map_err(|e| ApiError::from_domain(e, CREATE_DOCUMENT_FAILED))?;

    Ok((StatusCode::CREATED, Json(document)))
}
