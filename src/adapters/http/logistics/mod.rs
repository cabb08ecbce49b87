//! Logistics HTTP adapter - REST API for shipments, tracking and documents.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::LogisticsAppState;
pub use routes::logistics_router;
