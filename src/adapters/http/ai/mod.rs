//! AI HTTP adapter - REST API for the model-backed trade tasks.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{AiAppState, API_KEY_NOT_CONFIGURED};
pub use routes::ai_router;
