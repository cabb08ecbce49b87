//! HTTP adapters - REST API implementations.
//!
//! Each area has its own state and router. [`app_router`] merges them and
//! applies the shared layers.

pub mod ai;
pub mod error;
pub mod logistics;

use axum::http::HeaderValue;
use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use ai::{ai_router, AiAppState};
pub use error::{ApiError, ErrorResponse};
pub use logistics::{logistics_router, LogisticsAppState};

/// GET /health - Liveness probe
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// CORS policy for the configured origins. An empty list allows any origin.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Builds the complete application router.
pub fn app_router(ai: AiAppState, logistics: LogisticsAppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(ai_router().with_state(ai))
        .merge(logistics_router().with_state(logistics))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
