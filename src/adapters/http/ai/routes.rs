//! Axum router configuration for the AI endpoints.

use axum::{routing::post, Router};

use super::handlers::{
    analyze_document, chat, estimate_shipping, generate_text, market_intelligence, AiAppState,
};

/// Create the AI API router.
///
/// # Routes
///
/// - `POST /api/gemini` - Raw prompt
/// - `POST /api/gemini/chat` - Logistics assistant chat
/// - `POST /api/documents/analyze` - Document compliance review
/// - `POST /api/market-intelligence` - Market outlook
/// - `POST /api/shipping/estimate` - Freight cost estimate
pub fn ai_router() -> Router<AiAppState> {
    Router::new()
        .route("/api/gemini", post(generate_text))
        .route("/api/gemini/chat", post(chat))
        .route("/api/documents/analyze", post(analyze_document))
        .route("/api/market-intelligence", post(market_intelligence))
        .route("/api/shipping/estimate", post(estimate_shipping))
}
