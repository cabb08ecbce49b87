//! HTTP handlers for the AI endpoints.
//!
//! Each handler validates its body, then resolves the provider. A missing
//! provider is a configuration error, reported only after the body passed
//! validation.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapters::http::error::{json_body, ApiError};
use crate::application::handlers::ai::{
    AnalyzeDocumentHandler, ChatHandler, EstimateShippingHandler, GenerateTextHandler,
    MarketIntelligenceHandler,
};
use crate::application::CompletionClient;
use crate::ports::{AIProvider, ConversationLog, MarketIntelligenceRepository};

use super::dto::{
    AnalyzeDocumentRequest, ChatRequest, ChatResponse, EstimateShippingRequest,
    GenerateTextRequest, GenerateTextResponse, MarketIntelligenceRequest,
    DOCUMENT_FIELDS_REQUIRED, MARKET_FIELDS_REQUIRED, MESSAGES_REQUIRED, PROMPT_REQUIRED,
    SHIPPING_FIELDS_REQUIRED,
};

pub const API_KEY_NOT_CONFIGURED: &str = "Gemini API key is not configured";

/// Shared state for the AI endpoints.
#[derive(Clone)]
pub struct AiAppState {
    /// `None` when no API key was configured at startup.
    pub provider: Option<Arc<dyn AIProvider>>,
    /// Model requested from the provider and echoed in responses.
    pub model: String,
    pub market_repository: Arc<dyn MarketIntelligenceRepository>,
    pub conversation_log: Arc<dyn ConversationLog>,
}

impl AiAppState {
    /// The configured provider, or a `CONFIGURATION_ERROR`.
    pub fn provider(&self) -> Result<Arc<dyn AIProvider>, ApiError> {
        self.provider
            .clone()
            .ok_or_else(|| ApiError::configuration(API_KEY_NOT_CONFIGURED))
    }

    fn client(&self) -> Result<CompletionClient, ApiError> {
        Ok(CompletionClient::new(self.provider()?).with_model(self.model.clone()))
    }

    pub fn generate_text_handler(&self) -> Result<GenerateTextHandler, ApiError> {
        Ok(GenerateTextHandler::new(self.client()?))
    }

    pub fn chat_handler(&self) -> Result<ChatHandler, ApiError> {
        Ok(ChatHandler::new(
            self.client()?,
            self.conversation_log.clone(),
        ))
    }

    pub fn analyze_document_handler(&self) -> Result<AnalyzeDocumentHandler, ApiError> {
        Ok(AnalyzeDocumentHandler::new(self.client()?))
    }

    pub fn market_intelligence_handler(&self) -> Result<MarketIntelligenceHandler, ApiError> {
        Ok(MarketIntelligenceHandler::new(
            self.client()?,
            self.market_repository.clone(),
        ))
    }

    pub fn estimate_shipping_handler(&self) -> Result<EstimateShippingHandler, ApiError> {
        Ok(EstimateShippingHandler::new(self.client()?))
    }
}

/// POST /api/gemini - Raw prompt
pub async fn generate_text(
    State(state): State<AiAppState>,
    payload: Result<Json<GenerateTextRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = json_body(payload, PROMPT_REQUIRED)?.into_command()?;
    let handler = state.generate_text_handler()?;

    let result = handler.handle(cmd).await;
    Ok(Json(GenerateTextResponse::from(result)))
}

/// POST /api/gemini/chat - Logistics assistant
pub async fn chat(
    State(state): State<AiAppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = json_body(payload, MESSAGES_REQUIRED)?.into_command()?;
    let handler = state.chat_handler()?;

    let result = handler.handle(cmd).await;
    Ok(Json(ChatResponse::from(result)))
}

/// POST /api/documents/analyze - Document compliance review
pub async fn analyze_document(
    State(state): State<AiAppState>,
    payload: Result<Json<AnalyzeDocumentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = json_body(payload, DOCUMENT_FIELDS_REQUIRED)?.into_command()?;
    let handler = state.analyze_document_handler()?;

    Ok(Json(handler.handle(cmd).await))
}

/// POST /api/market-intelligence - Market outlook
pub async fn market_intelligence(
    State(state): State<AiAppState>,
    payload: Result<Json<MarketIntelligenceRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = json_body(payload, MARKET_FIELDS_REQUIRED)?.into_command()?;
    let handler = state.market_intelligence_handler()?;

    Ok(Json(handler.handle(cmd).await))
}

/// POST /api/shipping/estimate - Freight cost estimate
pub async fn estimate_shipping(
    State(state): State<AiAppState>,
    payload: Result<Json<EstimateShippingRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = json_body(payload, SHIPPING_FIELDS_REQUIRED)?.into_command()?;
    let handler = state.estimate_shipping_handler()?;

    Ok(Json(handler.handle(cmd).await))
}
