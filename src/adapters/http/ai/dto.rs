//! Request and response DTOs for the AI endpoints.
//!
//! Request fields are all optional so that missing values produce the
//! endpoint's own 400 message instead of a deserialization rejection.

use serde::{Deserialize, Serialize};

use crate::adapters::http::error::ApiError;
use crate::application::handlers::ai::{
    AnalyzeDocumentCommand, ChatCommand, ChatResult, EstimateShippingCommand, GenerateTextCommand,
    GenerateTextResult, MarketIntelligenceCommand,
};
use crate::domain::foundation::UserId;
use crate::domain::trade::{ChatRole, ChatTurn};

pub const PROMPT_REQUIRED: &str = "Prompt is required";
pub const MESSAGES_REQUIRED: &str = "Valid messages array is required";
pub const DOCUMENT_FIELDS_REQUIRED: &str = "Document type and content are required";
pub const MARKET_FIELDS_REQUIRED: &str = "Country and product category are required";
pub const SHIPPING_FIELDS_REQUIRED: &str = "All shipping parameters are required";

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v > 0.0)
}

// ════════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/gemini`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateTextRequest {
    pub prompt: Option<String>,
}

impl GenerateTextRequest {
    pub fn into_command(self) -> Result<GenerateTextCommand, ApiError> {
        let prompt = present(self.prompt).ok_or_else(|| ApiError::bad_request(PROMPT_REQUIRED))?;
        Ok(GenerateTextCommand { prompt })
    }
}

/// One conversation turn as sent by the client.
///
/// Any role other than `user` is treated as an assistant turn. That includes
/// a null or missing role and elements that are not objects.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatMessageDto {
    #[serde(default)]
    pub role: Option<serde_json::Value>,
    #[serde(default)]
    pub content: Option<serde_json::Value>,
}

impl ChatMessageDto {
    fn from_element(element: serde_json::Value) -> Self {
        serde_json::from_value(element).unwrap_or_default()
    }
}

impl From<ChatMessageDto> for ChatTurn {
    fn from(dto: ChatMessageDto) -> Self {
        let role = match dto.role.as_ref().and_then(|r| r.as_str()) {
            Some("user") => ChatRole::User,
            _ => ChatRole::Assistant,
        };
        let content = match dto.content {
            Some(serde_json::Value::String(text)) => text,
            None | Some(serde_json::Value::Null) => String::new(),
            Some(other) => other.to_string(),
        };
        ChatTurn { role, content }
    }
}

/// Body of `POST /api/gemini/chat`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// Kept untyped so a non-array value is reported as a 400.
    pub messages: Option<serde_json::Value>,
    pub user_id: Option<String>,
}

impl ChatRequest {
    pub fn into_command(self) -> Result<ChatCommand, ApiError> {
        let elements = match self.messages {
            Some(serde_json::Value::Array(elements)) => elements,
            _ => return Err(ApiError::bad_request(MESSAGES_REQUIRED)),
        };

        let user_id = present(self.user_id).and_then(|id| UserId::new(id).ok());

        Ok(ChatCommand {
            messages: elements
                .into_iter()
                .map(|element| ChatTurn::from(ChatMessageDto::from_element(element)))
                .collect(),
            user_id,
        })
    }
}

/// Body of `POST /api/documents/analyze`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeDocumentRequest {
    pub document_type: Option<String>,
    pub document_content: Option<String>,
}

impl AnalyzeDocumentRequest {
    pub fn into_command(self) -> Result<AnalyzeDocumentCommand, ApiError> {
        match (present(self.document_type), present(self.document_content)) {
            (Some(document_type), Some(document_content)) => Ok(AnalyzeDocumentCommand {
                document_type,
                document_content,
            }),
            _ => Err(ApiError::bad_request(DOCUMENT_FIELDS_REQUIRED)),
        }
    }
}

/// Body of `POST /api/market-intelligence`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketIntelligenceRequest {
    pub country: Option<String>,
    pub product_category: Option<String>,
}

impl MarketIntelligenceRequest {
    pub fn into_command(self) -> Result<MarketIntelligenceCommand, ApiError> {
        match (present(self.country), present(self.product_category)) {
            (Some(country), Some(product_category)) => Ok(MarketIntelligenceCommand {
                country,
                product_category,
            }),
            _ => Err(ApiError::bad_request(MARKET_FIELDS_REQUIRED)),
        }
    }
}

/// Body of `POST /api/shipping/estimate`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateShippingRequest {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub cargo_type: Option<String>,
    /// Kilograms.
    pub weight: Option<f64>,
    /// Cubic metres.
    pub volume: Option<f64>,
}

impl EstimateShippingRequest {
    pub fn into_command(self) -> Result<EstimateShippingCommand, ApiError> {
        match (
            present(self.origin),
            present(self.destination),
            present(self.cargo_type),
            positive(self.weight),
            positive(self.volume),
        ) {
            (Some(origin), Some(destination), Some(cargo_type), Some(weight_kg), Some(volume_m3)) => {
                Ok(EstimateShippingCommand {
                    origin,
                    destination,
                    cargo_type,
                    weight_kg,
                    volume_m3,
                })
            }
            _ => Err(ApiError::bad_request(SHIPPING_FIELDS_REQUIRED)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════════

/// Response of `POST /api/gemini`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerateTextResponse {
    pub text: String,
    pub model: String,
}

impl From<GenerateTextResult> for GenerateTextResponse {
    fn from(result: GenerateTextResult) -> Self {
        Self {
            text: result.text,
            model: result.model,
        }
    }
}

/// Response of `POST /api/gemini/chat`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    pub response: String,
    pub model: String,
}

impl From<ChatResult> for ChatResponse {
    fn from(result: ChatResult) -> Self {
        Self {
            response: result.response,
            model: result.model,
        }
    }
}
