//! Response contract for structured AI output.
//!
//! Model output is free text. A structured task turns it into a typed value in
//! three steps:
//!
//! 1. Optional sanitizing (code fence removal for tasks that need it)
//! 2. Strict JSON deserialization into the result type
//! 3. Schema checks that serde cannot express (ranges, code formats)
//!
//! Any failure is a [`GenerationFailure`]. Callers never see it: it is logged
//! and the type's fallback is returned instead.

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Why a model response could not be turned into a typed result.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerationFailure {
    /// The text is not syntactically valid JSON.
    #[error("response is not valid JSON: {0}")]
    Parse(String),

    /// The text is valid JSON but does not match the expected shape.
    #[error("response does not match schema: {0}")]
    Schema(String),
}

impl GenerationFailure {
    /// Creates a schema failure.
    pub fn schema(message: impl Into<String>) -> Self {
        GenerationFailure::Schema(message.into())
    }
}

impl From<serde_json::Error> for GenerationFailure {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        match err.classify() {
            Category::Data => GenerationFailure::Schema(err.to_string()),
            Category::Syntax | Category::Eof | Category::Io => {
                GenerationFailure::Parse(err.to_string())
            }
        }
    }
}

/// A typed AI result with a strict schema and a total fallback.
pub trait ResponseContract: DeserializeOwned + Sized {
    /// Short task name used in log fields.
    const NAME: &'static str;

    /// Checks constraints beyond what deserialization enforces.
    fn check(&self) -> Result<(), GenerationFailure> {
        Ok(())
    }

    /// The degraded but well-typed value returned when parsing fails.
    fn fallback() -> Self;
}

/// Parses raw model text into `T`, enforcing the schema.
pub fn parse_response<T: ResponseContract>(raw: &str) -> Result<T, GenerationFailure> {
    let value: T = serde_json::from_str(raw)?;
    value.check()?;
    Ok(value)
}

/// Parses raw model text into `T`, returning `T::fallback()` on any failure.
pub fn parse_or_fallback<T: ResponseContract>(raw: &str) -> T {
    match parse_response(raw) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(task = T::NAME, error = %err, "Failed to parse AI response, using fallback");
            T::fallback()
        }
    }
}

/// Removes one leading and one trailing markdown code fence marker.
///
/// Handles "```json" (any case) and bare "```" openers. Text without fences
/// is only trimmed.
pub fn strip_code_fence(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix("```") {
        text = match rest.get(..4) {
            Some(tag) if tag.eq_ignore_ascii_case("json") => &rest[4..],
            _ => rest,
        };
    }

    let text = text.trim_end();
    let text = text.strip_suffix("```").unwrap_or(text);

    text.trim()
}

/// Removes markdown emphasis asterisks and surrounding whitespace.
pub fn strip_emphasis(text: &str) -> String {
    text.replace('*', "").trim().to_string()
}
