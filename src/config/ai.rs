//! AI provider configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ValidationError;

/// Gemini provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Gemini API key. Without it AI endpoints answer with a configuration error.
    pub gemini_api_key: Option<Secret<String>>,

    /// Model targeted by every request
    #[serde(default = "default_model")]
    pub model: String,

    /// API root, overridable for local stubs
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl AiConfig {
    /// Check if a non-empty API key is configured
    pub fn has_api_key(&self) -> bool {
        self.gemini_api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().trim().is_empty())
    }

    /// Get the API key, failing if it is missing or blank
    pub fn require_api_key(&self) -> Result<&str, ValidationError> {
        match &self.gemini_api_key {
            Some(key) if !key.expose_secret().trim().is_empty() => Ok(key.expose_secret()),
            _ => Err(ValidationError::MissingRequired("GEMINI_API_KEY")),
        }
    }

    /// Validate AI configuration
    ///
    /// A missing key is not an error here.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.model.trim().is_empty() {
            return Err(ValidationError::EmptyAiModel);
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidAiBaseUrl);
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            model: default_model(),
            base_url: default_base_url(),
        }
    }
}

fn default_model() -> String {
    "gemini-1.5-pro-001".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_config_defaults() {
        let config = AiConfig::default();
        assert_eq!(config.model, "gemini-1.5-pro-001");
        assert_eq!(
            config.base_url,
            "https://generativelanguage.googleapis.com/v1beta"
        );
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_require_api_key_missing() {
        let config = AiConfig::default();
        assert_eq!(
            config.require_api_key(),
            Err(ValidationError::MissingRequired("GEMINI_API_KEY"))
        );
    }

    #[test]
    fn test_require_api_key_blank() {
        let config = AiConfig {
            gemini_api_key: Some(Secret::new("  ".to_string())),
            ..Default::default()
        };
        assert!(config.require_api_key().is_err());
        assert!(!config.has_api_key());
    }

    #[test]
    fn test_require_api_key_present() {
        let config = AiConfig {
            gemini_api_key: Some(Secret::new("AIza-test".to_string())),
            ..Default::default()
        };
        assert_eq!(config.require_api_key(), Ok("AIza-test"));
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = AiConfig {
            gemini_api_key: Some(Secret::new("AIza-test".to_string())),
            ..Default::default()
        };
        assert!(!format!("{:?}", config).contains("AIza-test"));
    }

    #[test]
    fn test_validation_without_key_is_ok() {
        assert!(AiConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validation_bad_base_url() {
        let config = AiConfig {
            base_url: "generativelanguage.googleapis.com".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidAiBaseUrl));
    }

    #[test]
    fn test_validation_empty_model() {
        let config = AiConfig {
            model: String::new(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyAiModel));
    }
}
