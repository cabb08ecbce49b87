//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables use the `EXPORT_HUB` prefix and
//! nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use export_hub::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod ai;
mod database;
mod error;
mod server;

pub use ai::AiConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use secrecy::Secret;
use serde::Deserialize;

/// Plain variable read when `EXPORT_HUB__AI__GEMINI_API_KEY` is unset.
pub const GEMINI_API_KEY_FALLBACK_VAR: &str = "GEMINI_API_KEY";

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration. Absent means in-memory storage.
    #[serde(default)]
    pub database: Option<DatabaseConfig>,

    /// Gemini provider configuration
    #[serde(default)]
    pub ai: AiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `EXPORT_HUB` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Falls back to plain `GEMINI_API_KEY` for the AI credential
    ///
    /// # Environment Variable Format
    ///
    /// - `EXPORT_HUB__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `EXPORT_HUB__DATABASE__URL=...` -> `database.url = ...`
    /// - `EXPORT_HUB__AI__GEMINI_API_KEY=...` -> `ai.gemini_api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut config: AppConfig = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("EXPORT_HUB")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        if !config.ai.has_api_key() {
            if let Ok(key) = std::env::var(GEMINI_API_KEY_FALLBACK_VAR) {
                config.ai.gemini_api_key = Some(Secret::new(key));
            }
        }

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        if let Some(database) = &self.database {
            database.validate()?;
        }
        self.ai.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "EXPORT_HUB__SERVER__PORT",
        "EXPORT_HUB__SERVER__ENVIRONMENT",
        "EXPORT_HUB__DATABASE__URL",
        "EXPORT_HUB__AI__GEMINI_API_KEY",
        "EXPORT_HUB__AI__MODEL",
        "GEMINI_API_KEY",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_no_variables() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.server.port, 8080);
        assert!(config.database.is_none());
        assert_eq!(config.ai.model, "gemini-1.5-pro-001");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("EXPORT_HUB__SERVER__PORT", "3000");
        env::set_var("EXPORT_HUB__DATABASE__URL", "postgresql://test@localhost/test");
        env::set_var("EXPORT_HUB__AI__GEMINI_API_KEY", "prefixed-key");
        env::set_var("EXPORT_HUB__AI__MODEL", "gemini-1.5-flash");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(
            config.database.as_ref().map(|d| d.url.as_str()),
            Some("postgresql://test@localhost/test")
        );
        assert_eq!(config.ai.require_api_key(), Ok("prefixed-key"));
        assert_eq!(config.ai.model, "gemini-1.5-flash");
    }

    #[test]
    fn test_plain_gemini_key_fallback() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("GEMINI_API_KEY", "plain-key");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.ai.gemini_api_key.as_ref().map(|k| k.expose_secret().as_str()),
            Some("plain-key")
        );
    }

    #[test]
    fn test_prefixed_key_wins_over_plain() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("GEMINI_API_KEY", "plain-key");
        env::set_var("EXPORT_HUB__AI__GEMINI_API_KEY", "prefixed-key");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().ai.require_api_key(), Ok("prefixed-key"));
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("EXPORT_HUB__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().is_production());
    }

    #[test]
    fn test_validate_rejects_bad_database_url() {
        let config = AppConfig {
            server: ServerConfig::default(),
            database: Some(DatabaseConfig {
                url: "sqlite://hub.db".to_string(),
                ..Default::default()
            }),
            ai: AiConfig::default(),
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidDatabaseUrl));
    }
}
