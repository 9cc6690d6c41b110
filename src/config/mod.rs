//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `INVOICE_HUB` prefix and nested values use double underscores as separators.
//! Every section has defaults, so an empty environment yields a usable config.
//!
//! # Example
//!
//! ```no_run
//! use invoice_hub::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Pool capacity: {}", config.pool.capacity);
//! ```

mod error;
mod logging;
mod notification;
mod pool;
mod token;

pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use notification::NotificationConfig;
pub use pool::{PoolConfig, MAX_POOL_CAPACITY};
pub use token::TokenConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Resource pool sizing
    #[serde(default)]
    pub pool: PoolConfig,

    /// Notification sender identity
    #[serde(default)]
    pub notification: NotificationConfig,

    /// Token issuer settings
    #[serde(default)]
    pub token: TokenConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `INVOICE_HUB` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `INVOICE_HUB__POOL__CAPACITY=4` -> `pool.capacity = 4`
    /// - `INVOICE_HUB__LOGGING__FORMAT=json` -> `logging.format = json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("INVOICE_HUB")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        self.pool.validate()?;
        self.notification.validate()?;
        self.token.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("INVOICE_HUB__POOL__CAPACITY");
        env::remove_var("INVOICE_HUB__POOL__NAME");
        env::remove_var("INVOICE_HUB__LOGGING__FORMAT");
        env::remove_var("INVOICE_HUB__LOGGING__LEVEL");
        env::remove_var("INVOICE_HUB__TOKEN__PREFIX");
        env::remove_var("INVOICE_HUB__NOTIFICATION__FROM_EMAIL");
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.pool.capacity, 10);
        assert_eq!(config.token.prefix, "token-for-");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_nested_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("INVOICE_HUB__POOL__CAPACITY", "4");
        env::set_var("INVOICE_HUB__POOL__NAME", "reporting-pool");
        env::set_var("INVOICE_HUB__LOGGING__FORMAT", "json");
        env::set_var("INVOICE_HUB__TOKEN__PREFIX", "tk-");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.pool.capacity, 4);
        assert_eq!(config.pool.name, "reporting-pool");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.token.prefix, "tk-");
    }

    #[test]
    fn test_validate_rejects_bad_section() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("INVOICE_HUB__NOTIFICATION__FROM_EMAIL", "nobody");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.validate(), Err(ValidationError::InvalidFromEmail));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }
}
