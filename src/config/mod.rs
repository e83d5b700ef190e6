//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `TEAMLENS_` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use teamlens::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Evaluator at {}", config.evaluator.base_url);
//! ```

mod error;
mod evaluator;
mod registry;

pub use error::{ConfigError, ValidationError};
pub use evaluator::EvaluatorConfig;
pub use registry::RegistryConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
/// Every section has working defaults for local development.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Evaluator service configuration
    #[serde(default)]
    pub evaluator: EvaluatorConfig,

    /// Profile registry service configuration
    #[serde(default)]
    pub registry: RegistryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `TEAMLENS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `TEAMLENS__EVALUATOR__BASE_URL=http://host:8000` -> `evaluator.base_url`
    /// - `TEAMLENS__REGISTRY__TIMEOUT_SECS=10` -> `registry.timeout_secs`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TEAMLENS")
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
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.evaluator.validate()?;
        self.registry.validate()?;
        Ok(())
    }
}
