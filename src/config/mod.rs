//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `NEBACHIV` prefix and
//! nested values are separated by double underscores. Every section has
//! defaults, so an empty environment is a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use nebachiv_profile::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! config.logging.init_tracing();
//! ```

mod error;
mod logging;
mod scoring;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use scoring::ScoringConfig;
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub scoring: ScoringConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `NEBACHIV` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `NEBACHIV__LOGGING__FORMAT=json` -> `logging.format = json`
    /// - `NEBACHIV__SCORING__REFERENCE_YEAR=2025` -> `scoring.reference_year = 2025`
    /// - `NEBACHIV__STORAGE__DATA_DIR=/var/lib/nebachiv` -> `storage.data_dir`
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("NEBACHIV")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        self.scoring.validate()?;
        self.storage.validate()?;
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

    const VARS: &[&str] = &[
        "NEBACHIV__LOGGING__LEVEL",
        "NEBACHIV__LOGGING__FORMAT",
        "NEBACHIV__SCORING__REFERENCE_YEAR",
        "NEBACHIV__STORAGE__DATA_DIR",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn empty_environment_loads_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.scoring.reference_year, None);
        assert_eq!(config.storage.data_dir, std::path::PathBuf::from("data"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn nested_values_are_read_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("NEBACHIV__LOGGING__FORMAT", "json");
        env::set_var("NEBACHIV__SCORING__REFERENCE_YEAR", "2025");
        env::set_var("NEBACHIV__STORAGE__DATA_DIR", "/tmp/nebachiv");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.scoring.reference_year, Some(2025));
        assert_eq!(config.storage.data_dir, std::path::PathBuf::from("/tmp/nebachiv"));
    }

    #[test]
    fn validate_rejects_out_of_range_year() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("NEBACHIV__SCORING__REFERENCE_YEAR", "3000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidReferenceYear(3000))
        );
    }
}
