//! Configuration management module.
//!
//! Handles loading configuration from environment variables.
//!
//! The proxy itself is not configurable: the DexPaprika base URL is fixed
//! and there are no CLI flags. The only environment input is the log level.

use std::env;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Logging level (default: info).
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: info)
    pub fn from_env() -> Self {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self { log_level }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_level() {
        let config = Config { log_level: "info".to_string() };
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_from_env_never_fails() {
        let config = Config::from_env();
        assert!(!config.log_level.is_empty());
    }
}
