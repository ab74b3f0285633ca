//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `FERNWOOD_CATALOG_PATH` - Path to a seed JSON file overriding the
//!   embedded catalog
//! - `FERNWOOD_CART_ID` - Numeric session cart identifier used in log
//!   events (default: 1)

use std::path::PathBuf;

use thiserror::Error;

use fernwood_core::CartId;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Seed file overriding the embedded catalog, if set
    pub catalog_path: Option<PathBuf>,
    /// Identifier for this session's cart in log events
    pub cart_id: CartId,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let catalog_path = get_optional_env("FERNWOOD_CATALOG_PATH").map(PathBuf::from);
        let cart_id = get_env_or_default("FERNWOOD_CART_ID", "1")
            .parse::<i32>()
            .map(CartId::new)
            .map_err(|e| ConfigError::InvalidEnvVar("FERNWOOD_CART_ID".to_string(), e.to_string()))?;

        Ok(Self {
            catalog_path,
            cart_id,
        })
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            cart_id: CartId::new(1),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
