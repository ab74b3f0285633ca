//! Unified error handling for the storefront.
//!
//! The cart operations themselves are total functions and return no errors;
//! this taxonomy covers the ambient surfaces - configuration, seed loading,
//! and catalog lookups done on behalf of the CLI.

use thiserror::Error;

use crate::catalog::SeedError;
use crate::config::ConfigError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration loading failed.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog seed could not be read or parsed.
    #[error("Seed error: {0}")]
    Seed(#[from] SeedError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
