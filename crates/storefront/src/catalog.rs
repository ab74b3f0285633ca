//! The product catalog and its seed data.
//!
//! The catalog is a fixed in-memory document: the purchasable products plus
//! the cart sequence a new session starts with. The default seed is compiled
//! into the binary; [`Catalog::load`] swaps in a fixture file without
//! recompiling (in a full system this is where a network or database fetch
//! would go).

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use fernwood_core::ProductId;

use crate::models::Product;

/// Compiled-in default seed document.
const EMBEDDED_SEED: &str = include_str!("../seed/catalog.json");

/// Errors that can occur while loading a catalog seed.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The seed file could not be read.
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),
    /// The seed document is not valid JSON or has the wrong shape.
    #[error("invalid seed document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// On-disk shape of a seed document.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SeedDocument {
    products: Vec<Product>,
    initial_cart: Vec<Product>,
}

/// The static set of purchasable products plus the initial cart sequence.
///
/// Seed ids are carried as-is and are not required to be unique; the default
/// seed deliberately repeats product 1 in the initial cart.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    initial_cart: Vec<Product>,
}

impl Catalog {
    /// Parse the compiled-in default seed.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Parse`] if the embedded document is malformed.
    /// That indicates a build defect rather than a runtime condition, but it
    /// is surfaced as an error so library code never panics.
    pub fn embedded() -> Result<Self, SeedError> {
        Self::from_json_str(EMBEDDED_SEED)
    }

    /// Load a seed document from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Io`] if the file cannot be read, or
    /// [`SeedError::Parse`] if it does not parse as a seed document.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Parse a seed document from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Parse`] if the string does not parse as a seed
    /// document.
    pub fn from_json_str(s: &str) -> Result<Self, SeedError> {
        let doc: SeedDocument = serde_json::from_str(s)?;
        debug!(
            products = doc.products.len(),
            cart_entries = doc.initial_cart.len(),
            "catalog seed parsed"
        );
        Ok(Self {
            products: doc.products,
            initial_cart: doc.initial_cart,
        })
    }

    /// The purchasable products, in seed order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The cart sequence a new session starts with.
    #[must_use]
    pub fn initial_cart(&self) -> &[Product] {
        &self.initial_cart
    }

    /// The first product matching `id`, if any.
    ///
    /// Seed ids are not guaranteed unique; lookups take the first match.
    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }
}
