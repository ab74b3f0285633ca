//! Application state shared across consumers.

use std::sync::Arc;

use tracing::info;

use crate::catalog::Catalog;
use crate::cart::CartStore;
use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::summary::OrderSummary;

/// Application state shared across all consumers of the storefront core.
///
/// This struct is cheaply cloneable via `Arc` and is the single shared
/// instance per session: construct it once and pass it to any view or tool
/// that needs the catalog, the cart, or the running total.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    catalog: Catalog,
    cart: CartStore,
    summary: OrderSummary,
}

impl AppState {
    /// Create state for a new session from a catalog.
    ///
    /// The cart is seeded with the catalog's initial sequence. The summary
    /// subscribes to the cart here, before any later subscriber, so a
    /// listener registered afterwards always reads a post-mutation total.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        let cart = CartStore::with_items(catalog.initial_cart().to_vec());
        let summary = OrderSummary::new(&cart);
        Self {
            inner: Arc::new(AppStateInner {
                catalog,
                cart,
                summary,
            }),
        }
    }

    /// Create state from configuration.
    ///
    /// Loads the seed file named by the configuration, or the embedded seed
    /// when none is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured seed file cannot be read or
    /// parsed, or if the embedded seed is malformed.
    pub fn from_config(config: &StorefrontConfig) -> Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::load(path)?,
            None => Catalog::embedded()?,
        };
        let state = Self::new(catalog);
        info!(
            cart = %config.cart_id,
            products = state.catalog().products().len(),
            cart_entries = state.cart().len(),
            "session state created"
        );
        Ok(state)
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.inner.cart
    }

    /// Get a reference to the order summary.
    #[must_use]
    pub fn summary(&self) -> &OrderSummary {
        &self.inner.summary
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use fernwood_core::{Price, ProductId};

    #[test]
    fn test_state_seeds_cart_from_catalog() {
        let state = AppState::from_config(&StorefrontConfig::default()).unwrap();
        assert_eq!(state.cart().len(), 5);
        assert_eq!(state.summary().total(), Price::from_cents(31418));
    }

    #[test]
    fn test_clones_share_one_cart() {
        let state = AppState::from_config(&StorefrontConfig::default()).unwrap();
        let other = state.clone();

        other.cart().remove(ProductId::new(1));
        assert_eq!(state.cart().len(), 3);
        assert_eq!(state.summary().total(), Price::from_cents(9428));
    }
}
