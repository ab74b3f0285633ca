//! Integration tests for Fernwood Goods.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p fernwood-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_session` - End-to-end cart session flows against the embedded seed
//! - `catalog_seed` - Seed loading and fixture overrides
//!
//! The helper below builds a session identical to what `fw-cli` constructs,
//! so the tests drive the same surface as the command-line tools.

use fernwood_storefront::{AppState, StorefrontConfig};

/// Build a fresh session from the embedded seed.
///
/// # Panics
///
/// Panics if the embedded seed fails to parse, which indicates a build
/// defect rather than a test condition.
#[must_use]
pub fn session_state() -> AppState {
    AppState::from_config(&StorefrontConfig::default()).expect("embedded seed must parse")
}
