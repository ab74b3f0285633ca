//! Fernwood Storefront - catalog, cart, and order summary core.
//!
//! This crate is the in-memory heart of the storefront: a static product
//! [`catalog`], the [`cart`] state container, and the derived order
//! [`summary`]. There is no persistence and no network; the catalog is a
//! compiled-in seed, the cart lives for one session, and every operation is
//! synchronous.
//!
//! # Architecture
//!
//! - The cart sequence is copy-on-write: mutations swap in a whole new
//!   sequence, so consumers holding a snapshot never observe change.
//! - Change propagation is an explicit observer mechanism: consumers
//!   subscribe to the [`cart::CartStore`] and are invoked synchronously with
//!   each new snapshot. No framework reactivity is involved.
//! - Derived values ([`summary::OrderSummary`]) subscribe to their source and
//!   recompute on notification, memoized against the last-seen sequence.
//! - [`state::AppState`] is the single shared instance handed to consumers -
//!   explicit construction in place of a framework injector.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod summary;
pub mod views;

pub use cart::{CartSnapshot, CartStore, Subscription};
pub use catalog::{Catalog, SeedError};
pub use config::{ConfigError, StorefrontConfig};
pub use error::{AppError, Result};
pub use models::Product;
pub use state::AppState;
pub use summary::{OrderSummary, cart_total};
