//! Fernwood Core - Shared types library.
//!
//! This crate provides common types used across all Fernwood Goods components:
//! - `storefront` - Catalog, cart, and order summary domain logic
//! - `cli` - Command-line tools for inspecting and driving a session
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no file access, no logging.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
