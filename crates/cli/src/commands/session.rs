//! Drive a cart session from the command line.
//!
//! This is the repository's "view layer": it wires user actions to the cart
//! store and renders the summary through a store subscription, so each
//! mutation prints exactly one updated cart.

use std::str::FromStr;

use thiserror::Error;
use tracing::info;

use fernwood_core::ProductId;
use fernwood_storefront::views::CartSummaryView;
use fernwood_storefront::{AppError, AppState};

/// A scripted cart mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOp {
    Add(ProductId),
    Remove(ProductId),
}

/// Errors parsing a scripted cart operation.
#[derive(Debug, Error)]
pub enum OpParseError {
    #[error("expected add:<id> or remove:<id>, got '{0}'")]
    Shape(String),
    #[error("invalid product id '{0}'")]
    Id(String),
    #[error("unknown cart operation '{0}'")]
    Unknown(String),
}

impl FromStr for CartOp {
    type Err = OpParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (op, id) = s
            .split_once(':')
            .ok_or_else(|| OpParseError::Shape(s.to_string()))?;
        let id = id
            .parse::<i32>()
            .map_err(|_| OpParseError::Id(id.to_string()))?;
        match op {
            "add" => Ok(Self::Add(ProductId::new(id))),
            "remove" => Ok(Self::Remove(ProductId::new(id))),
            other => Err(OpParseError::Unknown(other.to_string())),
        }
    }
}

/// Run the canonical seeded session.
///
/// Adds the t-shirt (product 2), then removes id 1, which drops both
/// seeded backpack entries at once.
///
/// # Errors
///
/// Returns an error if the catalog is missing product 2.
pub fn demo(state: &AppState) -> Result<(), Box<dyn std::error::Error>> {
    run(
        state,
        &[
            CartOp::Add(ProductId::new(2)),
            CartOp::Remove(ProductId::new(1)),
        ],
    )
}

/// Apply scripted operations left-to-right against the session.
///
/// Prints the seeded cart first, then subscribes to the store so each
/// mutation renders the updated cart and total.
///
/// # Errors
///
/// Returns [`AppError::NotFound`] when an `add` names a product id absent
/// from the catalog.
pub fn run(state: &AppState, ops: &[CartOp]) -> Result<(), Box<dyn std::error::Error>> {
    let items = state.cart().items();
    print_cart(
        "seeded cart",
        &CartSummaryView::render(&items, state.summary().total()),
    );

    // The summary subscribed at state construction, so this listener always
    // reads a post-mutation total.
    let observer = state.clone();
    let subscription = state.cart().subscribe(move |items| {
        print_cart(
            "cart updated",
            &CartSummaryView::render(items, observer.summary().total()),
        );
    });

    for op in ops {
        match *op {
            CartOp::Add(id) => {
                let product = state
                    .catalog()
                    .product(id)
                    .cloned()
                    .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;
                info!(product = %id, "add to cart");
                state.cart().add(product);
            }
            CartOp::Remove(id) => {
                info!(product = %id, "remove from cart");
                state.cart().remove(id);
            }
        }
    }

    subscription.unsubscribe();
    Ok(())
}

/// Print a rendered cart with a leading label.
#[allow(clippy::print_stdout)]
fn print_cart(label: &str, view: &CartSummaryView) {
    println!("{label}:");
    for line in &view.lines {
        println!("  [{}] {:<55} {}", line.id, line.title, line.price);
    }
    println!("  {} item(s), total {}", view.item_count, view.total);
}
