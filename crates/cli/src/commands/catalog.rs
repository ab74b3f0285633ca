//! Print the product catalog.

use fernwood_storefront::AppState;
use fernwood_storefront::views::format_price;

/// Print the product listing as a table, or as JSON with `json` set.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
#[allow(clippy::print_stdout)]
pub fn list(state: &AppState, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let products = state.catalog().products();

    if json {
        println!("{}", serde_json::to_string_pretty(products)?);
        return Ok(());
    }

    println!("{:<4} {:<55} {:>10} {:>6}", "ID", "TITLE", "PRICE", "STOCK");
    for product in products {
        println!(
            "{:<4} {:<55} {:>10} {:>6}",
            product.id,
            product.title,
            format_price(product.price),
            product.stock
        );
    }
    Ok(())
}
