//! Derived order totals.
//!
//! The total is a pure function of the cart sequence. [`OrderSummary`] keeps
//! it current by observing the store: it recomputes eagerly on each
//! notification and memoizes the result against that sequence reference, so
//! reads never recompute.

use std::sync::{Arc, PoisonError, RwLock};

use fernwood_core::Price;

use crate::cart::{CartSnapshot, CartStore, Subscription};
use crate::models::Product;

/// Sum of `price` over every entry in a cart sequence.
///
/// Pure decimal addition, no rounding. An empty sequence sums to
/// [`Price::ZERO`].
#[must_use]
pub fn cart_total(items: &[Product]) -> Price {
    items.iter().map(|p| p.price).sum()
}

/// Memoized total keyed by sequence reference.
struct TotalCache {
    snapshot: CartSnapshot,
    total: Price,
}

/// The running total of a cart, kept current by observing the store.
///
/// Holds its own subscription; dropping the summary detaches it from the
/// store.
pub struct OrderSummary {
    cache: Arc<RwLock<TotalCache>>,
    _subscription: Subscription,
}

impl OrderSummary {
    /// Wire a summary to a cart store.
    ///
    /// Computes the total for the store's current sequence immediately, then
    /// recomputes on every notification. The memo is keyed by sequence
    /// reference: a notification carrying the sequence already totaled is a
    /// no-op.
    #[must_use]
    pub fn new(store: &CartStore) -> Self {
        let snapshot = store.items();
        let cache = Arc::new(RwLock::new(TotalCache {
            total: cart_total(&snapshot),
            snapshot,
        }));

        let listener_cache = Arc::clone(&cache);
        let subscription = store.subscribe(move |items| {
            let mut cache = listener_cache
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            if !cache.snapshot.ptr_eq(items) {
                cache.total = cart_total(items);
                cache.snapshot = items.clone();
            }
        });

        Self {
            cache,
            _subscription: subscription,
        }
    }

    /// The current total.
    ///
    /// Reads the memoized value; never recomputes.
    #[must_use]
    pub fn total(&self) -> Price {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .total
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use fernwood_core::ProductId;

    fn product(id: i32, cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            price: Price::from_cents(cents),
            image: format!("https://example.com/{id}.jpg"),
            stock: 1,
        }
    }

    #[test]
    fn test_cart_total_of_empty_sequence_is_zero() {
        assert_eq!(cart_total(&[]), Price::ZERO);
    }

    #[test]
    fn test_cart_total_sums_every_entry() {
        let items = vec![product(1, 10995), product(2, 2230), product(1, 10995)];
        assert_eq!(cart_total(&items), Price::from_cents(24220));
    }

    #[test]
    fn test_summary_starts_with_seeded_total() {
        let cart = CartStore::with_items(vec![product(1, 10995), product(2, 2230)]);
        let summary = OrderSummary::new(&cart);
        assert_eq!(summary.total(), Price::from_cents(13225));
    }

    #[test]
    fn test_summary_tracks_mutations() {
        let cart = CartStore::new();
        let summary = OrderSummary::new(&cart);
        assert_eq!(summary.total(), Price::ZERO);

        cart.add(product(1, 10995));
        assert_eq!(summary.total(), Price::from_cents(10995));

        cart.add(product(1, 10995));
        cart.add(product(2, 2230));
        assert_eq!(summary.total(), Price::from_cents(24220));

        cart.remove(ProductId::new(1));
        assert_eq!(summary.total(), Price::from_cents(2230));
    }

    #[test]
    fn test_repeated_reads_are_stable() {
        let cart = CartStore::with_items(vec![product(3, 5599)]);
        let summary = OrderSummary::new(&cart);
        let first = summary.total();
        let second = summary.total();
        assert_eq!(first, second);
        assert_eq!(first, Price::from_cents(5599));
    }

    #[test]
    fn test_dropped_summary_detaches_from_store() {
        let cart = CartStore::new();
        let summary = OrderSummary::new(&cart);
        drop(summary);
        // Mutations after the summary is gone must not invoke its listener.
        cart.add(product(1, 10995));
        assert_eq!(cart.len(), 1);
    }
}
