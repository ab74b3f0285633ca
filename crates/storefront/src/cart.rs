//! The cart state container.
//!
//! [`CartStore`] owns the single authoritative cart sequence for a session
//! and mediates all mutations. The sequence is copy-on-write: every mutation
//! swaps in a freshly built `Arc<[Product]>`, so a [`CartSnapshot`] handed to
//! a consumer never changes underneath it.
//!
//! Change propagation is an explicit observer mechanism: consumers register
//! a listener with [`CartStore::subscribe`] and are invoked synchronously,
//! after the swap, with each newly published snapshot. The returned
//! [`Subscription`] is the unsubscribe handle.

use std::ops::Deref;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock, Weak};

use tracing::debug;

use fernwood_core::ProductId;

use crate::models::Product;

/// An immutable snapshot of the cart sequence.
///
/// Cheap to clone (reference-counted). Derefs to `[Product]`, so slice
/// methods and iteration work directly on the snapshot.
#[derive(Debug, Clone)]
pub struct CartSnapshot(Arc<[Product]>);

impl CartSnapshot {
    fn new(items: Vec<Product>) -> Self {
        Self(items.into())
    }

    /// Whether two snapshots are the same published sequence.
    ///
    /// Reference identity, not content equality: each mutation publishes a
    /// new sequence, even when the contents are equal (e.g. removing an id
    /// that matched nothing).
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for CartSnapshot {
    type Target = [Product];

    fn deref(&self) -> &[Product] {
        &self.0
    }
}

/// A registered cart listener.
struct ObserverEntry {
    id: u64,
    listener: Arc<dyn Fn(&CartSnapshot) + Send + Sync>,
}

struct CartStoreInner {
    items: RwLock<CartSnapshot>,
    observers: Mutex<Vec<ObserverEntry>>,
    next_observer: AtomicU64,
}

/// The single authoritative in-memory cart for a session.
///
/// Cheaply cloneable; all clones share the same sequence and observer list.
/// Mutations are total functions - any product is accepted for addition and
/// any id for removal - and each mutation publishes exactly one new snapshot
/// to subscribers before returning.
///
/// The contract is single-writer: one mutation completes fully (swap, then
/// notify) before the next begins, and listeners must not mutate the store
/// from inside a notification.
#[derive(Clone)]
pub struct CartStore {
    inner: Arc<CartStoreInner>,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// Create a cart seeded with an initial sequence.
    ///
    /// Seeding does not notify; there are no subscribers yet.
    #[must_use]
    pub fn with_items(items: Vec<Product>) -> Self {
        Self {
            inner: Arc::new(CartStoreInner {
                items: RwLock::new(CartSnapshot::new(items)),
                observers: Mutex::new(Vec::new()),
                next_observer: AtomicU64::new(0),
            }),
        }
    }

    /// The current cart sequence.
    ///
    /// Synchronous and never stale: reflects every mutation that has
    /// completed. The snapshot is immutable; later mutations publish new
    /// sequences without touching it.
    #[must_use]
    pub fn items(&self) -> CartSnapshot {
        self.inner
            .items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of entries currently in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items().len()
    }

    /// Whether the cart has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Append a product to the end of the cart.
    ///
    /// The product value is taken as-is: no deduplication, no stock check,
    /// no price validation. Always succeeds. Subscribers are notified with
    /// the new sequence before this returns.
    pub fn add(&self, product: Product) {
        let product_id = product.id;
        let next = {
            let mut items = self
                .inner
                .items
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            let mut entries = items.to_vec();
            entries.push(product);
            let next = CartSnapshot::new(entries);
            *items = next.clone();
            next
        };
        debug!(product = %product_id, len = next.len(), "product added to cart");
        self.notify(&next);
    }

    /// Remove every entry whose id equals `id`.
    ///
    /// Seed ids are not unique, so this removes ALL matching entries, not
    /// just one. Removing an id that matches nothing is not an error: a
    /// fresh, content-equal sequence is published and subscribers are still
    /// notified (one notification per mutation, unconditionally).
    pub fn remove(&self, id: ProductId) {
        let (next, removed) = {
            let mut items = self
                .inner
                .items
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            let before = items.len();
            let entries: Vec<Product> = items.iter().filter(|p| p.id != id).cloned().collect();
            let removed = before - entries.len();
            let next = CartSnapshot::new(entries);
            *items = next.clone();
            (next, removed)
        };
        debug!(product = %id, removed, len = next.len(), "products removed from cart");
        self.notify(&next);
    }

    /// Register a listener invoked synchronously with each new snapshot.
    ///
    /// Listeners run in subscription order. The handle unsubscribes on drop;
    /// hold it for as long as the listener should stay registered.
    ///
    /// A listener may read the store and may subscribe or unsubscribe other
    /// listeners, but must not mutate the cart from inside a notification.
    #[must_use = "dropping the Subscription unsubscribes the listener"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&CartSnapshot) + Send + Sync + 'static,
    {
        let id = self.inner.next_observer.fetch_add(1, Ordering::Relaxed);
        self.inner
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(ObserverEntry {
                id,
                listener: Arc::new(listener),
            });
        Subscription {
            id,
            store: Arc::downgrade(&self.inner),
        }
    }

    /// Invoke every registered listener with `snapshot`.
    ///
    /// The listener list is cloned first and invocation happens outside both
    /// locks, so listeners can read the store or adjust subscriptions
    /// without deadlocking.
    fn notify(&self, snapshot: &CartSnapshot) {
        let listeners: Vec<Arc<dyn Fn(&CartSnapshot) + Send + Sync>> = self
            .inner
            .observers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|entry| Arc::clone(&entry.listener))
            .collect();
        for listener in listeners {
            listener(snapshot);
        }
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Unsubscribe handle returned by [`CartStore::subscribe`].
///
/// The listener stays registered for the lifetime of this handle; dropping
/// it (or calling [`Subscription::unsubscribe`]) removes the listener.
#[must_use = "dropping the Subscription unsubscribes the listener"]
pub struct Subscription {
    id: u64,
    store: Weak<CartStoreInner>,
}

impl Subscription {
    /// Remove the listener from the store.
    pub fn unsubscribe(self) {
        // Drop does the work.
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            inner
                .observers
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .retain(|entry| entry.id != self.id);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use std::sync::atomic::AtomicUsize;

    use fernwood_core::Price;

    fn product(id: i32, cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            price: Price::from_cents(cents),
            image: format!("https://example.com/{id}.jpg"),
            stock: 10,
        }
    }

    #[test]
    fn test_add_appends_in_order() {
        let cart = CartStore::new();
        cart.add(product(1, 1000));
        cart.add(product(2, 2000));
        cart.add(product(1, 1000));

        let items = cart.items();
        let ids: Vec<i32> = items.iter().map(|p| p.id.as_i32()).collect();
        assert_eq!(ids, vec![1, 2, 1]);
    }

    #[test]
    fn test_add_does_not_mutate_input() {
        let cart = CartStore::new();
        let original = product(1, 1000);
        let passed = original.clone();
        cart.add(passed);
        // The caller's value is untouched by the store taking its copy.
        assert_eq!(original, product(1, 1000));
    }

    #[test]
    fn test_remove_drops_all_matching_entries() {
        let cart = CartStore::with_items(vec![product(1, 1000), product(1, 1000), product(2, 2000)]);
        cart.remove(ProductId::new(1));

        let items = cart.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items.first().unwrap().id, ProductId::new(2));
    }

    #[test]
    fn test_remove_missing_id_is_a_content_noop() {
        let cart = CartStore::with_items(vec![product(1, 1000), product(2, 2000)]);
        let before = cart.items();
        cart.remove(ProductId::new(9));

        let after = cart.items();
        assert_eq!(&*before, &*after);
        // A fresh sequence is still published.
        assert!(!before.ptr_eq(&after));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let cart = CartStore::with_items(vec![product(1, 1000), product(1, 1000), product(2, 2000)]);
        cart.remove(ProductId::new(1));
        let once = cart.items();
        cart.remove(ProductId::new(1));
        let twice = cart.items();
        assert_eq!(&*once, &*twice);
    }

    #[test]
    fn test_snapshots_are_immutable() {
        let cart = CartStore::with_items(vec![product(1, 1000)]);
        let snapshot = cart.items();
        cart.add(product(2, 2000));
        cart.remove(ProductId::new(1));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.first().unwrap().id, ProductId::new(1));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_subscribe_receives_each_new_snapshot() {
        let cart = CartStore::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_by_listener = Arc::clone(&seen);
        let subscription = cart.subscribe(move |items| {
            seen_by_listener.lock().unwrap().push(items.len());
        });

        cart.add(product(1, 1000));
        cart.add(product(2, 2000));
        cart.remove(ProductId::new(1));

        assert_eq!(*seen.lock().unwrap(), vec![1, 2, 1]);
        subscription.unsubscribe();
    }

    #[test]
    fn test_notification_matches_items_read() {
        let cart = CartStore::new();
        let observer_cart = cart.clone();
        let matched = Arc::new(AtomicUsize::new(0));
        let matched_by_listener = Arc::clone(&matched);
        let _subscription = cart.subscribe(move |items| {
            if observer_cart.items().ptr_eq(items) {
                matched_by_listener.fetch_add(1, Ordering::Relaxed);
            }
        });

        cart.add(product(1, 1000));
        cart.remove(ProductId::new(1));
        assert_eq!(matched.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let cart = CartStore::new();
        let count = Arc::new(AtomicUsize::new(0));
        let count_by_listener = Arc::clone(&count);
        let subscription = cart.subscribe(move |_| {
            count_by_listener.fetch_add(1, Ordering::Relaxed);
        });

        cart.add(product(1, 1000));
        subscription.unsubscribe();
        cart.add(product(2, 2000));

        assert_eq!(count.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_dropping_subscription_unsubscribes() {
        let cart = CartStore::new();
        let count = Arc::new(AtomicUsize::new(0));
        let count_by_listener = Arc::clone(&count);
        {
            let _subscription = cart.subscribe(move |_| {
                count_by_listener.fetch_add(1, Ordering::Relaxed);
            });
            cart.add(product(1, 1000));
        }
        cart.add(product(2, 2000));

        assert_eq!(count.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_listeners_run_in_subscription_order() {
        let cart = CartStore::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        let order_first = Arc::clone(&order);
        let _first = cart.subscribe(move |_| order_first.lock().unwrap().push("first"));
        let order_second = Arc::clone(&order);
        let _second = cart.subscribe(move |_| order_second.lock().unwrap().push("second"));

        cart.add(product(1, 1000));
        assert_eq!(*order.lock().unwrap(), vec!["first", "second"]);
    }
}
