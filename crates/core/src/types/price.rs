//! Type-safe price representation using decimal arithmetic.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount in the storefront's single implicit currency.
///
/// Backed by [`Decimal`] so sums over many line items stay exact. Arithmetic
/// applies no rounding; display formatting is a view-layer concern.
///
/// The type does not enforce non-negativity - seed data is non-negative by
/// convention, and cart operations accept any price without validation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// The zero amount. Also the total of an empty cart.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from a whole number of cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        assert_eq!(Price::from_cents(10995).to_string(), "109.95");
        assert_eq!(Price::from_cents(0), Price::ZERO);
    }

    #[test]
    fn test_sum_is_exact() {
        let prices = [
            Price::from_cents(10995),
            Price::from_cents(2230),
            Price::from_cents(5599),
            Price::from_cents(1599),
            Price::from_cents(10995),
        ];
        let total: Price = prices.into_iter().sum();
        assert_eq!(total, Price::from_cents(31418));
    }

    #[test]
    fn test_empty_sum_is_zero() {
        let total: Price = core::iter::empty().sum();
        assert_eq!(total, Price::ZERO);
    }

    #[test]
    fn test_serde_roundtrip_preserves_scale() {
        let price = Price::from_cents(2230);
        let json = serde_json::to_string(&price).expect("serialize");
        let back: Price = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, price);
    }
}
