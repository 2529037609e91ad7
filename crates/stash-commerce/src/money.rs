//! Price type for catalog and cart amounts.
//!
//! Amounts are whole currency units held as integers; the storefront shows
//! prices without minor units and never converts between currencies, so the
//! currency is a display label supplied at render time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// A non-negative amount in whole currency units.
///
/// Serializes as a bare integer so persisted carts stay `"price": 250`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// Create a price from a whole-unit amount.
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Zero amount.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// The raw amount.
    pub const fn amount(&self) -> u64 {
        self.0
    }

    /// Line amount for `quantity` units. Saturates instead of wrapping.
    pub fn times(&self, quantity: u32) -> Price {
        Price(self.0.saturating_mul(u64::from(quantity)))
    }

    /// Format with a currency label, e.g. `"EGP 250"`.
    pub fn display(&self, currency: &str) -> String {
        format!("{} {}", currency, self.0)
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, other: Price) -> Price {
        Price(self.0.saturating_add(other.0))
    }
}

impl Mul<u32> for Price {
    type Output = Price;

    fn mul(self, quantity: u32) -> Price {
        self.times(quantity)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::zero(), |acc, p| acc + p)
    }
}

impl From<u64> for Price {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
