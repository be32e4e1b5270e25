//! # Money
//!
//! Type-safe wrapper for monetary magnitudes. A thin `f64` newtype that keeps
//! amounts from being mixed up with fractions and counts, while serializing as
//! a bare number.
//!
//! Amounts are not rounded internally. Rounding to cents happens only at the
//! presentation edge via [`Money::to_cents`].
//!
//! ## Example
//!
//! ```rust
//! use estate_core::money::Money;
//!
//! let assets = Money(120_000.0);
//! let liabilities = Money(20_000.0);
//! let net = assets - liabilities;
//! assert_eq!(net.value(), 100_000.0);
//! assert_eq!((net * 0.125).value(), 12_500.0);
//! ```

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Sub};

/// A monetary amount in the caller's currency
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(pub f64);

impl Money {
    /// Zero amount
    pub const ZERO: Money = Money(0.0);

    /// Get the raw f64 value
    pub fn value(self) -> f64 {
        self.0
    }

    /// True for finite, non-negative amounts
    pub fn is_valid_amount(self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }

    /// Amount in whole cents, rounded half away from zero
    pub fn to_cents(self) -> i64 {
        (self.0 * 100.0).round() as i64
    }

    /// Clamp negative values (floating-point dust) to zero
    pub fn non_negative(self) -> Self {
        Self(self.0.max(0.0))
    }
}

impl Add for Money {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul<f64> for Money {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Div<f64> for Money {
    type Output = Self;
    fn div(self, rhs: f64) -> Self::Output {
        Self(self.0 / rhs)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, |acc, m| acc + m)
    }
}

impl From<f64> for Money {
    fn from(value: f64) -> Self {
        Money(value)
    }
}
