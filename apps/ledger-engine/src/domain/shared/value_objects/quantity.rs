//! Quantity value object for stock counts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A whole-unit stock quantity.
///
/// Stock is counted in indivisible units, so this wraps a signed integer
/// rather than a decimal. Negative values are representable so that
/// callers can be rejected explicitly instead of silently clamped; the
/// ledger never stores a negative quantity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Quantity(i64);

impl Quantity {
    /// Zero quantity.
    pub const ZERO: Self = Self(0);

    /// Create a new Quantity from raw units.
    #[must_use]
    pub const fn new(units: i64) -> Self {
        Self(units)
    }

    /// Get the raw unit count.
    #[must_use]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Whether this quantity is strictly positive.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Whether this quantity is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition; `None` on overflow.
    #[must_use]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(units) => Some(Self(units)),
            None => None,
        }
    }

    /// Checked subtraction; `None` on overflow.
    #[must_use]
    pub const fn checked_sub(self, other: Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(units) => Some(Self(units)),
            None => None,
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Quantity {
    fn from(units: i64) -> Self {
        Self(units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_units() {
        let q = Quantity::new(10);
        assert_eq!(q.units(), 10);
        assert_eq!(format!("{q}"), "10");
    }

    #[test]
    fn positivity() {
        assert!(Quantity::new(1).is_positive());
        assert!(!Quantity::ZERO.is_positive());
        assert!(!Quantity::new(-1).is_positive());
        assert!(Quantity::ZERO.is_zero());
    }

    #[test]
    fn checked_arithmetic() {
        let a = Quantity::new(10);
        let b = Quantity::new(4);
        assert_eq!(a.checked_add(b), Some(Quantity::new(14)));
        assert_eq!(a.checked_sub(b), Some(Quantity::new(6)));
    }

    #[test]
    fn checked_add_overflow_is_none() {
        let max = Quantity::new(i64::MAX);
        assert_eq!(max.checked_add(Quantity::new(1)), None);
    }

    #[test]
    fn ordering() {
        assert!(Quantity::new(4) < Quantity::new(6));
        assert!(Quantity::new(6) >= Quantity::new(6));
    }
}
