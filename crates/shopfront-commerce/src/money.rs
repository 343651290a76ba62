//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations. Rounding to two
//! decimals only happens when a value is formatted for display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// Symbol prefixed to displayed amounts.
pub const CURRENCY_SYMBOL: &str = "$";

/// A monetary value in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
}

impl Money {
    /// Create a new Money value from cents.
    pub const fn new(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// Create a zero amount.
    pub const fn zero() -> Self {
        Self::new(0)
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }

    /// Format as a display string (e.g., "$49.99").
    ///
    /// ```
    /// use shopfront_commerce::money::Money;
    /// assert_eq!(Money::new(4999).display(), "$49.99");
    /// ```
    pub fn display(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}{}", sign, CURRENCY_SYMBOL, self.display_amount())
    }

    /// Format the absolute amount without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let abs = self.amount_cents.unsigned_abs();
        format!("{}.{:02}", abs / 100, abs % 100)
    }

    /// Add another Money value, returning None on overflow.
    pub fn checked_add(&self, other: &Money) -> Option<Money> {
        self.amount_cents.checked_add(other.amount_cents).map(Money::new)
    }

    /// Multiply by a quantity, returning None on overflow.
    pub fn checked_mul(&self, factor: i64) -> Option<Money> {
        self.amount_cents.checked_mul(factor).map(Money::new)
    }

    /// Sum an iterator of Money values, returning None on overflow.
    pub fn checked_sum<'a>(iter: impl IntoIterator<Item = &'a Money>) -> Option<Money> {
        iter.into_iter()
            .try_fold(Money::zero(), |acc, m| acc.checked_add(m))
    }
}

impl Add for Money {
    type Output = Money;

    /// Saturating addition.
    fn add(self, other: Money) -> Money {
        Money::new(self.amount_cents.saturating_add(other.amount_cents))
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    /// Saturating multiplication.
    fn mul(self, factor: i64) -> Money {
        Money::new(self.amount_cents.saturating_mul(factor))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(4999).display(), "$49.99");
        assert_eq!(Money::new(2500).display(), "$25.00");
        assert_eq!(Money::new(5).display(), "$0.05");
        assert_eq!(Money::zero().display(), "$0.00");
        assert_eq!(Money::new(-150).display(), "-$1.50");
    }

    #[test]
    fn test_money_addition() {
        let c = Money::new(1000) + Money::new(500);
        assert_eq!(c.amount_cents, 1500);
    }

    #[test]
    fn test_money_multiply() {
        assert_eq!((Money::new(1000) * 3).amount_cents, 3000);
    }

    #[test]
    fn test_money_saturates() {
        let max = Money::new(i64::MAX);
        assert_eq!((max + Money::new(1)).amount_cents, i64::MAX);
        assert_eq!((max * 2).amount_cents, i64::MAX);
    }

    #[test]
    fn test_checked_arithmetic() {
        let max = Money::new(i64::MAX);
        assert_eq!(max.checked_add(&Money::new(1)), None);
        assert_eq!(max.checked_mul(2), None);
        assert_eq!(Money::new(250).checked_mul(4), Some(Money::new(1000)));
    }

    #[test]
    fn test_checked_sum() {
        let values = [Money::new(100), Money::new(250)];
        assert_eq!(Money::checked_sum(&values), Some(Money::new(350)));
        assert_eq!(Money::checked_sum(std::iter::empty()), Some(Money::zero()));
    }

    #[test]
    fn test_sum_trait() {
        let total: Money = vec![Money::new(1), Money::new(2)].into_iter().sum();
        assert_eq!(total, Money::new(3));
    }
}
