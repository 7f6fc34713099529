//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In floating point:                                                 │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  Integer cents fix addition but not derived amounts:                │
//! │    10% off $2019.97 = $1817.973  → not a whole number of cents      │
//! │                                                                     │
//! │  OUR SOLUTION: rust_decimal                                         │
//! │    Exact base-10 arithmetic; sub-cent discount results are kept     │
//! │    exactly and only rounded at the display boundary                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shopkit_core::money::Money;
//!
//! // Create from scaled integer units (mantissa + scale)
//! let price = Money::new(1099, 2); // $10.99
//!
//! // Arithmetic operations
//! let line_total = price * 2;                 // $21.98
//! let total = price + Money::new(500, 2);     // $15.99
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value as an exact decimal.
///
/// ## Design Decisions
/// - **Decimal (signed)**: Allows negative values for discount deltas
/// - **Single field tuple struct**: Zero-cost abstraction over `Decimal`
/// - **`serde(transparent)`**: Serializes as a plain decimal number
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money value from a scaled integer mantissa.
    ///
    /// ## Example
    /// ```rust
    /// use shopkit_core::money::Money;
    ///
    /// let price = Money::new(99999, 2); // $999.99
    /// ```
    #[inline]
    pub fn new(units: i64, scale: u32) -> Self {
        Money(Decimal::new(units, scale))
    }

    /// Wraps an already-computed decimal amount.
    #[inline]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Returns the underlying decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Returns the larger of two amounts.
    ///
    /// Used by the fixed-amount discount to clamp at zero.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        if self.0 >= other.0 {
            self
        } else {
            other
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// Rounds to two decimal places for display only; the stored amount keeps
/// full precision. Locale-correct formatting is a caller concern.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}${:.2}", sign, self.0.abs())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by quantity (for line-total calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * Decimal::from(qty))
    }
}

/// Summation over line totals.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_from_scaled_units() {
        let money = Money::new(1099, 2);
        assert_eq!(money.amount(), Decimal::new(1099, 2));
        assert!(!money.is_zero());
        assert!(!money.is_negative());
    }

    #[test]
    fn test_zero_and_default() {
        assert!(Money::zero().is_zero());
        assert_eq!(Money::default(), Money::zero());
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::new(1099, 2); // $10.99
        let b = Money::new(500, 2); // $5.00

        assert_eq!(a + b, Money::new(1599, 2));
        assert_eq!(a - b, Money::new(599, 2));
        assert_eq!(b * 3, Money::new(1500, 2));
    }

    #[test]
    fn test_sub_can_go_negative() {
        let small = Money::new(100, 2);
        let big = Money::new(500, 2);
        assert!((small - big).is_negative());
    }

    #[test]
    fn test_max_clamps() {
        let negative = Money::new(-250, 2);
        assert_eq!(negative.max(Money::zero()), Money::zero());
        assert_eq!(Money::new(250, 2).max(Money::zero()), Money::new(250, 2));
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money::new(100, 2), Money::new(250, 2), Money::new(1, 2)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::new(351, 2));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::new(1099, 2).to_string(), "$10.99");
        assert_eq!(Money::new(-550, 2).to_string(), "-$5.50");
        // Sub-cent amounts round for display only
        assert_eq!(Money::new(1817973, 3).to_string(), "$1817.97");
    }

    #[test]
    fn test_equality_ignores_scale() {
        assert_eq!(Money::new(10, 0), Money::new(1000, 2));
    }
}
