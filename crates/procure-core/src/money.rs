//! # Money Module
//!
//! Provides the `Money` type for monetary values in euros.
//!
//! ## Why Exact Decimals?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  THE EARLY ROUNDING PROBLEM                                             │
//! │    Rounding tax to cents before adding it to the gross total makes      │
//! │    repeated recomputation drift.                                        │
//! │                                                                         │
//! │  OUR SOLUTION: rust_decimal, rounded only for display                   │
//! │    173.90 × 0.19 = 33.041 (kept exactly)                                │
//! │    gross = 206.941 → displayed as 206.94                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use procure_core::money::Money;
//!
//! let price = Money::from_cents(1298); // 12.98 €
//! let line_total = price.multiply_quantity(2);
//! assert_eq!(line_total.to_string(), "25.96");
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::types::Percentage;

/// Number of fraction digits shown for any amount.
pub const DISPLAY_SCALE: u32 = 2;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in euros, held as an exact decimal.
///
/// ## Design Decisions
/// - **No rounding in arithmetic**: `Add`, `Sub`, tax and discount keep full
///   precision. Only [`Money::rounded`] and `Display` round.
/// - **Signed**: subtraction may go negative, although the engine itself only
///   produces non-negative amounts.
/// - **Saturating**: every operation stops at `Decimal::MAX`/`Decimal::MIN`
///   instead of overflowing. Form input is capped far below that by
///   [`crate::validation::MAX_AMOUNT`].
///
/// ## Where Money is Used
/// ```text
/// LineItem.unit_price ──► LineItem.line_total ──► OrderTotals.subtotal
///                                                        │
/// shipping_cost ─────────────────────────────────────────┤
///                                                        ▼
///                                tax_amount ──► gross_total ──► Skonto
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(#[ts(type = "string")] Decimal);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use procure_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(7204).to_string(), "72.04");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    /// Wraps an exact decimal amount in euros.
    #[inline]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a whole-euro amount.
    #[inline]
    pub fn from_euros(euros: i64) -> Self {
        Money(Decimal::from(euros))
    }

    /// Returns the exact, unrounded amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Rounds to cents, half away from zero.
    ///
    /// This is the presentation boundary. Never feed a rounded value back
    /// into a computation.
    ///
    /// ```rust
    /// use procure_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let tax = Money::from_decimal(Decimal::new(33041, 3)); // 33.041
    /// assert_eq!(tax.rounded(), Money::from_cents(3304));
    ///
    /// let half = Money::from_decimal(Decimal::new(1005, 3)); // 1.005
    /// assert_eq!(half.rounded(), Money::from_cents(101));
    /// ```
    pub fn rounded(&self) -> Money {
        let mut value = self
            .0
            .round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        value.rescale(DISPLAY_SCALE);
        Money(value)
    }

    /// Multiplies a unit price by a quantity, saturating at `Decimal::MAX`.
    ///
    /// ```rust
    /// use procure_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(1298);
    /// assert_eq!(unit_price.multiply_quantity(2), Money::from_cents(2596));
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: u32) -> Money {
        Money(self.0.saturating_mul(Decimal::from(qty)))
    }

    /// Returns `rate` percent of this amount, unrounded.
    ///
    /// ```rust
    /// use procure_core::money::Money;
    /// use procure_core::types::Percentage;
    /// use rust_decimal::Decimal;
    ///
    /// let base = Money::from_cents(17390);
    /// let tax = base.percentage_of(Percentage::from_whole(19));
    /// assert_eq!(tax.amount(), Decimal::new(33041, 3)); // 33.041
    /// ```
    #[inline]
    pub fn percentage_of(&self, rate: Percentage) -> Money {
        Money(self.0.saturating_mul(rate.fraction()))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount rounded to exactly two fraction digits, no symbol.
///
/// Currency symbols are added by the session config.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rounded().0)
    }
}

/// Strict parse of a decimal amount ("12.98", "  5 ").
///
/// The clamping variant used for form input lives in
/// [`crate::validation::clamp_amount`].
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim())
            .map(Money)
            .map_err(|e| ValidationError::InvalidFormat {
                field: "amount".to_string(),
                reason: e.to_string(),
            })
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1298);
        assert_eq!(money.amount(), Decimal::new(1298, 2));
        assert_eq!(money.to_string(), "12.98");
    }

    #[test]
    fn test_display_pads_to_two_digits() {
        assert_eq!(Money::zero().to_string(), "0.00");
        assert_eq!(Money::from_euros(5).to_string(), "5.00");
        assert_eq!(Money::from_cents(7590).to_string(), "75.90");
        assert_eq!(Money::from_cents(-550).to_string(), "-5.50");
    }

    #[test]
    fn test_rounding_is_display_only() {
        let a = Money::from_decimal(Decimal::new(1004, 3)); // 1.004
        let b = Money::from_decimal(Decimal::new(1004, 3)); // 1.004

        // Rounded separately: 1.00 + 1.00, exactly: 2.008 → 2.01
        assert_eq!((a.rounded() + b.rounded()).to_string(), "2.00");
        assert_eq!((a + b).to_string(), "2.01");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(250);

        assert_eq!(a + b, Money::from_cents(1250));
        assert_eq!(a - b, Money::from_cents(750));

        let mut c = a;
        c += b;
        assert_eq!(c, Money::from_cents(1250));
    }

    #[test]
    fn test_arithmetic_saturates() {
        let max = Money::from_decimal(Decimal::MAX);

        assert_eq!(max.multiply_quantity(2), max);
        assert_eq!(max + max, max);
        assert_eq!(Money::from_decimal(Decimal::MIN) - max, Money::from_decimal(Decimal::MIN));

        let mut total = max;
        total += Money::from_cents(1);
        assert_eq!(total, max);

        let total: Money = [max, max, max].iter().sum();
        assert_eq!(total, max);
    }

    #[test]
    fn test_sum() {
        let amounts = [
            Money::from_cents(2596),
            Money::from_cents(7204),
            Money::from_cents(7590),
        ];
        let total: Money = amounts.iter().sum();
        assert_eq!(total, Money::from_cents(17390));
    }

    #[test]
    fn test_percentage_of() {
        let gross = Money::from_decimal(Decimal::new(206941, 3)); // 206.941
        let skonto = gross.percentage_of(Percentage::from_whole(2));
        assert_eq!(skonto.to_string(), "4.14");
    }

    #[test]
    fn test_checks() {
        assert!(Money::zero().is_zero());
        assert!(Money::from_cents(1).is_positive());
        assert!(Money::from_cents(-1).is_negative());
    }

    #[test]
    fn test_parse() {
        assert_eq!("12.98".parse::<Money>().unwrap(), Money::from_cents(1298));
        assert_eq!(" 5 ".parse::<Money>().unwrap(), Money::from_euros(5));
        assert!("abc".parse::<Money>().is_err());
    }
}
