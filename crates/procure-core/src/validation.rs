//! # Validation Module
//!
//! Two kinds of input handling live here.
//!
//! ## Clamping parsers (numeric form fields)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Raw text from the form            Clamped value                        │
//! │  ──────────────────────            ─────────────                        │
//! │  quantity     "-5", "abc", ""  ──► 1,  above 1 000 000 ──► 1 000 000    │
//! │  unit price   "-1", "abc"      ──► 0.00, above 10^12 ──► 10^12          │
//! │  shipping     "abc"            ──► 0.00, above 10^12 ──► 10^12          │
//! │  tax rate     "abc"            ──► default (19), "250" ──► 100          │
//! │  window days  "-3", "abc"      ──► 0                                    │
//! │                                                                         │
//! │  Never an error: the field is visually cleared, totals stay computable. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Required-field checks (submission only)
//! The only validation the forms perform beyond clamping. Totals never
//! depend on text fields, so these checks never block computation.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::Percentage;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Clamping Parsers
// =============================================================================

/// Largest quantity a line item accepts.
pub const MAX_QUANTITY: u32 = 1_000_000;

/// Largest unit price or shipping cost accepted, in euros (10^12).
///
/// Keeps every product, sum, tax and discount the engine can form far
/// inside the range of `Decimal`.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// Parses an integer, truncating decimal input ("2.7" → 2).
fn parse_integer(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    raw.parse::<i64>()
        .ok()
        .or_else(|| Decimal::from_str(raw).ok().and_then(|d| d.trunc().to_i64()))
}

/// Parses a line item quantity. Anything unparsable or below 1 becomes 1,
/// anything above [`MAX_QUANTITY`] becomes [`MAX_QUANTITY`].
///
/// ```rust
/// use procure_core::validation::clamp_quantity;
///
/// assert_eq!(clamp_quantity("3"), 3);
/// assert_eq!(clamp_quantity("-5"), 1);
/// assert_eq!(clamp_quantity("abc"), 1);
/// ```
pub fn clamp_quantity(raw: &str) -> u32 {
    match parse_integer(raw) {
        Some(qty) if qty >= 1 => u32::try_from(qty)
            .unwrap_or(MAX_QUANTITY)
            .min(MAX_QUANTITY),
        _ => 1,
    }
}

/// Parses a non-negative amount. Anything unparsable or negative becomes 0,
/// anything above [`MAX_AMOUNT`] becomes [`MAX_AMOUNT`].
///
/// ```rust
/// use procure_core::money::Money;
/// use procure_core::validation::clamp_amount;
///
/// assert_eq!(clamp_amount("12.98"), Money::from_cents(1298));
/// assert_eq!(clamp_amount("abc"), Money::zero());
/// assert_eq!(clamp_amount("-4"), Money::zero());
/// ```
pub fn clamp_amount(raw: &str) -> Money {
    match Decimal::from_str(raw.trim()) {
        Ok(value) if value >= Decimal::ZERO => Money::from_decimal(value.min(MAX_AMOUNT)),
        _ => Money::zero(),
    }
}

/// Brings an already parsed amount into `[0, MAX_AMOUNT]`.
pub fn bound_amount(amount: Money) -> Money {
    Money::from_decimal(amount.amount().max(Decimal::ZERO).min(MAX_AMOUNT))
}

/// Parses a percentage. Unparsable input falls back to `default`,
/// parsed values are clamped into `[0, 100]`.
///
/// ```rust
/// use procure_core::types::Percentage;
/// use procure_core::validation::clamp_percentage;
///
/// let default = Percentage::default_tax_rate();
/// assert_eq!(clamp_percentage("7", default), Percentage::from_whole(7));
/// assert_eq!(clamp_percentage("0", default), Percentage::zero());
/// assert_eq!(clamp_percentage("abc", default), default);
/// assert_eq!(clamp_percentage("250", default), Percentage::from_whole(100));
/// ```
pub fn clamp_percentage(raw: &str, default: Percentage) -> Percentage {
    match Decimal::from_str(raw.trim()) {
        Ok(value) => Percentage::new(value),
        Err(_) => default,
    }
}

/// Parses a day count. Anything unparsable or negative becomes 0.
pub fn clamp_days(raw: &str) -> u32 {
    match parse_integer(raw) {
        Some(days) if days >= 0 => u32::try_from(days).unwrap_or(u32::MAX),
        _ => 0,
    }
}

// =============================================================================
// Required-Field Checks
// =============================================================================

/// Fails when `value` is empty or only whitespace.
///
/// ```rust
/// use procure_core::validation::require_text;
///
/// assert!(require_text("supplierName", "Völkner Elektronik").is_ok());
/// assert!(require_text("supplierName", "   ").is_err());
/// ```
pub fn require_text(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Fails when an optional value was never filled in.
pub fn require_present<T>(field: &str, value: Option<&T>) -> ValidationResult<()> {
    match value {
        Some(_) => Ok(()),
        None => Err(ValidationError::Required {
            field: field.to_string(),
        }),
    }
}

/// Fails when an amount is missing or not greater than zero.
pub fn require_positive_amount(field: &str, value: Option<Money>) -> ValidationResult<()> {
    match value {
        None => Err(ValidationError::Required {
            field: field.to_string(),
        }),
        Some(amount) if !amount.is_positive() => Err(ValidationError::MustBePositive {
            field: field.to_string(),
        }),
        Some(_) => Ok(()),
    }
}

/// Fails when a confirmation checkbox is unchecked.
pub fn require_confirmed(field: &str, confirmed: bool) -> ValidationResult<()> {
    if !confirmed {
        return Err(ValidationError::MustBeConfirmed {
            field: field.to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_quantity() {
        assert_eq!(clamp_quantity("1"), 1);
        assert_eq!(clamp_quantity(" 12 "), 12);
        assert_eq!(clamp_quantity("2.7"), 2);

        assert_eq!(clamp_quantity("0"), 1);
        assert_eq!(clamp_quantity("-5"), 1);
        assert_eq!(clamp_quantity(""), 1);
        assert_eq!(clamp_quantity("abc"), 1);
        assert_eq!(clamp_quantity("1000000"), MAX_QUANTITY);
        assert_eq!(clamp_quantity("1000001"), MAX_QUANTITY);
        assert_eq!(clamp_quantity("99999999999"), MAX_QUANTITY);
    }

    #[test]
    fn test_clamp_amount() {
        assert_eq!(clamp_amount("75.90"), Money::from_cents(7590));
        assert_eq!(clamp_amount("0"), Money::zero());
        assert_eq!(clamp_amount("-0.01"), Money::zero());
        assert_eq!(clamp_amount("zwölf"), Money::zero());
        assert_eq!(clamp_amount(""), Money::zero());
    }

    #[test]
    fn test_amount_cap() {
        assert_eq!(MAX_AMOUNT, Decimal::from(1_000_000_000_000i64));
        assert_eq!(
            clamp_amount("79228162514264337593543950335"),
            Money::from_decimal(MAX_AMOUNT)
        );
        assert_eq!(clamp_amount("1000000000000.01"), Money::from_decimal(MAX_AMOUNT));
        assert_eq!(clamp_amount("999999999999.99").amount(), Decimal::new(99999999999999, 2));

        assert_eq!(bound_amount(Money::from_euros(-10)), Money::zero());
        assert_eq!(
            bound_amount(Money::from_decimal(Decimal::MAX)),
            Money::from_decimal(MAX_AMOUNT)
        );
        assert_eq!(bound_amount(Money::from_cents(495)), Money::from_cents(495));
    }

    #[test]
    fn test_clamp_percentage() {
        let default = Percentage::default_tax_rate();
        assert_eq!(clamp_percentage("19", default), Percentage::from_whole(19));
        assert_eq!(clamp_percentage("-1", default), Percentage::zero());
        assert_eq!(clamp_percentage("", default), default);
        assert_eq!(
            clamp_percentage("7.5", default).value(),
            Decimal::new(75, 1)
        );
    }

    #[test]
    fn test_clamp_days() {
        assert_eq!(clamp_days("10"), 10);
        assert_eq!(clamp_days("0"), 0);
        assert_eq!(clamp_days("-3"), 0);
        assert_eq!(clamp_days("x"), 0);
    }

    #[test]
    fn test_required_checks() {
        assert!(require_text("supplierAddress", "Sachsenstraße 2-4").is_ok());
        assert_eq!(
            require_text("supplierAddress", ""),
            Err(ValidationError::Required {
                field: "supplierAddress".to_string()
            })
        );

        assert!(require_present::<u8>("requestDate", None).is_err());
        assert!(require_present("requestDate", Some(&1)).is_ok());

        assert!(require_confirmed("orderingAgreement", true).is_ok());
        assert!(require_confirmed("orderingAgreement", false).is_err());
    }

    #[test]
    fn test_require_positive_amount() {
        assert!(require_positive_amount("estimatedAmount", Some(Money::from_euros(10))).is_ok());
        assert!(matches!(
            require_positive_amount("estimatedAmount", Some(Money::zero())),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            require_positive_amount("estimatedAmount", None),
            Err(ValidationError::Required { .. })
        ));
    }
}
