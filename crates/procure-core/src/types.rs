//! # Domain Types
//!
//! Small value types shared by the order form and the credit card form.
//!
//! ```text
//! ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐
//! │   Percentage    │   │  DiscountTerms  │   │ DeliveryRegion  │
//! │  ─────────────  │   │  ─────────────  │   │  ─────────────  │
//! │  0..=100        │   │  rate (Skonto)  │   │  Germany        │
//! │  19 = 19 %      │   │  window_days    │   │  EuCountry      │
//! └─────────────────┘   └─────────────────┘   │  ThirdCountry   │
//!                                             └─────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::DEFAULT_TAX_RATE_PERCENT;

// =============================================================================
// Percentage
// =============================================================================

/// A percentage in the closed range `[0, 100]`.
///
/// Used for the VAT rate and the Skonto rate. Values outside the range are
/// clamped on construction and on deserialization, so a `Percentage` is
/// always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, TS)]
#[ts(export)]
pub struct Percentage(#[ts(type = "string")] Decimal);

impl Percentage {
    /// Creates a percentage, clamping into `[0, 100]`.
    pub fn new(value: Decimal) -> Self {
        Percentage(value.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED))
    }

    /// Creates a whole-number percentage (`19` = 19 %).
    pub fn from_whole(value: u32) -> Self {
        Self::new(Decimal::from(value))
    }

    #[inline]
    pub const fn zero() -> Self {
        Percentage(Decimal::ZERO)
    }

    /// The percentage value itself (`19` for 19 %).
    #[inline]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// The multiplier (`0.19` for 19 %).
    #[inline]
    pub fn fraction(&self) -> Decimal {
        self.0 / Decimal::ONE_HUNDRED
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// The default VAT rate.
    pub fn default_tax_rate() -> Self {
        Self::from_whole(DEFAULT_TAX_RATE_PERCENT)
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Percentage::zero()
    }
}

impl From<Decimal> for Percentage {
    fn from(value: Decimal) -> Self {
        Percentage::new(value)
    }
}

impl<'de> Deserialize<'de> for Percentage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        <Decimal as Deserialize>::deserialize(deserializer).map(Percentage::from)
    }
}

/// `19`, `7.5`: trailing zeros stripped, no `%` sign.
impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

// =============================================================================
// Discount Terms (Skonto)
// =============================================================================

/// Early-payment discount: `rate` percent off when paid within `window_days`.
///
/// The discount only applies when both parts are set. A rate without a
/// payment window (or the reverse) is inactive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DiscountTerms {
    pub rate: Percentage,
    pub window_days: u32,
}

impl DiscountTerms {
    pub fn new(rate: Percentage, window_days: u32) -> Self {
        DiscountTerms { rate, window_days }
    }

    /// No discount.
    pub fn none() -> Self {
        Self::default()
    }

    /// True when both the rate and the window are positive.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.rate.is_positive() && self.window_days > 0
    }
}

// =============================================================================
// Delivery Region
// =============================================================================

/// Where a credit card purchase is delivered from.
///
/// Purchases from EU countries and third countries have different VAT
/// handling, so the form asks for it explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryRegion {
    #[default]
    Germany,
    EuCountry,
    ThirdCountry,
}

impl DeliveryRegion {
    /// Form label.
    pub fn label(&self) -> &'static str {
        match self {
            DeliveryRegion::Germany => "Deutschland",
            DeliveryRegion::EuCountry => "EU-Land",
            DeliveryRegion::ThirdCountry => "Drittland",
        }
    }

    /// True for deliveries crossing the German border.
    pub fn is_foreign(&self) -> bool {
        !matches!(self, DeliveryRegion::Germany)
    }
}

impl std::str::FromStr for DeliveryRegion {
    type Err = crate::error::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "deutschland" | "germany" | "de" => Ok(DeliveryRegion::Germany),
            "eu-land" | "eu" | "eu-country" => Ok(DeliveryRegion::EuCountry),
            "drittland" | "third-country" => Ok(DeliveryRegion::ThirdCountry),
            other => Err(crate::error::ValidationError::InvalidFormat {
                field: "deliveryCountry".to_string(),
                reason: format!(
                    "unknown region '{}', expected deutschland, eu-land or drittland",
                    other
                ),
            }),
        }
    }
}

// =============================================================================
// Request Status
// =============================================================================

/// Status of a submitted credit card request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// Submitted, waiting to be printed and signed.
    #[default]
    Pending,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_clamps() {
        assert_eq!(Percentage::new(Decimal::from(150)).value(), Decimal::ONE_HUNDRED);
        assert_eq!(Percentage::new(Decimal::from(-3)).value(), Decimal::ZERO);
        assert_eq!(Percentage::from_whole(19).value(), Decimal::from(19));
    }

    #[test]
    fn test_percentage_clamps_when_deserialized() {
        let high: Percentage = serde_json::from_str("\"250\"").unwrap();
        assert_eq!(high, Percentage::from_whole(100));

        let low: Percentage = serde_json::from_str("\"-5\"").unwrap();
        assert_eq!(low, Percentage::zero());

        let terms: DiscountTerms =
            serde_json::from_str(r#"{"rate":"-5","windowDays":10}"#).unwrap();
        assert_eq!(terms.rate, Percentage::zero());
        assert!(!terms.is_active());
    }

    #[test]
    fn test_percentage_fraction() {
        assert_eq!(Percentage::from_whole(19).fraction(), Decimal::new(19, 2));
        assert_eq!(Percentage::new(Decimal::new(75, 1)).to_string(), "7.5");
    }

    #[test]
    fn test_default_tax_rate() {
        assert_eq!(Percentage::default_tax_rate(), Percentage::from_whole(19));
    }

    #[test]
    fn test_discount_terms_need_both_parts() {
        assert!(!DiscountTerms::none().is_active());
        assert!(!DiscountTerms::new(Percentage::from_whole(2), 0).is_active());
        assert!(!DiscountTerms::new(Percentage::zero(), 10).is_active());
        assert!(DiscountTerms::new(Percentage::from_whole(2), 10).is_active());
    }

    #[test]
    fn test_delivery_region_parsing() {
        assert_eq!("deutschland".parse::<DeliveryRegion>().unwrap(), DeliveryRegion::Germany);
        assert_eq!("EU-Land".parse::<DeliveryRegion>().unwrap(), DeliveryRegion::EuCountry);
        assert_eq!("drittland".parse::<DeliveryRegion>().unwrap(), DeliveryRegion::ThirdCountry);
        assert!("mars".parse::<DeliveryRegion>().is_err());
        assert!(DeliveryRegion::ThirdCountry.is_foreign());
    }
}
