//! # Order Totals Engine
//!
//! Turns the item list plus four scalar inputs into the order totals.
//!
//! ## Computation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  subtotal        = Σ line_total                                         │
//! │                        │                                                │
//! │  + shipping_cost ──────┤                                                │
//! │                        ▼                                                │
//! │  tax_amount      = (subtotal + shipping) × tax_rate / 100   (rate > 0)  │
//! │                        │                                                │
//! │                        ▼                                                │
//! │  gross_total     = subtotal + shipping + tax_amount                     │
//! │                        │                                                │
//! │                        ▼                                                │
//! │  discount_amount = gross_total × skonto / 100   (rate > 0 AND days > 0) │
//! │                        │                                                │
//! │                        ▼                                                │
//! │  net_after_discount = gross_total − discount_amount                     │
//! │                                                                         │
//! │  Nothing is rounded here. DisplayTotals rounds each value to cents.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Hidden State
//! `OrderTotals` is a plain value derived from its inputs. There is no cache:
//! callers recompute after every edit, which is linear in the item count.

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::items::LineItems;
use crate::money::Money;
use crate::types::{DiscountTerms, Percentage};
use crate::validation::{bound_amount, clamp_amount, clamp_days, clamp_percentage};

// =============================================================================
// Adjustments
// =============================================================================

/// The scalar inputs of the order summary.
///
/// Deserializing applies the same ranges as the form setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Adjustments {
    /// Non-negative shipping cost. Default 0.
    pub shipping_cost: Money,
    /// VAT rate. Default 19 %.
    pub tax_rate: Percentage,
    /// Skonto. Default none.
    pub discount: DiscountTerms,
}

impl Default for Adjustments {
    fn default() -> Self {
        Adjustments {
            shipping_cost: Money::zero(),
            tax_rate: Percentage::default_tax_rate(),
            discount: DiscountTerms::none(),
        }
    }
}

impl<'de> Deserialize<'de> for Adjustments {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Raw {
            shipping_cost: Money,
            tax_rate: Percentage,
            discount: DiscountTerms,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(Adjustments {
            shipping_cost: bound_amount(raw.shipping_cost),
            tax_rate: raw.tax_rate,
            discount: raw.discount,
        })
    }
}

impl Adjustments {
    /// Sets the shipping cost from raw form text (invalid → 0).
    pub fn with_shipping_cost(mut self, raw: &str) -> Self {
        self.shipping_cost = clamp_amount(raw);
        self
    }

    /// Sets the VAT rate from raw form text (invalid → default 19 %).
    pub fn with_tax_rate(mut self, raw: &str) -> Self {
        self.tax_rate = clamp_percentage(raw, Percentage::default_tax_rate());
        self
    }

    /// Sets the Skonto rate from raw form text (invalid → 0).
    pub fn with_discount_rate(mut self, raw: &str) -> Self {
        self.discount.rate = clamp_percentage(raw, Percentage::zero());
        self
    }

    /// Sets the Skonto payment window from raw form text (invalid → 0).
    pub fn with_discount_window_days(mut self, raw: &str) -> Self {
        self.discount.window_days = clamp_days(raw);
        self
    }
}

// =============================================================================
// Order Totals
// =============================================================================

/// Exact, unrounded order totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    pub subtotal: Money,
    pub shipping_cost: Money,
    pub tax_rate: Percentage,
    pub tax_amount: Money,
    pub gross_total: Money,
    pub discount: DiscountTerms,
    pub discount_amount: Money,
    pub net_after_discount: Money,
}

impl OrderTotals {
    /// Computes all totals from the current items and adjustments.
    pub fn compute(items: &LineItems, adjustments: &Adjustments) -> Self {
        let subtotal = items.subtotal();
        let shipping_cost = adjustments.shipping_cost;
        let tax_rate = adjustments.tax_rate;

        let tax_amount = if tax_rate.is_positive() {
            (subtotal + shipping_cost).percentage_of(tax_rate)
        } else {
            Money::zero()
        };

        let gross_total = subtotal + shipping_cost + tax_amount;

        let discount = adjustments.discount;
        let discount_amount = if discount.is_active() {
            gross_total.percentage_of(discount.rate)
        } else {
            Money::zero()
        };

        OrderTotals {
            subtotal,
            shipping_cost,
            tax_rate,
            tax_amount,
            gross_total,
            discount,
            discount_amount,
            net_after_discount: gross_total - discount_amount,
        }
    }

    /// True when a Skonto is in effect.
    pub fn has_discount(&self) -> bool {
        self.discount.is_active()
    }

    /// Rounds every amount for display.
    pub fn display(&self) -> DisplayTotals {
        DisplayTotals::from(self)
    }
}

/// Computes the totals of an order.
///
/// Deterministic and side-effect free: identical inputs always give
/// identical totals.
///
/// ```rust
/// use procure_core::items::{LineItem, LineItems};
/// use procure_core::money::Money;
/// use procure_core::totals::{recompute, Adjustments};
///
/// let items = LineItems::from_items([LineItem::new("Kabel", 4, Money::from_cents(250))]);
/// let totals = recompute(&items, &Adjustments::default().with_tax_rate("0"));
///
/// assert_eq!(totals.tax_amount, Money::zero());
/// assert_eq!(totals.gross_total, Money::from_cents(1000));
/// ```
pub fn recompute(items: &LineItems, adjustments: &Adjustments) -> OrderTotals {
    OrderTotals::compute(items, adjustments)
}

// =============================================================================
// Display Totals
// =============================================================================

/// Totals pre-formatted with exactly two fraction digits, for the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DisplayTotals {
    pub subtotal: String,
    pub shipping_cost: String,
    pub tax_rate: String,
    pub tax_amount: String,
    pub gross_total: String,
    pub discount_amount: String,
    pub net_after_discount: String,
}

impl From<&OrderTotals> for DisplayTotals {
    fn from(totals: &OrderTotals) -> Self {
        DisplayTotals {
            subtotal: totals.subtotal.to_string(),
            shipping_cost: totals.shipping_cost.to_string(),
            tax_rate: totals.tax_rate.to_string(),
            tax_amount: totals.tax_amount.to_string(),
            gross_total: totals.gross_total.to_string(),
            discount_amount: totals.discount_amount.to_string(),
            net_after_discount: totals.net_after_discount.to_string(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{ItemField, LineItem};
    use rust_decimal::Decimal;

    fn sample_items() -> LineItems {
        LineItems::from_items([
            LineItem::new("VOLTCRAFT VC 37 SE", 2, Money::from_cents(1298)),
            LineItem::new("IVT DR-2000", 1, Money::from_cents(7204)),
            LineItem::new("VOSS.pet fenci M09", 1, Money::from_cents(7590)),
        ])
    }

    #[test]
    fn test_sample_order_totals() {
        let totals = recompute(&sample_items(), &Adjustments::default());

        assert_eq!(totals.subtotal, Money::from_cents(17390));
        assert_eq!(totals.tax_amount.amount(), Decimal::new(33041, 3));
        assert_eq!(totals.gross_total.amount(), Decimal::new(206941, 3));

        let display = totals.display();
        assert_eq!(display.subtotal, "173.90");
        assert_eq!(display.shipping_cost, "0.00");
        assert_eq!(display.tax_rate, "19");
        assert_eq!(display.tax_amount, "33.04");
        assert_eq!(display.gross_total, "206.94");
        assert_eq!(display.discount_amount, "0.00");
        assert_eq!(display.net_after_discount, "206.94");
    }

    #[test]
    fn test_sample_order_with_skonto() {
        let adjustments = Adjustments::default()
            .with_discount_rate("2")
            .with_discount_window_days("10");
        let totals = recompute(&sample_items(), &adjustments);

        assert!(totals.has_discount());
        let display = totals.display();
        assert_eq!(display.discount_amount, "4.14");
        assert_eq!(display.net_after_discount, "202.80");
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let items = sample_items();
        let adjustments = Adjustments::default()
            .with_shipping_cost("4.95")
            .with_discount_rate("3")
            .with_discount_window_days("14");

        let first = recompute(&items, &adjustments);
        let second = recompute(&items, &adjustments);
        assert_eq!(first, second);
    }

    #[test]
    fn test_tax_gating() {
        let adjustments = Adjustments::default()
            .with_shipping_cost("10")
            .with_tax_rate("0");
        let totals = recompute(&sample_items(), &adjustments);

        assert_eq!(totals.tax_amount, Money::zero());
        assert_eq!(totals.gross_total, Money::from_cents(18390));
    }

    #[test]
    fn test_tax_applies_to_shipping() {
        let items = LineItems::from_items([LineItem::new("Papier", 1, Money::from_euros(100))]);
        let adjustments = Adjustments::default().with_shipping_cost("10");
        let totals = recompute(&items, &adjustments);

        assert_eq!(totals.tax_amount, Money::from_cents(2090));
        assert_eq!(totals.gross_total, Money::from_cents(13090));
    }

    #[test]
    fn test_discount_gating() {
        let items = sample_items();

        let rate_only = Adjustments::default().with_discount_rate("2");
        assert_eq!(recompute(&items, &rate_only).discount_amount, Money::zero());

        let window_only = Adjustments::default().with_discount_window_days("10");
        assert_eq!(recompute(&items, &window_only).discount_amount, Money::zero());

        let totals = recompute(&items, &Adjustments::default());
        assert_eq!(totals.net_after_discount, totals.gross_total);
    }

    #[test]
    fn test_invalid_scalars_are_clamped() {
        let adjustments = Adjustments::default()
            .with_shipping_cost("abc")
            .with_tax_rate("abc")
            .with_discount_rate("-2")
            .with_discount_window_days("soon");

        assert_eq!(adjustments.shipping_cost, Money::zero());
        assert_eq!(adjustments.tax_rate, Percentage::from_whole(19));
        assert_eq!(adjustments.discount, DiscountTerms::none());
    }

    #[test]
    fn test_deserialized_adjustments_are_clamped() {
        let json = r#"{"shippingCost":"-10","taxRate":"250","discount":{"rate":"-5","windowDays":10}}"#;
        let adjustments: Adjustments = serde_json::from_str(json).unwrap();

        assert_eq!(adjustments.shipping_cost, Money::zero());
        assert_eq!(adjustments.tax_rate, Percentage::from_whole(100));
        assert_eq!(adjustments.discount.rate, Percentage::zero());

        let items = LineItems::from_items([LineItem::new("Papier", 1, Money::from_euros(100))]);
        let totals = recompute(&items, &adjustments);
        assert_eq!(totals.tax_amount, Money::from_euros(100));
        assert_eq!(totals.gross_total, Money::from_euros(200));
        assert_eq!(totals.net_after_discount, totals.gross_total);
    }

    #[test]
    fn test_adjustments_json_keeps_valid_values() {
        let adjustments = Adjustments::default()
            .with_shipping_cost("4.95")
            .with_discount_rate("2")
            .with_discount_window_days("10");
        let json = serde_json::to_string(&adjustments).unwrap();
        let parsed: Adjustments = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, adjustments);
    }

    #[test]
    fn test_no_intermediate_rounding() {
        // 3 × 0.333 = 0.999, tax 19 % = 0.18981
        let items = LineItems::new();
        let id = items.first().id();
        let items = items
            .update_item(id, ItemField::Quantity, "3")
            .update_item(id, ItemField::UnitPrice, "0.333");

        let totals = recompute(&items, &Adjustments::default());
        assert_eq!(totals.subtotal.amount(), Decimal::new(999, 3));
        assert_eq!(totals.gross_total.amount(), Decimal::new(118881, 5));
        assert_eq!(totals.display().gross_total, "1.19");
    }

    #[test]
    fn test_largest_inputs_do_not_overflow() {
        let huge = "50000000000000000000000000000";
        let items = LineItems::new().add_item();
        let (first, second) = (items.first().id(), items.last().id());
        let items = items
            .update_item(first, ItemField::UnitPrice, huge)
            .update_item(first, ItemField::Quantity, "99999999")
            .update_item(second, ItemField::UnitPrice, huge)
            .update_item(second, ItemField::Quantity, "99999999");
        let adjustments = Adjustments::default()
            .with_shipping_cost(huge)
            .with_tax_rate("100")
            .with_discount_rate("100")
            .with_discount_window_days("30");

        let totals = recompute(&items, &adjustments);

        // 2 × 10^6 × 10^12 + 10^12, doubled by 100 % VAT
        let expected = Decimal::from(2_000_001_000_000_000_000i64) * Decimal::TWO;
        assert_eq!(totals.gross_total.amount(), expected);
        assert_eq!(totals.net_after_discount, Money::zero());
        assert_eq!(recompute(&items, &adjustments), totals);
    }

    #[test]
    fn test_totals_follow_item_edits() {
        let items = sample_items();
        let before = recompute(&items, &Adjustments::default());

        let first = items.first().id();
        let items = items.remove_item(first);
        let after = recompute(&items, &Adjustments::default());

        assert_eq!(before.subtotal - after.subtotal, Money::from_cents(2596));
    }
}
