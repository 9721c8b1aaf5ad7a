//! # Order Form Data
//!
//! The administrative fields of the order form and the snapshot handed to
//! printing or persistence once the form is submitted.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreResult, ValidationErrors};
use crate::items::{LineItem, LineItems};
use crate::money::Money;
use crate::order_number::OrderNumber;
use crate::totals::{Adjustments, DisplayTotals, OrderTotals};
use crate::validation::require_text;

// =============================================================================
// Order Details
// =============================================================================

/// Everything on the order form except line items and the summary inputs.
///
/// Grouped the way the paper form is: supplier, delivery, funding source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderDetails {
    // Supplier
    pub supplier_name: String,
    pub supplier_address: String,
    pub supplier_fax: String,

    // Delivery
    pub delivery_building: String,
    pub contact_person: String,
    pub contact_phone: String,
    pub contact_fax: String,

    // Funding source (Mittelherkunft)
    pub chapter: String,
    pub title_tg: String,
    pub cost_center: String,
    /// Cost bearer (Kostenträger), optional.
    pub cost_bearer: String,
    /// Expense category code. Not checked against the category table.
    pub cost_type: String,

    #[ts(as = "Option<String>")]
    pub order_date: Option<NaiveDate>,
    pub notes: String,
}

impl OrderDetails {
    /// Checks the required fields: supplier name and supplier address.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(require_text("supplierName", &self.supplier_name));
        errors.check(require_text("supplierAddress", &self.supplier_address));
        errors.into_result()
    }
}

// =============================================================================
// Order Snapshot
// =============================================================================

/// Immutable record of a submitted order.
///
/// Bundles the items, the exact totals, their display form and the
/// submission time. Everything a print or persistence collaborator needs.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderSnapshot {
    pub order_number: Option<OrderNumber>,
    pub details: OrderDetails,
    pub items: Vec<LineItem>,
    pub totals: OrderTotals,
    pub display: DisplayTotals,
    #[ts(as = "String")]
    pub submitted_at: DateTime<Utc>,
}

impl OrderSnapshot {
    /// Captures the current state without validating it.
    ///
    /// Used for print previews of drafts.
    pub fn capture(
        order_number: Option<OrderNumber>,
        details: &OrderDetails,
        items: &LineItems,
        adjustments: &Adjustments,
        at: DateTime<Utc>,
    ) -> Self {
        let totals = OrderTotals::compute(items, adjustments);
        OrderSnapshot {
            order_number,
            details: details.clone(),
            items: items.to_vec(),
            display: totals.display(),
            totals,
            submitted_at: at,
        }
    }

    /// Validates the required fields, then captures.
    pub fn submit(
        order_number: Option<OrderNumber>,
        details: &OrderDetails,
        items: &LineItems,
        adjustments: &Adjustments,
        at: DateTime<Utc>,
    ) -> CoreResult<Self> {
        details.validate()?;
        Ok(Self::capture(order_number, details, items, adjustments, at))
    }

    /// Serializes for handoff to a persistence collaborator.
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// =============================================================================
// Sample Order
// =============================================================================

/// The Völkner Elektronik sample order used for demos.
///
/// Three items totalling 173.90 € net, 206.94 € gross at 19 % VAT.
pub fn sample_order() -> (OrderDetails, LineItems) {
    let details = OrderDetails {
        supplier_name: "Völkner Elektronik".to_string(),
        supplier_address: "Sachsenstraße 2-4, 90469 Nürnberg".to_string(),
        supplier_fax: "+49 (0)911-1234567".to_string(),
        chapter: "1532".to_string(),
        title_tg: "987654".to_string(),
        cost_center: "6606105".to_string(),
        cost_type: "62003".to_string(),
        ..OrderDetails::default()
    };

    let items = LineItems::from_items([
        LineItem::new(
            "VOLTCRAFT VC 37 SE Zweipoliger Spannungsprüfer CAT III LED",
            2,
            Money::from_cents(1298),
        )
        .with_article_number("Y618292"),
        LineItem::new(
            "IVT Drehzahl- und Leistungsregler DR-2000",
            1,
            Money::from_cents(7204),
        )
        .with_article_number("S92832"),
        LineItem::new(
            "VOSS.pet fenci M09 - 230V Weidezaungerät",
            1,
            Money::from_cents(7590),
        )
        .with_article_number("41215"),
    ]);

    (details, items)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_details_require_supplier() {
        let errors = OrderDetails::default().validate().unwrap_err();
        assert_eq!(errors.fields(), vec!["supplierName", "supplierAddress"]);
    }

    #[test]
    fn test_sample_order_is_valid() {
        let (details, items) = sample_order();
        assert!(details.validate().is_ok());
        assert_eq!(items.len(), 3);
        assert_eq!(items.subtotal(), Money::from_cents(17390));
    }

    #[test]
    fn test_submit_bundles_totals_and_timestamp() {
        let (details, items) = sample_order();
        let number = OrderNumber::from("25-THA-PB-001");

        let snapshot = OrderSnapshot::submit(
            Some(number.clone()),
            &details,
            &items,
            &Adjustments::default(),
            at(),
        )
        .unwrap();

        assert_eq!(snapshot.order_number, Some(number));
        assert_eq!(snapshot.items.len(), 3);
        assert_eq!(snapshot.display.gross_total, "206.94");
        assert_eq!(snapshot.submitted_at, at());
    }

    #[test]
    fn test_submit_rejects_missing_supplier_but_capture_does_not() {
        let (_, items) = sample_order();
        let details = OrderDetails::default();

        let err = OrderSnapshot::submit(None, &details, &items, &Adjustments::default(), at())
            .unwrap_err();
        assert!(matches!(err, CoreError::Incomplete(_)));

        let draft = OrderSnapshot::capture(None, &details, &items, &Adjustments::default(), at());
        assert_eq!(draft.display.subtotal, "173.90");
    }

    #[test]
    fn test_snapshot_json_uses_camel_case() {
        let (details, items) = sample_order();
        let snapshot =
            OrderSnapshot::capture(None, &details, &items, &Adjustments::default(), at());

        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"supplierName\": \"Völkner Elektronik\""));
        assert!(json.contains("\"lineTotal\""));
        assert!(json.contains("\"netAfterDiscount\": \"206.94\""));
    }
}
