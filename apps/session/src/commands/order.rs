//! # Order Form Commands
//!
//! Line item editing, summary inputs and submission of the order form.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Lifecycle                                      │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Blank   │────►│ Editing  │────►│ Preview  │────►│Submitted │       │
//! │  │  Form    │     │          │     │ (print)  │     │ Snapshot │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                                 │              │
//! │                   add_item                          submit_order        │
//! │                   update_item                                           │
//! │                   remove_item                                           │
//! │                   set_tax_rate ...                                      │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   reset_order ─────────────────────►                    │
//! │                                                      (back to blank)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info, warn};

use procure_core::{
    DisplayTotals, ItemField, LineItem, LineItemId, OrderDetails, OrderSnapshot, OrderTotals,
};

use crate::error::ApiError;
use crate::state::{ConfigState, OrderFormState, OrderNumberState};

/// Order response: items plus exact and display totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub items: Vec<LineItem>,
    pub totals: OrderTotals,
    pub display: DisplayTotals,
}

impl From<&OrderFormState> for OrderResponse {
    fn from(form: &OrderFormState) -> Self {
        let totals = form.totals();
        OrderResponse {
            items: form.items.to_vec(),
            display: totals.display(),
            totals,
        }
    }
}

/// Gets the current items and totals.
pub fn get_order(form: &OrderFormState) -> OrderResponse {
    debug!("get_order command");
    OrderResponse::from(form)
}

/// Appends an empty line item (quantity 1, price 0).
pub fn add_item(form: &mut OrderFormState) -> OrderResponse {
    debug!(count = form.items.len(), "add_item command");
    form.items = form.items.add_item();
    OrderResponse::from(&*form)
}

/// Edits one field of one item.
///
/// ## Arguments
/// * `item_id` - id of the item, as sent to the view
/// * `field` - `quantity`, `unitPrice`, `description` or `articleNumber`
/// * `value` - raw field text; numbers are clamped, never rejected
///
/// ## Errors
/// Only a malformed id or an unknown field name. An unknown but well-formed
/// id leaves the list unchanged.
pub fn update_item(
    form: &mut OrderFormState,
    item_id: &str,
    field: &str,
    value: &str,
) -> Result<OrderResponse, ApiError> {
    debug!(item_id = %item_id, field = %field, "update_item command");

    let id: LineItemId = item_id.parse()?;
    let field: ItemField = field.parse()?;

    if !form.items.contains(id) {
        warn!(item_id = %id, "update_item: unknown item, ignoring");
    }

    form.items = form.items.update_item(id, field, value);
    Ok(OrderResponse::from(&*form))
}

/// Removes an item. The last remaining item is never removed.
pub fn remove_item(form: &mut OrderFormState, item_id: &str) -> Result<OrderResponse, ApiError> {
    debug!(item_id = %item_id, "remove_item command");

    let id: LineItemId = item_id.parse()?;

    if !form.items.contains(id) {
        warn!(item_id = %id, "remove_item: unknown item, ignoring");
    } else if form.items.len() <= 1 {
        warn!(item_id = %id, "remove_item: refusing to remove the last item");
    }

    form.items = form.items.remove_item(id);
    Ok(OrderResponse::from(&*form))
}

/// Sets the shipping cost (invalid → 0).
pub fn set_shipping_cost(form: &mut OrderFormState, value: &str) -> OrderResponse {
    debug!(value = %value, "set_shipping_cost command");
    form.adjustments = form.adjustments.with_shipping_cost(value);
    OrderResponse::from(&*form)
}

/// Sets the VAT rate (invalid → 19 %).
pub fn set_tax_rate(form: &mut OrderFormState, value: &str) -> OrderResponse {
    debug!(value = %value, "set_tax_rate command");
    form.adjustments = form.adjustments.with_tax_rate(value);
    OrderResponse::from(&*form)
}

/// Sets the Skonto rate (invalid → 0).
pub fn set_discount_rate(form: &mut OrderFormState, value: &str) -> OrderResponse {
    debug!(value = %value, "set_discount_rate command");
    form.adjustments = form.adjustments.with_discount_rate(value);
    OrderResponse::from(&*form)
}

/// Sets the Skonto payment window in days (invalid → 0).
pub fn set_discount_days(form: &mut OrderFormState, value: &str) -> OrderResponse {
    debug!(value = %value, "set_discount_days command");
    form.adjustments = form.adjustments.with_discount_window_days(value);
    OrderResponse::from(&*form)
}

/// Replaces the administrative fields. Totals are unaffected.
pub fn update_details(form: &mut OrderFormState, details: OrderDetails) -> OrderResponse {
    debug!(supplier = %details.supplier_name, "update_details command");
    form.details = details;
    OrderResponse::from(&*form)
}

/// Fills the form with the Völkner sample order.
pub fn load_sample_order(form: &mut OrderFormState, config: &ConfigState) -> OrderResponse {
    debug!("load_sample_order command");
    form.load_sample(config);
    OrderResponse::from(&*form)
}

/// Draft snapshot for the print preview. Never fails.
pub fn preview_order(form: &OrderFormState, number: &OrderNumberState) -> OrderSnapshot {
    debug!("preview_order command");
    form.preview(number.snapshot(), Utc::now())
}

/// Submits the order.
///
/// ## Errors
/// `INCOMPLETE_FORM` listing every missing required field.
pub fn submit_order(
    form: &mut OrderFormState,
    number: &OrderNumberState,
) -> Result<OrderSnapshot, ApiError> {
    debug!("submit_order command");

    let snapshot = form.submit(number.snapshot(), Utc::now()).map_err(|e| {
        warn!(error = %e, "submit_order rejected");
        ApiError::from(e)
    })?;

    info!(
        order_number = ?snapshot.order_number.as_ref().map(|n| n.as_str()),
        supplier = %snapshot.details.supplier_name,
        gross_total = %snapshot.display.gross_total,
        "Order submitted"
    );
    Ok(snapshot)
}

/// Clears the form back to the configured defaults.
pub fn reset_order(form: &mut OrderFormState, config: &ConfigState) -> OrderResponse {
    debug!("reset_order command");
    form.reset(config);
    OrderResponse::from(&*form)
}
