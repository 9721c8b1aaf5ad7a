//! # Order Form State
//!
//! The order form being edited: administrative details, the item list and
//! the four summary inputs.
//!
//! ## Edit Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Form Operations                                │
//! │                                                                         │
//! │  View Action              Command                 State Change          │
//! │  ───────────              ───────                 ────────────          │
//! │                                                                         │
//! │  "+ Position" ──────────► add_item() ───────────► items = items.add()   │
//! │                                                                         │
//! │  Edit cell ─────────────► update_item() ────────► items = items.update()│
//! │                                                                         │
//! │  Trash icon ────────────► remove_item() ────────► items = items.remove()│
//! │                                                                         │
//! │  Edit summary field ────► set_tax_rate() etc. ──► adjustments.x = ...   │
//! │                                                                         │
//! │  Every command answers with freshly computed totals.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};

use procure_core::{
    Adjustments, CoreResult, LineItems, OrderDetails, OrderNumber, OrderSnapshot, OrderTotals,
};

use super::ConfigState;

/// State of the order form tab.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderFormState {
    pub details: OrderDetails,
    pub items: LineItems,
    pub adjustments: Adjustments,
    /// Most recent successful submission.
    pub last_submitted: Option<OrderSnapshot>,
}

impl OrderFormState {
    /// A blank form pre-filled with the configured defaults.
    pub fn new(config: &ConfigState) -> Self {
        OrderFormState {
            details: Self::default_details(config),
            items: LineItems::new(),
            adjustments: Adjustments {
                tax_rate: config.order.tax_rate,
                ..Adjustments::default()
            },
            last_submitted: None,
        }
    }

    fn default_details(config: &ConfigState) -> OrderDetails {
        let defaults = &config.order;
        OrderDetails {
            delivery_building: defaults.delivery_building.clone(),
            contact_person: defaults.contact_person.clone(),
            contact_phone: defaults.contact_phone.clone(),
            contact_fax: defaults.contact_fax.clone(),
            chapter: defaults.chapter.clone(),
            title_tg: defaults.title_tg.clone(),
            cost_center: defaults.cost_center.clone(),
            ..OrderDetails::default()
        }
    }

    /// Current totals. Recomputed on every call.
    pub fn totals(&self) -> OrderTotals {
        OrderTotals::compute(&self.items, &self.adjustments)
    }

    /// Replaces details and items with the sample order, keeping the
    /// configured delivery and contact fields.
    pub fn load_sample(&mut self, config: &ConfigState) {
        let (sample, items) = procure_core::sample_order();
        let defaults = Self::default_details(config);
        self.details = OrderDetails {
            delivery_building: defaults.delivery_building,
            contact_person: defaults.contact_person,
            contact_phone: defaults.contact_phone,
            contact_fax: defaults.contact_fax,
            ..sample
        };
        self.items = items;
    }

    /// Draft snapshot for previews. Does not validate.
    pub fn preview(&self, order_number: Option<OrderNumber>, at: DateTime<Utc>) -> OrderSnapshot {
        OrderSnapshot::capture(order_number, &self.details, &self.items, &self.adjustments, at)
    }

    /// Validates and records a submission.
    pub fn submit(
        &mut self,
        order_number: Option<OrderNumber>,
        at: DateTime<Utc>,
    ) -> CoreResult<OrderSnapshot> {
        let snapshot =
            OrderSnapshot::submit(order_number, &self.details, &self.items, &self.adjustments, at)?;
        self.last_submitted = Some(snapshot.clone());
        Ok(snapshot)
    }

    /// Back to a blank form.
    pub fn reset(&mut self, config: &ConfigState) {
        *self = Self::new(config);
    }
}
