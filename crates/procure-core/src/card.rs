//! # Virtual Credit Card Request
//!
//! A request for a one-off virtual credit card, used for purchases from
//! suppliers that do not accept invoices.
//!
//! ```text
//! ┌──────────────────────┐    validate()    ┌──────────────────────────┐
//! │ CardRequest (draft)  │ ───────────────► │ CardRequestSnapshot      │
//! │  free text + amount  │    submit()      │  status = Pending        │
//! │  two confirmations   │                  │  submitted_at            │
//! └──────────────────────┘                  └──────────────────────────┘
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreResult, ValidationErrors};
use crate::money::Money;
use crate::order_number::OrderNumber;
use crate::types::{DeliveryRegion, RequestStatus};
use crate::validation::{
    clamp_amount, require_confirmed, require_positive_amount, require_present, require_text,
};

/// Draft of a virtual credit card request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct CardRequest {
    pub organization_unit: String,
    pub cost_center: String,
    pub service_description: String,
    pub supplier: String,
    /// `None` until the user enters an amount.
    pub estimated_amount: Option<Money>,
    pub delivery_region: DeliveryRegion,
    /// Purchases from abroad need the EU regulation acknowledged.
    pub eu_regulation_agreement: bool,
    pub ordering_agreement: bool,
    pub notes: String,
    #[ts(as = "Option<String>")]
    pub request_date: Option<NaiveDate>,
}

impl CardRequest {
    /// Sets the estimated amount from raw form text.
    ///
    /// Blank input clears the amount; anything else is clamped to `>= 0`.
    pub fn set_estimated_amount(&mut self, raw: &str) {
        self.estimated_amount = if raw.trim().is_empty() {
            None
        } else {
            Some(clamp_amount(raw))
        };
    }

    /// Checks every required field and both confirmations, reporting all
    /// failures at once.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(require_text("organizationUnit", &self.organization_unit));
        errors.check(require_text("costCenter", &self.cost_center));
        errors.check(require_text("serviceDescription", &self.service_description));
        errors.check(require_text("supplier", &self.supplier));
        errors.check(require_positive_amount(
            "estimatedAmount",
            self.estimated_amount,
        ));
        errors.check(require_present("requestDate", self.request_date.as_ref()));
        errors.check(require_confirmed(
            "euRegulationAgreement",
            self.eu_regulation_agreement,
        ));
        errors.check(require_confirmed(
            "orderingAgreement",
            self.ordering_agreement,
        ));
        errors.into_result()
    }

    /// True when the estimated amount is above `limit`.
    ///
    /// Only a warning. Requests above the limit are still accepted.
    pub fn exceeds_limit(&self, limit: Money) -> bool {
        self.estimated_amount.is_some_and(|amount| amount > limit)
    }

    /// Validates and turns the draft into a pending request.
    pub fn submit(
        &self,
        order_number: Option<OrderNumber>,
        at: DateTime<Utc>,
    ) -> CoreResult<CardRequestSnapshot> {
        self.validate()?;
        Ok(CardRequestSnapshot {
            request: self.clone(),
            order_number,
            status: RequestStatus::Pending,
            submitted_at: at,
        })
    }
}

/// A submitted card request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CardRequestSnapshot {
    pub request: CardRequest,
    pub order_number: Option<OrderNumber>,
    pub status: RequestStatus,
    #[ts(as = "String")]
    pub submitted_at: DateTime<Utc>,
}

impl CardRequestSnapshot {
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
