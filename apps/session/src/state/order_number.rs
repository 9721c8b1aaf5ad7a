//! # Shared Order Number
//!
//! One order number per session, shared by all three tabs. The generator
//! writes it; the order form and the card request read it on submission.

use serde::Serialize;

use procure_core::OrderNumber;

/// The session's current order number, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderNumberState {
    current: Option<OrderNumber>,
}

impl OrderNumberState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&OrderNumber> {
        self.current.as_ref()
    }

    /// Replaces the current number. Blank input clears it.
    pub fn set(&mut self, number: OrderNumber) {
        self.current = if number.as_str().trim().is_empty() {
            None
        } else {
            Some(number)
        };
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Copy for a snapshot.
    pub fn snapshot(&self) -> Option<OrderNumber> {
        self.current.clone()
    }
}
