//! # Card Request State
//!
//! The virtual credit card request being edited.

use chrono::{DateTime, Utc};

use procure_core::{CardRequest, CardRequestSnapshot, CoreResult, OrderNumber};

use super::ConfigState;

/// State of the credit card tab.
#[derive(Debug, Clone, PartialEq)]
pub struct CardFormState {
    pub request: CardRequest,
    pub last_submitted: Option<CardRequestSnapshot>,
}

impl CardFormState {
    pub fn new(config: &ConfigState) -> Self {
        CardFormState {
            request: CardRequest {
                organization_unit: config.card.organization_unit.clone(),
                cost_center: config.order.cost_center.clone(),
                ..CardRequest::default()
            },
            last_submitted: None,
        }
    }

    /// Validates and records a submission.
    pub fn submit(
        &mut self,
        order_number: Option<OrderNumber>,
        at: DateTime<Utc>,
    ) -> CoreResult<CardRequestSnapshot> {
        let snapshot = self.request.submit(order_number, at)?;
        self.last_submitted = Some(snapshot.clone());
        Ok(snapshot)
    }

    pub fn reset(&mut self, config: &ConfigState) {
        *self = Self::new(config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefilled_from_config() {
        let state = CardFormState::new(&ConfigState::default());
        assert_eq!(
            state.request.organization_unit,
            "Technische Hochschule Aschaffenburg"
        );
        assert_eq!(state.request.cost_center, "6606105");
        assert!(state.request.estimated_amount.is_none());
    }

    #[test]
    fn test_incomplete_submission_is_not_recorded() {
        let mut state = CardFormState::new(&ConfigState::default());
        assert!(state.submit(None, Utc::now()).is_err());
        assert!(state.last_submitted.is_none());
    }
}
