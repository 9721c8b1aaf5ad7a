//! # Credit Card Request Commands

use chrono::{NaiveDate, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use procure_core::{CardRequest, CardRequestSnapshot, DeliveryRegion};

use crate::error::ApiError;
use crate::state::{CardFormState, ConfigState, OrderNumberState};

/// Card request plus the limit warning.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardResponse {
    pub request: CardRequest,
    /// Amount is above the configured limit. Informational only.
    pub exceeds_limit: bool,
    /// Formatted limit, e.g. `5000.00 €`.
    pub limit: String,
}

impl CardResponse {
    fn new(card: &CardFormState, config: &ConfigState) -> Self {
        CardResponse {
            request: card.request.clone(),
            exceeds_limit: card.request.exceeds_limit(config.card.amount_limit),
            limit: config.format_currency(config.card.amount_limit),
        }
    }
}

/// Gets the current card request.
pub fn get_card_request(card: &CardFormState, config: &ConfigState) -> CardResponse {
    debug!("get_card_request command");
    CardResponse::new(card, config)
}

/// Replaces the whole draft.
pub fn update_card_request(
    card: &mut CardFormState,
    config: &ConfigState,
    request: CardRequest,
) -> CardResponse {
    debug!(supplier = %request.supplier, "update_card_request command");
    card.request = request;
    CardResponse::new(card, config)
}

/// Sets the estimated amount from raw text (blank clears, negative → 0).
pub fn set_estimated_amount(
    card: &mut CardFormState,
    config: &ConfigState,
    value: &str,
) -> CardResponse {
    debug!(value = %value, "set_estimated_amount command");
    card.request.set_estimated_amount(value);

    let response = CardResponse::new(card, config);
    if response.exceeds_limit {
        warn!(value = %value, limit = %response.limit, "Estimated amount above card limit");
    }
    response
}

/// Sets the delivery region: `deutschland`, `eu-land` or `drittland`.
pub fn set_delivery_region(
    card: &mut CardFormState,
    config: &ConfigState,
    value: &str,
) -> Result<CardResponse, ApiError> {
    debug!(value = %value, "set_delivery_region command");
    let region: DeliveryRegion = value.parse()?;
    card.request.delivery_region = region;
    Ok(CardResponse::new(card, config))
}

/// Sets the request date from an ISO date (`2025-03-14`). Blank clears it.
pub fn set_request_date(
    card: &mut CardFormState,
    config: &ConfigState,
    value: &str,
) -> Result<CardResponse, ApiError> {
    debug!(value = %value, "set_request_date command");
    let value = value.trim();
    card.request.request_date = if value.is_empty() {
        None
    } else {
        let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map_err(|e| ApiError::validation(format!("requestDate: {}", e)))?;
        Some(date)
    };
    Ok(CardResponse::new(card, config))
}

/// Submits the card request with the shared order number.
///
/// ## Errors
/// `INCOMPLETE_FORM` for missing fields or unconfirmed agreements.
/// Amounts above the limit are logged, not rejected.
pub fn submit_card_request(
    card: &mut CardFormState,
    number: &OrderNumberState,
    config: &ConfigState,
) -> Result<CardRequestSnapshot, ApiError> {
    debug!("submit_card_request command");

    if card.request.exceeds_limit(config.card.amount_limit) {
        warn!(
            limit = %config.format_currency(config.card.amount_limit),
            "Submitting card request above the amount limit"
        );
    }

    let snapshot = card.submit(number.snapshot(), Utc::now()).map_err(|e| {
        warn!(error = %e, "submit_card_request rejected");
        ApiError::from(e)
    })?;

    info!(
        order_number = ?snapshot.order_number.as_ref().map(|n| n.as_str()),
        supplier = %snapshot.request.supplier,
        status = ?snapshot.status,
        "Card request submitted"
    );
    Ok(snapshot)
}

/// Clears the draft back to the configured defaults.
pub fn reset_card_request(card: &mut CardFormState, config: &ConfigState) -> CardResponse {
    debug!("reset_card_request command");
    card.reset(config);
    CardResponse::new(card, config)
}
