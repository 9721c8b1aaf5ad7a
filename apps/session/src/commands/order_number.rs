//! # Order Number Commands
//!
//! Generator inputs and the order number shared by both forms.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Order number tab                                                       │
//! │                                                                         │
//! │  Jahr [2025]  Bereich [THA]  Kürzel [PB]  Nr. [001] [+] [Reset]         │
//! │                                                                         │
//! │  Vorschau: 25-THA-PB-001                                                │
//! │                                                                         │
//! │  [Generieren (A)]  [Eindeutig (B)]                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  OrderNumberState ──► order form header, card request header            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use procure_core::OrderNumber;

use crate::commands::today;
use crate::error::ApiError;
use crate::state::{GeneratorState, OrderNumberState, SchemeKind};

/// Generator inputs, the live preview and the shared number.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorResponse {
    pub year: Option<i32>,
    pub department: String,
    pub initials: String,
    pub sequence: String,
    pub preview: String,
    pub current: Option<OrderNumber>,
}

impl GeneratorResponse {
    fn new(generator: &GeneratorState, number: &OrderNumberState) -> Self {
        GeneratorResponse {
            year: generator.year(),
            department: generator.department().to_string(),
            initials: generator.initials().to_string(),
            sequence: generator.sequence().to_string(),
            preview: generator.preview(),
            current: number.snapshot(),
        }
    }
}

/// Partial update of the generator fields. `None` leaves a field as is.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorInput {
    pub year: Option<String>,
    pub department: Option<String>,
    /// Typed initials. Wins over `contact_person` when both are given.
    pub initials: Option<String>,
    pub contact_person: Option<String>,
    pub sequence: Option<String>,
}

/// Gets the generator state.
pub fn get_generator(generator: &GeneratorState, number: &OrderNumberState) -> GeneratorResponse {
    debug!("get_generator command");
    GeneratorResponse::new(generator, number)
}

/// Applies edited generator fields.
pub fn update_generator(
    generator: &mut GeneratorState,
    number: &OrderNumberState,
    input: GeneratorInput,
) -> GeneratorResponse {
    debug!(?input, "update_generator command");

    if let Some(year) = input.year {
        generator.set_year(&year);
    }
    if let Some(department) = input.department {
        generator.set_department(&department);
    }
    if let Some(name) = input.contact_person {
        generator.set_contact_person(&name);
    }
    if let Some(initials) = input.initials {
        generator.set_initials(&initials);
    }
    if let Some(sequence) = input.sequence {
        generator.set_sequence(&sequence);
    }

    GeneratorResponse::new(generator, number)
}

/// Next sequence number; `999` wraps to `001`.
pub fn increment_sequence(
    generator: &mut GeneratorState,
    number: &OrderNumberState,
) -> GeneratorResponse {
    debug!("increment_sequence command");
    generator.increment_sequence();
    GeneratorResponse::new(generator, number)
}

/// Sequence back to `001`.
pub fn reset_sequence(
    generator: &mut GeneratorState,
    number: &OrderNumberState,
) -> GeneratorResponse {
    debug!("reset_sequence command");
    generator.reset_sequence();
    GeneratorResponse::new(generator, number)
}

/// Generates a number and makes it the session's shared order number.
///
/// ## Arguments
/// * `scheme` - `sequence` (`YY-DDD-III-SSS`) or `unique` (25 characters)
///
/// ## Errors
/// Only an unknown scheme name. Generation itself never fails.
pub fn generate_order_number(
    generator: &mut GeneratorState,
    number: &mut OrderNumberState,
    scheme: &str,
) -> Result<GeneratorResponse, ApiError> {
    debug!(scheme = %scheme, "generate_order_number command");

    let kind: SchemeKind = scheme.parse()?;
    let generated = generator.generate(kind, today());
    info!(order_number = %generated, ?kind, "Order number generated");

    number.set(generated);
    Ok(GeneratorResponse::new(generator, number))
}

/// Sets the shared order number by hand. Blank input clears it.
pub fn set_order_number(number: &mut OrderNumberState, value: &str) -> Option<OrderNumber> {
    debug!(value = %value, "set_order_number command");
    number.set(OrderNumber::from(value.trim()));
    number.snapshot()
}

/// Clears the shared order number.
pub fn clear_order_number(number: &mut OrderNumberState) {
    debug!("clear_order_number command");
    number.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ConfigState;
    use chrono::NaiveDate;

    fn generator() -> GeneratorState {
        GeneratorState::new(
            &ConfigState::default(),
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
        )
    }

    #[test]
    fn test_update_and_preview() {
        let mut generator = generator();
        let number = OrderNumberState::new();

        let response = update_generator(
            &mut generator,
            &number,
            GeneratorInput {
                department: Some("inf".to_string()),
                contact_person: Some("Anna Berta".to_string()),
                sequence: Some("41".to_string()),
                ..GeneratorInput::default()
            },
        );
        assert_eq!(response.preview, "25-INF-AB-041");

        let response = increment_sequence(&mut generator, &number);
        assert_eq!(response.sequence, "042");

        let response = reset_sequence(&mut generator, &number);
        assert_eq!(response.preview, "25-INF-AB-001");
    }

    #[test]
    fn test_typed_initials_win() {
        let mut generator = generator();
        let number = OrderNumberState::new();
        let response = update_generator(
            &mut generator,
            &number,
            GeneratorInput {
                contact_person: Some("Anna Berta".to_string()),
                initials: Some("xy".to_string()),
                ..GeneratorInput::default()
            },
        );
        assert_eq!(response.initials, "XY");
    }

    #[test]
    fn test_generate_sets_shared_number() {
        let mut generator = generator();
        let mut number = OrderNumberState::new();

        let response = generate_order_number(&mut generator, &mut number, "sequence").unwrap();
        assert_eq!(response.current.as_ref().map(|n| n.as_str()), Some("25-THA-PB-001"));

        let response = generate_order_number(&mut generator, &mut number, "unique").unwrap();
        let current = response.current.unwrap();
        assert_eq!(current.len(), 25);
        assert!(current.as_str().starts_with("25THA"));

        assert!(generate_order_number(&mut generator, &mut number, "mystery").is_err());
        assert_eq!(number.current(), Some(&current));
    }

    #[test]
    fn test_manual_order_number() {
        let mut number = OrderNumberState::new();
        assert_eq!(
            set_order_number(&mut number, " 25-THA-XY-100 "),
            Some(OrderNumber::from("25-THA-XY-100"))
        );
        clear_order_number(&mut number);
        assert!(number.current().is_none());
    }
}
