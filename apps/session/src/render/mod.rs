//! # Renderers
//!
//! Two views of the same submitted (or previewed) form.
//!
//! ```text
//!                       ┌──────────────────┐
//!   OrderSnapshot ─────►│  Renderer trait  │
//!   CardRequestSnapshot │                  │
//!                       └────────┬─────────┘
//!                 ┌──────────────┴──────────────┐
//!                 ▼                             ▼
//!        ┌─────────────────┐          ┌──────────────────┐
//!        │ ScreenRenderer  │          │  PrintRenderer   │
//!        │ rounded tables  │          │ fixed width,     │
//!        │ for the terminal│          │ signature lines  │
//!        └─────────────────┘          └──────────────────┘
//! ```
//!
//! Both format amounts with [`ConfigState::format_currency`], so screen and
//! paper always show the same rounded figures.

mod print;
mod screen;

pub use print::PrintRenderer;
pub use screen::ScreenRenderer;

use procure_core::{find_category, CardRequestSnapshot, OrderNumber, OrderSnapshot, OrderTotals};

use crate::state::ConfigState;

/// Turns snapshots into text.
pub trait Renderer {
    fn render_order(&self, snapshot: &OrderSnapshot) -> String;

    fn render_card_request(&self, snapshot: &CardRequestSnapshot) -> String;
}

/// Label/amount pairs of the order summary, in display order.
///
/// The Skonto lines appear only when a discount is in effect.
pub(crate) fn summary_lines(totals: &OrderTotals, config: &ConfigState) -> Vec<(String, String)> {
    let mut lines = vec![
        ("Zwischensumme (netto)".to_string(), config.format_currency(totals.subtotal)),
        ("Versandkosten".to_string(), config.format_currency(totals.shipping_cost)),
        (
            format!("MwSt. ({} %)", totals.tax_rate),
            config.format_currency(totals.tax_amount),
        ),
        ("Gesamtbetrag (brutto)".to_string(), config.format_currency(totals.gross_total)),
    ];

    if totals.has_discount() {
        lines.push((
            format!(
                "Skonto ({} % bei Zahlung in {} Tagen)",
                totals.discount.rate, totals.discount.window_days
            ),
            format!("- {}", config.format_currency(totals.discount_amount)),
        ));
        lines.push((
            "Zahlbetrag nach Skonto".to_string(),
            config.format_currency(totals.net_after_discount),
        ));
    }

    lines
}

/// `62003 Elektro- und Elektronikmaterial`, or the raw code if unknown.
pub(crate) fn cost_type_label(code: &str) -> String {
    match find_category(code) {
        Some(category) => format!("{} {}", category.code, category.name),
        None => code.to_string(),
    }
}

/// The order number, or a placeholder when none was generated.
pub(crate) fn order_number_label(number: Option<&OrderNumber>) -> String {
    match number {
        Some(number) => number.to_string(),
        None => "(keine Bestellnummer)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use procure_core::{recompute, sample_order, Adjustments};

    #[test]
    fn test_summary_lines_without_discount() {
        let (_, items) = sample_order();
        let totals = recompute(&items, &Adjustments::default());
        let lines = summary_lines(&totals, &ConfigState::default());

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[2], ("MwSt. (19 %)".to_string(), "33.04 €".to_string()));
        assert_eq!(lines[3].1, "206.94 €");
    }

    #[test]
    fn test_summary_lines_with_discount() {
        let (_, items) = sample_order();
        let adjustments = Adjustments::default()
            .with_discount_rate("2")
            .with_discount_window_days("10");
        let totals = recompute(&items, &adjustments);
        let lines = summary_lines(&totals, &ConfigState::default());

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[4].1, "- 4.14 €");
        assert_eq!(lines[5].1, "202.80 €");
    }

    #[test]
    fn test_cost_type_label() {
        assert_eq!(cost_type_label("62003"), "62003 Elektro- und Elektronikmaterial");
        assert_eq!(cost_type_label("12345"), "12345");
    }
}
