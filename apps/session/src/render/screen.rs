//! Terminal view with rounded tables.

use tabled::{settings::Style, Table, Tabled};

use procure_core::{CardRequestSnapshot, OrderSnapshot};

use super::{cost_type_label, order_number_label, summary_lines, Renderer};
use crate::state::ConfigState;

// Table row structs for tabled
#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "ART.-NR.")]
    article_number: String,
    #[tabled(rename = "BESCHREIBUNG")]
    description: String,
    #[tabled(rename = "MENGE")]
    quantity: u32,
    #[tabled(rename = "EINZELPREIS")]
    unit_price: String,
    #[tabled(rename = "GESAMT")]
    line_total: String,
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "FELD")]
    label: String,
    #[tabled(rename = "WERT")]
    value: String,
}

impl FieldRow {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        FieldRow {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Renders snapshots as tables for the terminal.
#[derive(Debug, Clone, Copy)]
pub struct ScreenRenderer<'a> {
    config: &'a ConfigState,
}

impl<'a> ScreenRenderer<'a> {
    pub fn new(config: &'a ConfigState) -> Self {
        ScreenRenderer { config }
    }
}

impl Renderer for ScreenRenderer<'_> {
    fn render_order(&self, snapshot: &OrderSnapshot) -> String {
        let details = &snapshot.details;

        let header = vec![
            FieldRow::new(
                "Bestellnummer",
                order_number_label(snapshot.order_number.as_ref()),
            ),
            FieldRow::new("Lieferant", details.supplier_name.clone()),
            FieldRow::new("Anschrift", details.supplier_address.clone()),
            FieldRow::new("Lieferung an", details.delivery_building.clone()),
            FieldRow::new("Ansprechpartner", details.contact_person.clone()),
            FieldRow::new("Kostenstelle", details.cost_center.clone()),
            FieldRow::new("Kostenart", cost_type_label(&details.cost_type)),
        ];

        let items: Vec<ItemRow> = snapshot
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| ItemRow {
                position: i + 1,
                article_number: item.article_number().unwrap_or_default().to_string(),
                description: item.description().to_string(),
                quantity: item.quantity(),
                unit_price: self.config.format_currency(item.unit_price()),
                line_total: self.config.format_currency(item.line_total()),
            })
            .collect();

        let summary: Vec<FieldRow> = summary_lines(&snapshot.totals, self.config)
            .into_iter()
            .map(|(label, amount)| FieldRow::new(label, amount))
            .collect();

        [
            Table::new(header).with(Style::rounded()).to_string(),
            Table::new(items).with(Style::rounded()).to_string(),
            Table::new(summary).with(Style::rounded()).to_string(),
        ]
        .join("\n")
    }

    fn render_card_request(&self, snapshot: &CardRequestSnapshot) -> String {
        let request = &snapshot.request;
        let amount = request
            .estimated_amount
            .map(|amount| self.config.format_currency(amount))
            .unwrap_or_default();
        let request_date = request
            .request_date
            .map(|date| date.format("%d.%m.%Y").to_string())
            .unwrap_or_default();

        let mut rows = vec![
            FieldRow::new(
                "Bestellnummer",
                order_number_label(snapshot.order_number.as_ref()),
            ),
            FieldRow::new("Organisationseinheit", request.organization_unit.clone()),
            FieldRow::new("Kostenstelle", request.cost_center.clone()),
            FieldRow::new("Leistung", request.service_description.clone()),
            FieldRow::new("Lieferant", request.supplier.clone()),
            FieldRow::new("Auftragswert", amount),
            FieldRow::new("Lieferland", request.delivery_region.label()),
            FieldRow::new("Antragsdatum", request_date),
            FieldRow::new("Status", "in Bearbeitung"),
        ];

        if request.exceeds_limit(self.config.card.amount_limit) {
            rows.push(FieldRow::new(
                "Hinweis",
                format!(
                    "Betrag über {}",
                    self.config.format_currency(self.config.card.amount_limit)
                ),
            ));
        }

        Table::new(rows).with(Style::rounded()).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use procure_core::{sample_order, Adjustments, CardRequest, OrderNumber};

    #[test]
    fn test_order_screen() {
        let config = ConfigState::default();
        let (details, items) = sample_order();
        let snapshot = OrderSnapshot::capture(
            Some(OrderNumber::from("25-THA-PB-001")),
            &details,
            &items,
            &Adjustments::default(),
            Utc.with_ymd_and_hms(2025, 3, 14, 9, 0, 0).unwrap(),
        );

        let out = ScreenRenderer::new(&config).render_order(&snapshot);
        assert!(out.contains("25-THA-PB-001"));
        assert!(out.contains("Y618292"));
        assert!(out.contains("25.96 €"));
        assert!(out.contains("206.94 €"));
        assert!(out.contains("62003 Elektro- und Elektronikmaterial"));
        assert!(!out.contains("Skonto"));
        assert!(out.contains('╭'));
    }

    #[test]
    fn test_card_screen_flags_limit() {
        let config = ConfigState::default();
        let mut request = CardRequest {
            organization_unit: "THA".to_string(),
            cost_center: "6606105".to_string(),
            service_description: "Messe".to_string(),
            supplier: "Messe München".to_string(),
            eu_regulation_agreement: true,
            ordering_agreement: true,
            request_date: NaiveDate::from_ymd_opt(2025, 3, 14),
            ..CardRequest::default()
        };
        request.set_estimated_amount("5200");
        let snapshot = request.submit(None, Utc::now()).unwrap();

        let out = ScreenRenderer::new(&config).render_card_request(&snapshot);
        assert!(out.contains("5200.00 €"));
        assert!(out.contains("14.03.2025"));
        assert!(out.contains("Betrag über 5000.00 €"));
        assert!(out.contains("(keine Bestellnummer)"));
    }
}
