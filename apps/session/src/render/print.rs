//! # Print Renderer
//!
//! Plain fixed-width text for paper. Every line fits `paper_width`
//! characters; long descriptions are cut with `…`.
//!
//! ## Order Layout
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │            Technische Hochschule Aschaffenburg                 │
//! │                  Würzburger Straße 45                          │
//! │ ============================================================== │
//! │ BESTELLUNG                              Nr. 25-THA-PB-001      │
//! │ Datum: 14.03.2025                                              │
//! │ -------------------------------------------------------------- │
//! │ Lieferant / Lieferung / Mittelherkunft                         │
//! │ -------------------------------------------------------------- │
//! │ Pos Art.-Nr.   Beschreibung        Menge  Einzelpreis  Gesamt  │
//! │ -------------------------------------------------------------- │
//! │                         Gesamtbetrag (brutto)        206.94 €  │
//! │                                                                │
//! │ ______________________            ______________________       │
//! │ Datum, Unterschrift Besteller     Unterschrift Haushalt        │
//! └────────────────────────────────────────────────────────────────┘
//! ```

use procure_core::{CardRequestSnapshot, OrderSnapshot};

use super::{cost_type_label, order_number_label, summary_lines, Renderer};
use crate::state::ConfigState;

const POS_WIDTH: usize = 3;
const ARTICLE_WIDTH: usize = 10;
const QTY_WIDTH: usize = 5;
const AMOUNT_WIDTH: usize = 12;

/// Renders snapshots as printable text.
#[derive(Debug, Clone, Copy)]
pub struct PrintRenderer<'a> {
    config: &'a ConfigState,
    width: usize,
}

impl<'a> PrintRenderer<'a> {
    pub fn new(config: &'a ConfigState) -> Self {
        PrintRenderer {
            config,
            width: config.display.paper_width,
        }
    }

    fn rule(&self, c: char) -> String {
        std::iter::repeat(c).take(self.width).collect()
    }

    fn centered(&self, text: &str) -> String {
        format!("{:^width$}", fit(text, self.width), width = self.width)
            .trim_end()
            .to_string()
    }

    /// Left text and right text on one line, right text flush right.
    fn spread(&self, left: &str, right: &str) -> String {
        let right_len = right.chars().count();
        let left_width = self.width.saturating_sub(right_len + 1);
        format!(
            "{:<lw$} {}",
            fit(left, left_width),
            right,
            lw = left_width
        )
    }

    fn field(&self, label: &str, value: &str) -> String {
        let line = format!("{:<18}{}", format!("{}:", label), value);
        fit(&line, self.width)
    }

    fn letterhead(&self, out: &mut Vec<String>) {
        out.push(self.centered(&self.config.institution.name));
        for line in &self.config.institution.address {
            out.push(self.centered(line));
        }
        out.push(self.rule('='));
    }

    fn signatures(&self, out: &mut Vec<String>, left: &str, right: &str) {
        let half = self.width / 2;
        let line_len = half.saturating_sub(4).max(10);
        let blank: String = std::iter::repeat('_').take(line_len).collect();

        out.push(String::new());
        out.push(String::new());
        out.push(fit(&format!("{:<half$}{}", blank, blank, half = half), self.width));
        out.push(fit(&format!("{:<half$}{}", left, right, half = half), self.width));
    }

    fn description_width(&self) -> usize {
        let fixed = POS_WIDTH + ARTICLE_WIDTH + QTY_WIDTH + 2 * AMOUNT_WIDTH + 5;
        self.width.saturating_sub(fixed).max(8)
    }

    fn item_line(
        &self,
        pos: &str,
        article: &str,
        description: &str,
        qty: &str,
        unit: &str,
        total: &str,
    ) -> String {
        let dw = self.description_width();
        fit(
            &format!(
                "{:>pw$} {:<aw$} {:<dw$} {:>qw$} {:>mw$} {:>mw$}",
                pos,
                fit(article, ARTICLE_WIDTH),
                fit(description, dw),
                qty,
                unit,
                total,
                pw = POS_WIDTH,
                aw = ARTICLE_WIDTH,
                dw = dw,
                qw = QTY_WIDTH,
                mw = AMOUNT_WIDTH,
            ),
            self.width,
        )
    }
}

impl Renderer for PrintRenderer<'_> {
    fn render_order(&self, snapshot: &OrderSnapshot) -> String {
        let details = &snapshot.details;
        let mut out = Vec::new();

        self.letterhead(&mut out);

        let number = order_number_label(snapshot.order_number.as_ref());
        out.push(self.spread("BESTELLUNG", &format!("Nr. {}", number)));
        let date = details
            .order_date
            .unwrap_or_else(|| snapshot.submitted_at.date_naive());
        out.push(self.field("Datum", &date.format("%d.%m.%Y").to_string()));
        out.push(self.rule('-'));

        out.push(self.field("Lieferant", &details.supplier_name));
        out.push(self.field("Anschrift", &details.supplier_address));
        if !details.supplier_fax.is_empty() {
            out.push(self.field("Fax", &details.supplier_fax));
        }
        out.push(self.field("Lieferung an", &details.delivery_building));
        out.push(self.field("Ansprechpartner", &details.contact_person));
        out.push(self.field(
            "Telefon / Fax",
            &format!("{} / {}", details.contact_phone, details.contact_fax),
        ));
        out.push(self.field(
            "Kapitel / Titel",
            &format!("{} / {}", details.chapter, details.title_tg),
        ));
        out.push(self.field("Kostenstelle", &details.cost_center));
        if !details.cost_bearer.is_empty() {
            out.push(self.field("Kostenträger", &details.cost_bearer));
        }
        out.push(self.field("Kostenart", &cost_type_label(&details.cost_type)));
        out.push(self.rule('-'));

        out.push(self.item_line("Pos", "Art.-Nr.", "Beschreibung", "Menge", "Einzelpreis", "Gesamt"));
        out.push(self.rule('-'));
        for (i, item) in snapshot.items.iter().enumerate() {
            out.push(self.item_line(
                &(i + 1).to_string(),
                item.article_number().unwrap_or_default(),
                item.description(),
                &item.quantity().to_string(),
                &self.config.format_currency(item.unit_price()),
                &self.config.format_currency(item.line_total()),
            ));
        }
        out.push(self.rule('-'));

        for (label, amount) in summary_lines(&snapshot.totals, self.config) {
            out.push(format!(
                "{:>width$}",
                self.spread(&label, &amount).trim_start(),
                width = self.width
            ));
        }

        if !details.notes.is_empty() {
            out.push(String::new());
            out.push(self.field("Bemerkungen", &details.notes));
        }

        self.signatures(&mut out, "Datum, Unterschrift Besteller", "Unterschrift Haushalt");
        out.join("\n")
    }

    fn render_card_request(&self, snapshot: &CardRequestSnapshot) -> String {
        let request = &snapshot.request;
        let mut out = Vec::new();

        self.letterhead(&mut out);

        let number = order_number_label(snapshot.order_number.as_ref());
        out.push(self.spread("ANTRAG VIRTUELLE KREDITKARTE", &format!("Nr. {}", number)));
        out.push(self.rule('-'));

        out.push(self.field("Organisation", &request.organization_unit));
        out.push(self.field("Kostenstelle", &request.cost_center));
        out.push(self.field("Leistung", &request.service_description));
        out.push(self.field("Lieferant", &request.supplier));
        let amount = request
            .estimated_amount
            .map(|amount| self.config.format_currency(amount))
            .unwrap_or_default();
        out.push(self.field("Auftragswert", &amount));
        out.push(self.field("Lieferland", request.delivery_region.label()));
        let date = request
            .request_date
            .map(|date| date.format("%d.%m.%Y").to_string())
            .unwrap_or_default();
        out.push(self.field("Antragsdatum", &date));
        if !request.notes.is_empty() {
            out.push(self.field("Bemerkungen", &request.notes));
        }
        out.push(self.rule('-'));

        out.push(fit(
            &format!("[{}] EU-Verordnung zur Kenntnis genommen", check(request.eu_regulation_agreement)),
            self.width,
        ));
        out.push(fit(
            &format!("[{}] Bestellbedingungen akzeptiert", check(request.ordering_agreement)),
            self.width,
        ));

        self.signatures(&mut out, "Datum, Unterschrift Antragsteller", "Unterschrift Kostenstelle");
        out.join("\n")
    }
}

fn check(confirmed: bool) -> char {
    if confirmed {
        'x'
    } else {
        ' '
    }
}

/// Cuts `text` to at most `width` characters, marking the cut with `…`.
fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}
