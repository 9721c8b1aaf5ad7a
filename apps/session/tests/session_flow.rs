//! End-to-end runs of a forms session through the public commands.

use chrono::NaiveDate;

use procure_session::commands::{card, catalog, order, order_number, tab};
use procure_session::error::ErrorCode;
use procure_session::render::{PrintRenderer, Renderer, ScreenRenderer};
use procure_session::state::{ConfigState, Tab};
use procure_session::Session;

fn session() -> Session {
    let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
    Session::with_date(ConfigState::default(), date)
}

#[test]
fn order_from_blank_form_to_print() {
    let mut s = session();

    let first = order::get_order(&s.order_form).items[0].id().to_string();
    order::update_item(&mut s.order_form, &first, "description", "Netzteil 12 V").unwrap();
    order::update_item(&mut s.order_form, &first, "quantity", "2").unwrap();
    order::update_item(&mut s.order_form, &first, "unitPrice", "50").unwrap();

    let response = order::add_item(&mut s.order_form);
    let second = response.items[1].id().to_string();
    order::update_item(&mut s.order_form, &second, "unitPrice", "-5").unwrap();
    assert_eq!(order::get_order(&s.order_form).totals.subtotal.to_string(), "100.00");

    order::remove_item(&mut s.order_form, &second).unwrap();
    order::set_shipping_cost(&mut s.order_form, "10");
    order::set_discount_rate(&mut s.order_form, "2");
    let response = order::set_discount_days(&mut s.order_form, "14");
    assert_eq!(response.display.gross_total, "130.90");
    assert_eq!(response.display.discount_amount, "2.62");
    assert_eq!(response.display.net_after_discount, "128.28");

    // Supplier is still missing.
    let err = order::submit_order(&mut s.order_form, &s.order_number).unwrap_err();
    assert_eq!(err.code, ErrorCode::IncompleteForm);
    assert_eq!(err.fields, vec!["supplierName", "supplierAddress"]);

    let mut details = s.order_form.details.clone();
    details.supplier_name = "Reichelt Elektronik".to_string();
    details.supplier_address = "Elektronikring 1, 26452 Sande".to_string();
    order::update_details(&mut s.order_form, details);

    order_number::generate_order_number(&mut s.generator, &mut s.order_number, "sequence")
        .unwrap();
    let snapshot = order::submit_order(&mut s.order_form, &s.order_number).unwrap();

    assert_eq!(snapshot.order_number.as_ref().unwrap().as_str(), "25-THA-PB-001");
    assert_eq!(s.order_form.last_submitted.as_ref(), Some(&snapshot));

    let print = PrintRenderer::new(&s.config).render_order(&snapshot);
    assert!(print.contains("Nr. 25-THA-PB-001"));
    assert!(print.contains("Skonto (2 % bei Zahlung in 14 Tagen)"));
    assert!(print.contains("128.28 €"));
}

#[test]
fn sample_order_and_screen_view() {
    let mut s = session();

    let response = order::load_sample_order(&mut s.order_form, &s.config);
    assert_eq!(response.items.len(), 3);
    assert_eq!(response.display.gross_total, "206.94");

    let preview = order::preview_order(&s.order_form, &s.order_number);
    let screen = ScreenRenderer::new(&s.config).render_order(&preview);
    assert!(screen.contains("(keine Bestellnummer)"));
    assert!(screen.contains("206.94 €"));

    let response = order::reset_order(&mut s.order_form, &s.config);
    assert_eq!(response.items.len(), 1);
    assert_eq!(response.display.gross_total, "0.00");
}

#[test]
fn generator_feeds_both_forms() {
    let mut s = session();

    let response = order_number::update_generator(
        &mut s.generator,
        &s.order_number,
        order_number::GeneratorInput {
            department: Some("fb1".to_string()),
            contact_person: Some("Maria Anna Schmidt".to_string()),
            sequence: Some("41".to_string()),
            ..Default::default()
        },
    );
    assert_eq!(response.preview, "25-FB1-MAS-041");
    assert_eq!(response.current, None);

    order_number::increment_sequence(&mut s.generator, &s.order_number);
    let response =
        order_number::generate_order_number(&mut s.generator, &mut s.order_number, "a").unwrap();
    assert_eq!(response.current.as_ref().unwrap().as_str(), "25-FB1-MAS-042");

    let response =
        order_number::generate_order_number(&mut s.generator, &mut s.order_number, "unique")
            .unwrap();
    let unique = response.current.unwrap();
    assert_eq!(unique.len(), 25);
    assert!(unique.as_str().starts_with("25FB1"));

    // The card request picks up the same number.
    let request = procure_core::CardRequest {
        service_description: "Konferenzgebühr".to_string(),
        supplier: "IEEE".to_string(),
        eu_regulation_agreement: true,
        ordering_agreement: true,
        ..s.card_form.request.clone()
    };
    card::update_card_request(&mut s.card_form, &s.config, request);
    card::set_estimated_amount(&mut s.card_form, &s.config, "450");
    card::set_delivery_region(&mut s.card_form, &s.config, "drittland").unwrap();
    card::set_request_date(&mut s.card_form, &s.config, "2025-03-14").unwrap();

    let snapshot =
        card::submit_card_request(&mut s.card_form, &s.order_number, &s.config).unwrap();
    assert_eq!(snapshot.order_number, Some(unique));
    assert!(snapshot.to_json().unwrap().contains("\"status\": \"pending\""));
}

#[test]
fn card_request_needs_agreements() {
    let mut s = session();

    card::set_estimated_amount(&mut s.card_form, &s.config, "6000");
    let response = card::get_card_request(&s.card_form, &s.config);
    assert!(response.exceeds_limit);

    let err =
        card::submit_card_request(&mut s.card_form, &s.order_number, &s.config).unwrap_err();
    assert_eq!(err.code, ErrorCode::IncompleteForm);
    assert!(err.fields.contains(&"euRegulationAgreement".to_string()));
    assert!(err.fields.contains(&"orderingAgreement".to_string()));
    assert!(s.card_form.last_submitted.is_none());

    assert!(card::set_request_date(&mut s.card_form, &s.config, "14.03.2025").is_err());
}

#[test]
fn tabs_keep_form_state() {
    let mut s = session();
    order::set_tax_rate(&mut s.order_form, "7");

    assert_eq!(tab::select_tab(&mut s.tab, "credit-card").unwrap(), Tab::CreditCard);
    assert_eq!(tab::select_tab(&mut s.tab, "order").unwrap(), Tab::Order);

    assert_eq!(order::get_order(&s.order_form).display.tax_rate, "7");
}

#[test]
fn catalog_lookup() {
    assert_eq!(catalog::list_expense_categories(None).len(), 27);
    assert_eq!(
        catalog::get_expense_category("62003").unwrap().name,
        "Elektro- und Elektronikmaterial"
    );
    assert_eq!(
        catalog::get_expense_category("99999").unwrap_err().code,
        ErrorCode::NotFound
    );
}
