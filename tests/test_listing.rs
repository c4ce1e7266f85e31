mod common;

use common::{add, new_deal, setup};
use pechintech::domain::error::DomainError;
use pechintech::domain::ports::analytics::AnalyticsEvent;
use pechintech::domain::ports::deal_repository::DealQuery;
use pechintech::domain::values::category::DealCategory;
use pechintech::domain::values::classifier::BadgeTier;
use pechintech::domain::values::sort_key::SortKey;
use pechintech::domain::values::temperature::TemperatureBand;

#[test]
fn test_add_validates_input() {
    let h = setup();
    assert!(matches!(
        h.app.add_deal(new_deal("   ", 10.0, 20.0, 0)),
        Err(DomainError::InvalidInput(_))
    ));
    assert!(matches!(
        h.app.add_deal(new_deal("SSD", -1.0, 20.0, 0)),
        Err(DomainError::InvalidInput(_))
    ));
    assert!(matches!(
        h.app.add_deal(new_deal("SSD", 10.0, f64::NAN, 0)),
        Err(DomainError::InvalidPrice(_))
    ));
}

#[test]
fn test_view_derives_discount_badge_and_band() {
    let h = setup();
    let deal = h.app.add_deal(new_deal("Monitor 27", 400.0, 1000.0, 85)).unwrap();

    let view = h.app.show(&deal.id).unwrap();
    let discount = view.discount.unwrap();
    assert_eq!(discount.percent, 60);
    assert!((discount.savings - 600.0).abs() < 1e-9);
    assert_eq!(view.badge, BadgeTier::Extreme);
    assert_eq!(view.temperature_band, TemperatureBand::Blazing);
    assert!(view.is_hot_deal);
    assert_eq!(
        h.analytics.events(),
        vec![AnalyticsEvent::ProductView {
            deal_id: deal.id.clone(),
            title: "Monitor 27".into(),
            price: 400.0,
            category: "hardware".into(),
        }]
    );
}

#[test]
fn test_bad_original_price_only_hides_discount() {
    let h = setup();
    let deal = h.app.add_deal(new_deal("Brinde", 0.0, 0.0, 72)).unwrap();
    let view = h.app.show(&deal.id).unwrap();
    assert!(view.discount.is_none());
    assert_eq!(view.badge, BadgeTier::None);
    assert!(!view.is_hot_deal);
    assert_eq!(view.temperature_band, TemperatureBand::Hot);
}

#[test]
fn test_list_sorted_and_filtered() {
    let h = setup();
    add(&h.app, "Fonte 650W", 30);
    add(&h.app, "Water cooler", 75);
    let mut phone = new_deal("Galaxy S24", 3000.0, 4000.0, 99);
    phone.category = DealCategory::Smartphones;
    h.app.add_deal(phone).unwrap();

    let hottest: Vec<String> = h
        .app
        .list(&DealQuery::default(), SortKey::Hottest)
        .unwrap()
        .into_iter()
        .map(|v| v.deal.title)
        .collect();
    assert_eq!(hottest, vec!["Galaxy S24", "Water cooler", "Fonte 650W"]);
    assert!(h.analytics.events().is_empty());

    let query = DealQuery {
        category: Some(DealCategory::Hardware),
        ..Default::default()
    };
    assert_eq!(h.app.list(&query, SortKey::Hottest).unwrap().len(), 2);
    assert_eq!(
        h.analytics.events(),
        vec![AnalyticsEvent::CategoryFilter {
            category: "hardware".into()
        }]
    );
}

#[test]
fn test_search_reports_result_count() {
    let h = setup();
    add(&h.app, "Water cooler 240mm", 75);
    add(&h.app, "Air cooler", 40);
    add(&h.app, "Gabinete", 40);

    let query = DealQuery {
        text: Some(" cooler ".into()),
        ..Default::default()
    };
    let results = h.app.list(&query, SortKey::Hottest).unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(
        h.analytics.events(),
        vec![AnalyticsEvent::Search {
            term: "cooler".into(),
            results: 2
        }]
    );
}

#[test]
fn test_show_missing_deal() {
    let h = setup();
    assert!(matches!(h.app.show("missing"), Err(DomainError::NotFound(_))));
}

#[test]
fn test_limit_keeps_the_top_ranked_deals() {
    let h = setup();
    add(&h.app, "Gabinete antigo e quente", 99);
    add(&h.app, "Cabo novo e morno", 10);
    add(&h.app, "Hub USB", 55);

    let query = DealQuery {
        limit: Some(2),
        ..Default::default()
    };
    let hottest: Vec<String> = h
        .app
        .list(&query, SortKey::Hottest)
        .unwrap()
        .into_iter()
        .map(|v| v.deal.title)
        .collect();
    assert_eq!(hottest, vec!["Gabinete antigo e quente", "Hub USB"]);

    let newest = h.app.list(&query, SortKey::Newest).unwrap();
    assert_eq!(newest.len(), 2);
    assert_eq!(newest[0].deal.title, "Hub USB");
}
