mod common;

use common::{add, new_deal, setup, USER};
use pechintech::domain::error::DomainError;
use pechintech::domain::ports::analytics::AnalyticsEvent;
use pechintech::domain::values::sort_key::SortKey;
use pechintech::domain::values::vote_direction::VoteDirection;

#[test]
fn test_anonymous_actions_are_refused() {
    let h = setup();
    let deal = add(&h.app, "SSD 1TB", 40);

    assert!(matches!(
        h.app.vote(&deal.id, VoteDirection::Hot),
        Err(DomainError::Unauthenticated)
    ));
    assert!(matches!(
        h.app.toggle_favorite(&deal.id),
        Err(DomainError::Unauthenticated)
    ));
    assert!(matches!(
        h.app.comment(&deal.id, "ótimo preço"),
        Err(DomainError::Unauthenticated)
    ));
    assert!(matches!(h.app.favorites(SortKey::Hottest), Err(DomainError::Unauthenticated)));
    assert!(h.analytics.events().is_empty());

    let stored = h.app.show(&deal.id).unwrap();
    assert_eq!(stored.deal.hot_votes, 0);
    assert_eq!(stored.deal.comments_count, 0);
}

#[test]
fn test_vote_counts_without_touching_temperature() {
    let h = setup();
    h.app.sign_in(USER).unwrap();
    let deal = add(&h.app, "Mouse gamer", 65);

    h.app.vote(&deal.id, VoteDirection::Hot).unwrap();
    h.app.vote(&deal.id, VoteDirection::Hot).unwrap();
    let after = h.app.vote(&deal.id, VoteDirection::Cold).unwrap();

    assert_eq!(after.hot_votes, 2);
    assert_eq!(after.cold_votes, 1);
    assert_eq!(after.net_votes(), 1);
    assert_eq!(after.temperature, 65);
    assert_eq!(h.analytics.names(), vec!["vote", "vote", "vote"]);
    assert_eq!(
        h.analytics.events()[2],
        AnalyticsEvent::Vote {
            deal_id: deal.id.clone(),
            direction: VoteDirection::Cold
        }
    );
}

#[test]
fn test_vote_on_missing_deal() {
    let h = setup();
    h.app.sign_in(USER).unwrap();
    assert!(matches!(
        h.app.vote("nope", VoteDirection::Hot),
        Err(DomainError::NotFound(_))
    ));
    assert!(h.analytics.events().is_empty());
}

#[test]
fn test_favorites_toggle() {
    let h = setup();
    h.app.sign_in(USER).unwrap();
    let cold = add(&h.app, "Teclado", 20);
    let hot = add(&h.app, "Monitor 144Hz", 95);

    assert!(h.app.toggle_favorite(&cold.id).unwrap());
    assert!(h.app.toggle_favorite(&hot.id).unwrap());
    let favorites = h.app.favorites(SortKey::Hottest).unwrap();
    let ids: Vec<&str> = favorites.iter().map(|v| v.deal.id.as_str()).collect();
    assert_eq!(ids, vec![hot.id.as_str(), cold.id.as_str()]);

    assert!(!h.app.toggle_favorite(&cold.id).unwrap());
    assert_eq!(h.app.favorites(SortKey::Hottest).unwrap().len(), 1);

    // Favorites are per user.
    h.app.sign_in("joao@example.com").unwrap();
    assert!(h.app.favorites(SortKey::Hottest).unwrap().is_empty());
}

#[test]
fn test_comment_moderation() {
    let h = setup();
    h.app.sign_in(USER).unwrap();
    let deal = add(&h.app, "Headset", 50);

    let err = h
        .app
        .comment(&deal.id, "melhor preço em https://outraloja.com")
        .unwrap_err();
    assert!(matches!(err, DomainError::Rejected(_)));
    assert!(matches!(
        h.app.comment(&deal.id, "   "),
        Err(DomainError::Rejected(_))
    ));
    assert!(h.app.comments(&deal.id).unwrap().is_empty());

    let comment = h.app.comment(&deal.id, "  Comprei, chegou rápido!  ").unwrap();
    assert_eq!(comment.body, "Comprei, chegou rápido!");
    assert_eq!(comment.user_id, USER);

    let comments = h.app.comments(&deal.id).unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(h.app.show(&deal.id).unwrap().deal.comments_count, 1);
    assert!(h.analytics.names().contains(&"comment"));
}

#[test]
fn test_coupon_copy() {
    let h = setup();
    h.app.sign_in(USER).unwrap();
    let mut input = new_deal("Jogo", 99.9, 199.9, 30);
    input.coupon_code = Some("GAMER10".into());
    let with_coupon = h.app.add_deal(input).unwrap();
    let without = add(&h.app, "Cabo HDMI", 10);

    assert_eq!(h.app.copy_coupon(&with_coupon.id).unwrap(), "GAMER10");
    assert!(matches!(
        h.app.copy_coupon(&without.id),
        Err(DomainError::NotFound(_))
    ));
    assert_eq!(
        h.analytics.events(),
        vec![AnalyticsEvent::CouponCopy {
            deal_id: with_coupon.id.clone(),
            coupon: "GAMER10".into()
        }]
    );
}

#[test]
fn test_share_needs_no_account() {
    let h = setup();
    let deal = add(&h.app, "Placa de Vídeo RTX 4060", 80);

    let link = h.app.share(&deal.id, "whatsapp").unwrap();
    assert!(link
        .url
        .starts_with("https://www.pechintech.com.br/produto/placa-de-video-rtx-4060-"));
    assert!(link.message.contains(&link.url));
    assert!(link.message.contains("(-20%)"));
    assert_eq!(h.analytics.names(), vec!["share"]);
}

#[test]
fn test_promo_click_flags_unknown_retailers() {
    let h = setup();
    let mut trusted = new_deal("Notebook", 3500.0, 4200.0, 60);
    trusted.affiliate_url = Some("https://www.kabum.com.br/produto/123".into());
    let trusted = h.app.add_deal(trusted).unwrap();
    let mut shady = new_deal("Notebook genérico", 900.0, 4200.0, 10);
    shady.affiliate_url = Some("https://kabum.com.br.promo.io/x".into());
    let shady = h.app.add_deal(shady).unwrap();

    assert!(h.app.promo_click(&trusted.id).unwrap().trusted);
    let outbound = h.app.promo_click(&shady.id).unwrap();
    assert!(!outbound.trusted);
    assert_eq!(outbound.url, "https://kabum.com.br.promo.io/x");
    assert_eq!(h.analytics.names(), vec!["promo_click", "promo_click"]);
}
