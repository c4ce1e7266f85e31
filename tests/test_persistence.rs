mod common;

use common::{new_deal, FakeGenerator, USER};
use pechintech::config::AppConfig;
use pechintech::domain::feed::{FeedFilter, FeedState};
use pechintech::domain::values::vote_direction::VoteDirection;
use pechintech::infrastructure::analytics::noop::NoopAnalytics;
use pechintech::infrastructure::auth::static_session::StaticSession;
use pechintech::PechinTech;
use std::sync::Arc;

fn open(db_path: &str) -> PechinTech {
    let config = AppConfig {
        db_path: db_path.to_string(),
        page_size: 5,
        ..AppConfig::default()
    };
    PechinTech::with_providers(
        &config,
        Arc::new(StaticSession::anonymous()),
        Arc::new(FakeGenerator::returning("")),
        Arc::new(NoopAnalytics),
    )
    .unwrap()
}

#[test]
fn test_state_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deals.db");
    let path = path.to_str().unwrap();

    let id = {
        let app = open(path);
        app.sign_in(USER).unwrap();
        let mut input = new_deal("Cadeira gamer", 899.0, 1299.0, 77);
        input.coupon_code = Some("SENTA10".into());
        let deal = app.add_deal(input).unwrap();
        app.vote(&deal.id, VoteDirection::Hot).unwrap();
        app.comment(&deal.id, "Muito confortável").unwrap();
        app.toggle_favorite(&deal.id).unwrap();
        deal.id
    };

    let app = open(path);
    let view = app.show(&id).unwrap();
    assert_eq!(view.deal.title, "Cadeira gamer");
    assert_eq!(view.deal.hot_votes, 1);
    assert_eq!(view.deal.comments_count, 1);
    assert_eq!(view.deal.coupon_code.as_deref(), Some("SENTA10"));
    assert_eq!(app.comments(&id).unwrap()[0].body, "Muito confortável");

    app.sign_in(USER).unwrap();
    assert_eq!(app.favorites(Default::default()).unwrap().len(), 1);

    let mut session = app.open_feed(FeedFilter::default());
    app.load_more(&mut session);
    assert_eq!(session.items().len(), 1);
    assert_eq!(session.state(), FeedState::Exhausted);
}
