use crate::domain::values::vote_direction::VoteDirection;
use serde_json::{json, Value};

/// Product-level events tracked by the site.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalyticsEvent {
    PromoClick {
        deal_id: String,
        title: String,
        store: String,
        price: f64,
        category: String,
    },
    Vote {
        deal_id: String,
        direction: VoteDirection,
    },
    Favorite {
        deal_id: String,
        added: bool,
    },
    Comment {
        deal_id: String,
    },
    Share {
        deal_id: String,
        method: String,
    },
    CouponCopy {
        deal_id: String,
        coupon: String,
    },
    Search {
        term: String,
        results: usize,
    },
    CategoryFilter {
        category: String,
    },
    ProductView {
        deal_id: String,
        title: String,
        price: f64,
        category: String,
    },
}

impl AnalyticsEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsEvent::PromoClick { .. } => "promo_click",
            AnalyticsEvent::Vote { .. } => "vote",
            AnalyticsEvent::Favorite { .. } => "favorite",
            AnalyticsEvent::Comment { .. } => "comment",
            AnalyticsEvent::Share { .. } => "share",
            AnalyticsEvent::CouponCopy { .. } => "coupon_copy",
            AnalyticsEvent::Search { .. } => "search",
            AnalyticsEvent::CategoryFilter { .. } => "category_filter",
            AnalyticsEvent::ProductView { .. } => "view_item",
        }
    }

    pub fn params(&self) -> Value {
        match self {
            AnalyticsEvent::PromoClick {
                deal_id,
                title,
                store,
                price,
                category,
            } => json!({
                "item_id": deal_id,
                "item_name": title,
                "affiliation": store,
                "price": price,
                "item_category": category,
                "currency": "BRL",
            }),
            AnalyticsEvent::Vote { deal_id, direction } => json!({
                "item_id": deal_id,
                "vote_type": direction.to_string(),
            }),
            AnalyticsEvent::Favorite { deal_id, added } => json!({
                "item_id": deal_id,
                "action": if *added { "add" } else { "remove" },
            }),
            AnalyticsEvent::Comment { deal_id } => json!({ "item_id": deal_id }),
            AnalyticsEvent::Share { deal_id, method } => json!({
                "item_id": deal_id,
                "method": method,
            }),
            AnalyticsEvent::CouponCopy { deal_id, coupon } => json!({
                "item_id": deal_id,
                "coupon": coupon,
            }),
            AnalyticsEvent::Search { term, results } => json!({
                "search_term": term,
                "results_count": results,
            }),
            AnalyticsEvent::CategoryFilter { category } => json!({ "category": category }),
            AnalyticsEvent::ProductView {
                deal_id,
                title,
                price,
                category,
            } => json!({
                "item_id": deal_id,
                "item_name": title,
                "price": price,
                "item_category": category,
                "currency": "BRL",
            }),
        }
    }
}

/// Best-effort event sink. Emitting can never fail the action it records.
pub trait AnalyticsSink: Send + Sync {
    fn emit(&self, event: &AnalyticsEvent);
}
