use crate::domain::values::category::DealCategory;
use crate::domain::values::classifier::{badge_tier_with, is_hot_deal_with, BadgeTier, ClassifierConfig};
use crate::domain::values::discount::{compute_discount, Discount};
use crate::domain::values::temperature::{classify_temperature, gauge_width, TemperatureBand};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: DealCategory,
    pub store: String,
    pub current_price: f64,
    pub original_price: f64,
    pub hot_votes: i64,
    pub cold_votes: i64,
    pub comments_count: i64,
    pub temperature: i64,
    pub created_at: DateTime<Utc>,
    pub coupon_code: Option<String>,
    pub affiliate_url: Option<String>,
    pub image_url: Option<String>,
}

impl Deal {
    pub fn new(
        title: String,
        description: String,
        category: DealCategory,
        store: String,
        current_price: f64,
        original_price: f64,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title,
            description,
            category,
            store,
            current_price,
            original_price,
            hot_votes: 0,
            cold_votes: 0,
            comments_count: 0,
            temperature: 0,
            created_at: Utc::now(),
            coupon_code: None,
            affiliate_url: None,
            image_url: None,
        }
    }

    /// Hot votes minus cold votes.
    pub fn net_votes(&self) -> i64 {
        self.hot_votes - self.cold_votes
    }

    pub fn discount(&self) -> Option<Discount> {
        compute_discount(self.original_price, self.current_price).ok()
    }
}

/// A deal together with everything derived from it for display.
#[derive(Debug, Clone, Serialize)]
pub struct DealView {
    #[serde(flatten)]
    pub deal: Deal,
    /// `None` when the original price makes the discount undefined.
    pub discount: Option<Discount>,
    pub badge: BadgeTier,
    pub temperature_band: TemperatureBand,
    pub temperature_label: &'static str,
    pub gauge_width: u8,
    pub is_hot_deal: bool,
}

impl DealView {
    /// Derive display values. A malformed price only removes the discount
    /// information from this one view.
    pub fn from_deal(deal: Deal, config: &ClassifierConfig) -> Self {
        let discount = match compute_discount(deal.original_price, deal.current_price) {
            Ok(d) => Some(d),
            Err(e) => {
                tracing::warn!(deal_id = %deal.id, "discount suppressed: {e}");
                None
            }
        };
        let badge = match discount {
            Some(d) if d.is_displayable() => badge_tier_with(d.percent, config),
            _ => BadgeTier::None,
        };
        let percent = discount.map(|d| d.percent).unwrap_or(0);
        let band = classify_temperature(deal.temperature);
        Self {
            discount,
            badge,
            temperature_band: band,
            temperature_label: band.label(),
            gauge_width: gauge_width(deal.temperature),
            is_hot_deal: is_hot_deal_with(percent, deal.temperature, config),
            deal,
        }
    }
}
