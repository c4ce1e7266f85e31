//! Hot-deal status and discount badge tiers.

use serde::{Deserialize, Serialize};

/// Minimum discount percent (inclusive) for a deal to count as hot.
pub const HOT_DEAL_MIN_DISCOUNT: i64 = 30;
/// Temperature a deal must exceed (strictly) to count as hot.
pub const HOT_DEAL_MIN_TEMPERATURE: i64 = 70;
/// Minimum discount percent (inclusive) for the extreme badge.
pub const EXTREME_BADGE_MIN_DISCOUNT: i64 = 50;

/// Tunable thresholds for classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    pub hot_min_discount: i64,
    pub hot_min_temperature: i64,
    pub extreme_min_discount: i64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            hot_min_discount: HOT_DEAL_MIN_DISCOUNT,
            hot_min_temperature: HOT_DEAL_MIN_TEMPERATURE,
            extreme_min_discount: EXTREME_BADGE_MIN_DISCOUNT,
        }
    }
}

/// Visual intensity of the discount badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTier {
    None,
    Standard,
    Extreme,
}

pub fn is_hot_deal(discount_percent: i64, temperature: i64) -> bool {
    is_hot_deal_with(discount_percent, temperature, &ClassifierConfig::default())
}

pub fn is_hot_deal_with(discount_percent: i64, temperature: i64, config: &ClassifierConfig) -> bool {
    discount_percent >= config.hot_min_discount || temperature > config.hot_min_temperature
}

pub fn badge_tier(discount_percent: i64) -> BadgeTier {
    badge_tier_with(discount_percent, &ClassifierConfig::default())
}

pub fn badge_tier_with(discount_percent: i64, config: &ClassifierConfig) -> BadgeTier {
    if discount_percent <= 0 {
        BadgeTier::None
    } else if discount_percent >= config.extreme_min_discount {
        BadgeTier::Extreme
    } else {
        BadgeTier::Standard
    }
}
