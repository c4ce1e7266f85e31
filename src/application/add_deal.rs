use crate::domain::entities::deal::Deal;
use crate::domain::error::DomainError;
use crate::domain::ports::deal_repository::DealRepository;
use crate::domain::values::affiliate::is_allowed_affiliate_url;
use crate::domain::values::category::DealCategory;
use serde::Deserialize;
use std::sync::Arc;

/// Deal as submitted by the admin panel or the `add` command.
#[derive(Debug, Clone, Deserialize)]
pub struct NewDeal {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: DealCategory,
    pub store: String,
    pub current_price: f64,
    pub original_price: f64,
    #[serde(default)]
    pub temperature: i64,
    #[serde(default)]
    pub coupon_code: Option<String>,
    #[serde(default)]
    pub affiliate_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

pub struct AddDealUseCase {
    repo: Arc<dyn DealRepository>,
}

impl AddDealUseCase {
    pub fn new(repo: Arc<dyn DealRepository>) -> Self {
        Self { repo }
    }

    pub fn execute(&self, input: NewDeal) -> Result<Deal, DomainError> {
        let title = input.title.trim();
        if title.is_empty() {
            return Err(DomainError::InvalidInput("Deal title is required".into()));
        }
        if input.store.trim().is_empty() {
            return Err(DomainError::InvalidInput("Deal store is required".into()));
        }
        if !input.current_price.is_finite() || input.current_price < 0.0 {
            return Err(DomainError::InvalidInput(format!(
                "Invalid current price: {}",
                input.current_price
            )));
        }
        // A bad original price is stored as-is; views drop the discount.
        if !input.original_price.is_finite() {
            return Err(DomainError::InvalidPrice(input.original_price));
        }
        if let Some(url) = input.affiliate_url.as_deref() {
            if !is_allowed_affiliate_url(url) {
                tracing::warn!(%url, "affiliate link is not a known retailer");
            }
        }

        let mut deal = Deal::new(
            title.to_string(),
            input.description.trim().to_string(),
            input.category,
            input.store.trim().to_string(),
            input.current_price,
            input.original_price,
        );
        deal.temperature = input.temperature;
        deal.coupon_code = input.coupon_code.filter(|c| !c.trim().is_empty());
        deal.affiliate_url = input.affiliate_url.filter(|u| !u.trim().is_empty());
        deal.image_url = input.image_url.filter(|u| !u.trim().is_empty());

        self.repo.add(&deal)?;
        tracing::info!(deal = %deal.id, title = %deal.title, "deal added");
        Ok(deal)
    }
}
