use crate::domain::entities::comment::Comment;
use crate::domain::entities::deal::Deal;
use crate::domain::entities::user::User;
use crate::domain::error::DomainError;
use crate::domain::ports::analytics::{AnalyticsEvent, AnalyticsSink};
use crate::domain::ports::auth_provider::AuthProvider;
use crate::domain::ports::deal_repository::DealRepository;
use crate::domain::values::affiliate::is_allowed_affiliate_url;
use crate::domain::values::moderation::validate_comment;
use crate::domain::values::share::{product_url, share_message};
use crate::domain::values::vote_direction::VoteDirection;
use serde::Serialize;
use std::sync::Arc;

/// Where a promo click sends the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outbound {
    pub url: String,
    /// False when the link does not point at a known retailer.
    pub trusted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareLink {
    pub url: String,
    pub message: String,
}

/// User actions on a single deal. Anything that writes requires a signed-in
/// user; analytics is emitted only after the action itself succeeded.
pub struct DealActionsUseCase {
    repo: Arc<dyn DealRepository>,
    auth: Arc<dyn AuthProvider>,
    analytics: Arc<dyn AnalyticsSink>,
    site_url: String,
}

impl DealActionsUseCase {
    pub fn new(
        repo: Arc<dyn DealRepository>,
        auth: Arc<dyn AuthProvider>,
        analytics: Arc<dyn AnalyticsSink>,
        site_url: impl Into<String>,
    ) -> Self {
        Self {
            repo,
            auth,
            analytics,
            site_url: site_url.into(),
        }
    }

    fn require_user(&self) -> Result<User, DomainError> {
        self.auth.current_user().ok_or(DomainError::Unauthenticated)
    }

    fn deal(&self, deal_id: &str) -> Result<Deal, DomainError> {
        self.repo
            .get_by_id(deal_id)?
            .ok_or_else(|| DomainError::NotFound(format!("Deal {deal_id}")))
    }

    /// Record a vote and return the deal as stored afterwards.
    pub fn vote(&self, deal_id: &str, direction: VoteDirection) -> Result<Deal, DomainError> {
        let user = self.require_user()?;
        self.repo.record_vote(deal_id, &user.id, direction)?;
        tracing::info!(deal = deal_id, %direction, user = %user.id, "vote recorded");
        self.analytics.emit(&AnalyticsEvent::Vote {
            deal_id: deal_id.to_string(),
            direction,
        });
        self.deal(deal_id)
    }

    /// Returns whether the deal is now a favorite.
    pub fn toggle_favorite(&self, deal_id: &str) -> Result<bool, DomainError> {
        let user = self.require_user()?;
        self.deal(deal_id)?;
        let added = self.repo.toggle_favorite(deal_id, &user.id)?;
        tracing::info!(deal = deal_id, added, "favorite toggled");
        self.analytics.emit(&AnalyticsEvent::Favorite {
            deal_id: deal_id.to_string(),
            added,
        });
        Ok(added)
    }

    pub fn comment(&self, deal_id: &str, body: &str) -> Result<Comment, DomainError> {
        let user = self.require_user()?;
        validate_comment(body)?;
        let comment = Comment::new(deal_id.to_string(), user.id, body.trim().to_string());
        self.repo.add_comment(&comment)?;
        tracing::info!(deal = deal_id, comment = %comment.id, "comment added");
        self.analytics.emit(&AnalyticsEvent::Comment {
            deal_id: deal_id.to_string(),
        });
        Ok(comment)
    }

    pub fn comments(&self, deal_id: &str) -> Result<Vec<Comment>, DomainError> {
        self.repo.comments(deal_id)
    }

    /// The coupon to put on the clipboard.
    pub fn copy_coupon(&self, deal_id: &str) -> Result<String, DomainError> {
        self.require_user()?;
        let deal = self.deal(deal_id)?;
        let coupon = deal
            .coupon_code
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| DomainError::NotFound(format!("Coupon for deal {deal_id}")))?;
        self.analytics.emit(&AnalyticsEvent::CouponCopy {
            deal_id: deal.id,
            coupon: coupon.clone(),
        });
        Ok(coupon)
    }

    /// Sharing does not need an account.
    pub fn share(&self, deal_id: &str, method: &str) -> Result<ShareLink, DomainError> {
        let deal = self.deal(deal_id)?;
        let link = ShareLink {
            url: product_url(&self.site_url, &deal),
            message: share_message(&self.site_url, &deal),
        };
        self.analytics.emit(&AnalyticsEvent::Share {
            deal_id: deal.id,
            method: method.to_string(),
        });
        Ok(link)
    }

    pub fn promo_click(&self, deal_id: &str) -> Result<Outbound, DomainError> {
        let deal = self.deal(deal_id)?;
        let url = deal
            .affiliate_url
            .clone()
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| DomainError::NotFound(format!("Link for deal {deal_id}")))?;
        let trusted = is_allowed_affiliate_url(&url);
        if !trusted {
            tracing::warn!(deal = deal_id, %url, "outbound link is not a known retailer");
        }
        self.analytics.emit(&AnalyticsEvent::PromoClick {
            deal_id: deal.id,
            title: deal.title,
            store: deal.store,
            price: deal.current_price,
            category: deal.category.to_string(),
        });
        Ok(Outbound { url, trusted })
    }
}
