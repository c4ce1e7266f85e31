use crate::domain::entities::deal::{Deal, DealView};
use crate::domain::error::DomainError;
use crate::domain::ports::analytics::{AnalyticsEvent, AnalyticsSink};
use crate::domain::ports::deal_repository::{DealQuery, DealRepository};
use crate::domain::values::classifier::ClassifierConfig;
use crate::domain::values::ranking::sort_deals;
use crate::domain::values::sort_key::SortKey;
use std::sync::Arc;

/// Fully materialized listings (admin tables, favorites, search results),
/// sorted in memory by the ranking engine.
pub struct ListDealsUseCase {
    repo: Arc<dyn DealRepository>,
    analytics: Arc<dyn AnalyticsSink>,
    config: ClassifierConfig,
}

impl ListDealsUseCase {
    pub fn new(
        repo: Arc<dyn DealRepository>,
        analytics: Arc<dyn AnalyticsSink>,
        config: ClassifierConfig,
    ) -> Self {
        Self {
            repo,
            analytics,
            config,
        }
    }

    pub fn list(&self, query: &DealQuery, sort: SortKey) -> Result<Vec<DealView>, DomainError> {
        let mut query = query.clone();
        query.text = query
            .text
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        // The store returns matches unordered; the limit applies to the ranked list.
        let limit = query.limit.take();

        let deals = self.repo.list(&query)?;
        tracing::debug!(count = deals.len(), %sort, "listing deals");

        if let Some(term) = &query.text {
            self.analytics.emit(&AnalyticsEvent::Search {
                term: term.clone(),
                results: deals.len(),
            });
        }
        if let Some(category) = query.category {
            self.analytics.emit(&AnalyticsEvent::CategoryFilter {
                category: category.to_string(),
            });
        }

        let mut ranked = sort_deals(&deals, sort);
        if let Some(limit) = limit {
            ranked.truncate(limit);
        }
        Ok(self.views(ranked))
    }

    /// Product page: the deal plus a `view_item` event.
    pub fn show(&self, id: &str) -> Result<DealView, DomainError> {
        let deal = self
            .repo
            .get_by_id(id)?
            .ok_or_else(|| DomainError::NotFound(format!("Deal {id}")))?;
        self.analytics.emit(&AnalyticsEvent::ProductView {
            deal_id: deal.id.clone(),
            title: deal.title.clone(),
            price: deal.current_price,
            category: deal.category.to_string(),
        });
        Ok(DealView::from_deal(deal, &self.config))
    }

    pub fn favorites(&self, user_id: &str, sort: SortKey) -> Result<Vec<DealView>, DomainError> {
        let deals = self.repo.favorites(user_id)?;
        Ok(self.views(sort_deals(&deals, sort)))
    }

    pub fn views(&self, deals: Vec<Deal>) -> Vec<DealView> {
        deals
            .into_iter()
            .map(|d| DealView::from_deal(d, &self.config))
            .collect()
    }
}
