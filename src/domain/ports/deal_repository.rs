use crate::domain::entities::comment::Comment;
use crate::domain::entities::deal::Deal;
use crate::domain::error::DomainError;
use crate::domain::feed::{Cursor, DealPage, FeedFilter};
use crate::domain::values::category::DealCategory;
use crate::domain::values::vote_direction::VoteDirection;

#[derive(Debug, Clone, Default)]
pub struct DealQuery {
    pub category: Option<DealCategory>,
    pub store: Option<String>,
    /// Case-insensitive match on title or description.
    pub text: Option<String>,
    pub limit: Option<usize>,
}

/// Persistence collaborator for deals and the user actions recorded on them.
pub trait DealRepository: Send + Sync {
    fn add(&self, deal: &Deal) -> Result<(), DomainError>;
    fn get_by_id(&self, id: &str) -> Result<Option<Deal>, DomainError>;
    /// Unordered materialized listing; callers sort it themselves. `limit`
    /// caps the row count in storage order.
    fn list(&self, query: &DealQuery) -> Result<Vec<Deal>, DomainError>;
    /// One page of the public feed, ordered by `filter.sort`.
    fn fetch_page(
        &self,
        filter: &FeedFilter,
        cursor: Option<&Cursor>,
        page_size: usize,
    ) -> Result<DealPage, DomainError>;
    fn record_vote(&self, deal_id: &str, user_id: &str, direction: VoteDirection) -> Result<(), DomainError>;
    /// Returns `true` when the deal is now a favorite.
    fn toggle_favorite(&self, deal_id: &str, user_id: &str) -> Result<bool, DomainError>;
    fn favorites(&self, user_id: &str) -> Result<Vec<Deal>, DomainError>;
    fn add_comment(&self, comment: &Comment) -> Result<(), DomainError>;
    fn comments(&self, deal_id: &str) -> Result<Vec<Comment>, DomainError>;
}
