use crate::domain::feed::{FeedSession, MergeOutcome};
use crate::domain::ports::deal_repository::DealRepository;
use std::sync::Arc;

/// Drives a [`FeedSession`] against the deal repository.
pub struct FeedUseCase {
    repo: Arc<dyn DealRepository>,
}

impl FeedUseCase {
    pub fn new(repo: Arc<dyn DealRepository>) -> Self {
        Self { repo }
    }

    /// Fetch the next page if the session wants one. Returns `None` when the
    /// session is loading, exhausted or in error.
    pub fn load_more(&self, session: &mut FeedSession) -> Option<MergeOutcome> {
        let request = session.load_more()?;
        let result = self
            .repo
            .fetch_page(&request.filter, request.cursor.as_ref(), request.page_size);
        if let Err(e) = &result {
            tracing::warn!(generation = request.generation, "feed fetch failed: {e}");
        }
        let outcome = session.complete(&request, result);
        tracing::debug!(
            generation = request.generation,
            state = %session.state(),
            items = session.items().len(),
            ?outcome,
            "feed page handled"
        );
        Some(outcome)
    }

    /// Load up to `pages` pages, stopping early once the session stops asking.
    pub fn load_pages(&self, session: &mut FeedSession, pages: usize) -> Vec<MergeOutcome> {
        let mut outcomes = Vec::new();
        for _ in 0..pages {
            match self.load_more(session) {
                Some(outcome) => outcomes.push(outcome),
                None => break,
            }
        }
        outcomes
    }
}
