pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::actions::{DealActionsUseCase, Outbound, ShareLink};
use crate::application::add_deal::{AddDealUseCase, NewDeal};
use crate::application::blog::DraftPostUseCase;
use crate::application::feed::FeedUseCase;
use crate::application::listing::ListDealsUseCase;
use crate::config::AppConfig;
use crate::domain::entities::blog_post::{BlogPostDraft, PostBrief};
use crate::domain::entities::comment::Comment;
use crate::domain::entities::deal::{Deal, DealView};
use crate::domain::entities::user::User;
use crate::domain::error::DomainError;
use crate::domain::feed::{FeedFilter, FeedSession, MergeOutcome};
use crate::domain::ports::analytics::AnalyticsSink;
use crate::domain::ports::auth_provider::AuthProvider;
use crate::domain::ports::content_generator::ContentGenerator;
use crate::domain::ports::deal_repository::{DealQuery, DealRepository};
use crate::domain::values::classifier::ClassifierConfig;
use crate::domain::values::sort_key::SortKey;
use crate::domain::values::vote_direction::VoteDirection;
use crate::infrastructure::analytics::tracing_sink::TracingAnalytics;
use crate::infrastructure::auth::static_session::StaticSession;
use crate::infrastructure::generation::gemini::GeminiGenerator;
use crate::infrastructure::sqlite::deal_repo::SqliteDealRepo;
use crate::infrastructure::sqlite::migrations::run_migrations;
use rusqlite::Connection;
use std::sync::Arc;

pub struct PechinTech {
    add_deal_uc: AddDealUseCase,
    listing_uc: ListDealsUseCase,
    feed_uc: FeedUseCase,
    actions_uc: DealActionsUseCase,
    draft_uc: DraftPostUseCase,
    auth: Arc<dyn AuthProvider>,
    page_size: usize,
}

impl PechinTech {
    pub fn new(config: &AppConfig) -> Result<Self, DomainError> {
        let auth = Arc::new(StaticSession::with_admins(&config.admins));
        if let Some(email) = config.user.as_deref() {
            auth.sign_in(email)?;
        }
        let generator = Arc::new(GeminiGenerator::new(
            config.gemini_api_key.clone().unwrap_or_default(),
            config.gemini_model.clone(),
        ));

        Self::with_providers(config, auth, generator, Arc::new(TracingAnalytics))
    }

    pub fn with_providers(
        config: &AppConfig,
        auth: Arc<dyn AuthProvider>,
        generator: Arc<dyn ContentGenerator>,
        analytics: Arc<dyn AnalyticsSink>,
    ) -> Result<Self, DomainError> {
        let conn = Connection::open(&config.db_path)
            .map_err(|e| DomainError::Database(format!("DB error: {e}")))?;
        if config.db_path != ":memory:" {
            conn.pragma_update(None, "journal_mode", "WAL")
                .map_err(|e| DomainError::Database(format!("WAL error: {e}")))?;
        }
        run_migrations(&conn)?;
        tracing::debug!(db = %config.db_path, "database ready");

        let repo: Arc<dyn DealRepository> = Arc::new(SqliteDealRepo::new(conn));

        Ok(Self {
            add_deal_uc: AddDealUseCase::new(repo.clone()),
            listing_uc: ListDealsUseCase::new(
                repo.clone(),
                analytics.clone(),
                ClassifierConfig::default(),
            ),
            feed_uc: FeedUseCase::new(repo.clone()),
            actions_uc: DealActionsUseCase::new(
                repo,
                auth.clone(),
                analytics,
                config.site_url.clone(),
            ),
            draft_uc: DraftPostUseCase::new(generator, auth.clone()),
            auth,
            page_size: config.page_size.max(1),
        })
    }

    // Session
    pub fn sign_in(&self, email: &str) -> Result<User, DomainError> {
        self.auth.sign_in(email)
    }

    pub fn sign_out(&self) {
        self.auth.sign_out()
    }

    pub fn current_user(&self) -> Option<User> {
        self.auth.current_user()
    }

    // Catalog
    pub fn add_deal(&self, input: NewDeal) -> Result<Deal, DomainError> {
        self.add_deal_uc.execute(input)
    }

    pub fn show(&self, id: &str) -> Result<DealView, DomainError> {
        self.listing_uc.show(id)
    }

    pub fn list(&self, query: &DealQuery, sort: SortKey) -> Result<Vec<DealView>, DomainError> {
        self.listing_uc.list(query, sort)
    }

    pub fn favorites(&self, sort: SortKey) -> Result<Vec<DealView>, DomainError> {
        let user = self.auth.current_user().ok_or(DomainError::Unauthenticated)?;
        self.listing_uc.favorites(&user.id, sort)
    }

    pub fn views(&self, deals: &[Deal]) -> Vec<DealView> {
        self.listing_uc.views(deals.to_vec())
    }

    // Feed
    /// A fresh feed session using the configured page size.
    pub fn open_feed(&self, filter: FeedFilter) -> FeedSession {
        FeedSession::new(filter, self.page_size)
    }

    pub fn load_more(&self, session: &mut FeedSession) -> Option<MergeOutcome> {
        self.feed_uc.load_more(session)
    }

    pub fn load_pages(&self, session: &mut FeedSession, pages: usize) -> Vec<MergeOutcome> {
        self.feed_uc.load_pages(session, pages)
    }

    // Actions
    pub fn vote(&self, deal_id: &str, direction: VoteDirection) -> Result<Deal, DomainError> {
        self.actions_uc.vote(deal_id, direction)
    }

    pub fn toggle_favorite(&self, deal_id: &str) -> Result<bool, DomainError> {
        self.actions_uc.toggle_favorite(deal_id)
    }

    pub fn comment(&self, deal_id: &str, body: &str) -> Result<Comment, DomainError> {
        self.actions_uc.comment(deal_id, body)
    }

    pub fn comments(&self, deal_id: &str) -> Result<Vec<Comment>, DomainError> {
        self.actions_uc.comments(deal_id)
    }

    pub fn copy_coupon(&self, deal_id: &str) -> Result<String, DomainError> {
        self.actions_uc.copy_coupon(deal_id)
    }

    pub fn share(&self, deal_id: &str, method: &str) -> Result<ShareLink, DomainError> {
        self.actions_uc.share(deal_id, method)
    }

    pub fn promo_click(&self, deal_id: &str) -> Result<Outbound, DomainError> {
        self.actions_uc.promo_click(deal_id)
    }

    // Blog
    pub async fn draft_post(&self, brief: &PostBrief) -> Result<BlogPostDraft, DomainError> {
        self.draft_uc.execute(brief).await
    }
}
