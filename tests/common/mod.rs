//! Shared test helpers.
#![allow(dead_code)]

use pechintech::application::add_deal::NewDeal;
use pechintech::config::AppConfig;
use pechintech::domain::entities::deal::Deal;
use pechintech::domain::error::DomainError;
use pechintech::domain::ports::analytics::{AnalyticsEvent, AnalyticsSink};
use pechintech::domain::ports::content_generator::ContentGenerator;
use pechintech::domain::values::category::DealCategory;
use pechintech::infrastructure::auth::static_session::StaticSession;
use pechintech::PechinTech;
use std::sync::{Arc, Mutex};

pub const ADMIN: &str = "admin@pechintech.com.br";
pub const USER: &str = "maria@example.com";

#[derive(Default)]
pub struct RecordingAnalytics {
    events: Mutex<Vec<AnalyticsEvent>>,
}

impl RecordingAnalytics {
    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.events().iter().map(|e| e.name()).collect()
    }
}

impl AnalyticsSink for RecordingAnalytics {
    fn emit(&self, event: &AnalyticsEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

/// Returns a canned article (or error) and remembers the prompts it saw.
pub struct FakeGenerator {
    response: Result<String, String>,
    prompts: Mutex<Vec<String>>,
}

impl FakeGenerator {
    pub fn returning(content: &str) -> Self {
        Self {
            response: Ok(content.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ContentGenerator for FakeGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.response.clone().map_err(DomainError::Generation)
    }

    fn name(&self) -> &str {
        "fake"
    }
}

pub struct Harness {
    pub app: PechinTech,
    pub analytics: Arc<RecordingAnalytics>,
    pub generator: Arc<FakeGenerator>,
}

pub fn config(page_size: usize) -> AppConfig {
    AppConfig {
        db_path: ":memory:".into(),
        page_size,
        ..AppConfig::default()
    }
}

pub fn setup_with(config: &AppConfig, generator: FakeGenerator) -> Harness {
    let analytics = Arc::new(RecordingAnalytics::default());
    let generator = Arc::new(generator);
    let app = PechinTech::with_providers(
        config,
        Arc::new(StaticSession::with_admins([ADMIN])),
        generator.clone(),
        analytics.clone(),
    )
    .unwrap();
    Harness {
        app,
        analytics,
        generator,
    }
}

pub fn setup() -> Harness {
    setup_with(&config(20), FakeGenerator::returning("# Artigo\n\nConteúdo."))
}

pub fn new_deal(title: &str, current: f64, original: f64, temperature: i64) -> NewDeal {
    NewDeal {
        title: title.to_string(),
        description: format!("{title} em promoção"),
        category: DealCategory::Hardware,
        store: "KaBuM!".to_string(),
        current_price: current,
        original_price: original,
        temperature,
        coupon_code: None,
        affiliate_url: None,
        image_url: None,
    }
}

pub fn add(app: &PechinTech, title: &str, temperature: i64) -> Deal {
    app.add_deal(new_deal(title, 80.0, 100.0, temperature)).unwrap()
}
