use crate::domain::feed::DEFAULT_PAGE_SIZE;
use crate::domain::values::share::DEFAULT_SITE_URL;
use serde::Deserialize;
use std::fs;

/// Runtime settings. A JSON file gives the base values; environment
/// variables override it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub db_path: String,
    pub page_size: usize,
    pub site_url: String,
    /// Email of the signed-in user for this process.
    pub user: Option<String>,
    pub admins: Vec<String>,
    pub gemini_api_key: Option<String>,
    pub gemini_model: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: "./pechintech.db".into(),
            page_size: DEFAULT_PAGE_SIZE,
            site_url: DEFAULT_SITE_URL.into(),
            user: None,
            admins: Vec::new(),
            gemini_api_key: None,
            gemini_model: None,
        }
    }
}

impl AppConfig {
    /// Load `path` (if given) and apply environment overrides on top.
    pub fn load(path: Option<&str>) -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = match path {
            Some(path) => {
                let content = fs::read_to_string(path)?;
                serde_json::from_str(&content)?
            }
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        if config.page_size == 0 {
            return Err("page_size must be at least 1".into());
        }
        Ok(config)
    }

    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(db) = var("PECHINTECH_DB") {
            self.db_path = db;
        }
        if let Some(size) = var("PECHINTECH_PAGE_SIZE") {
            match size.parse() {
                Ok(n) => self.page_size = n,
                Err(_) => tracing::warn!(value = %size, "ignoring invalid PECHINTECH_PAGE_SIZE"),
            }
        }
        if let Some(url) = var("PECHINTECH_SITE_URL") {
            self.site_url = url;
        }
        if let Some(user) = var("PECHINTECH_USER") {
            self.user = Some(user);
        }
        if let Some(admins) = var("PECHINTECH_ADMINS") {
            self.admins = admins
                .split(',')
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty())
                .collect();
        }
        if let Some(key) = var("GEMINI_API_KEY") {
            self.gemini_api_key = Some(key);
        }
        if let Some(model) = var("GEMINI_MODEL") {
            self.gemini_model = Some(model);
        }
    }
}
