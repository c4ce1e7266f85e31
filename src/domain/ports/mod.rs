pub mod analytics;
pub mod auth_provider;
pub mod content_generator;
pub mod deal_repository;
