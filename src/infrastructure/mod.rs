pub mod analytics;
pub mod auth;
pub mod generation;
pub mod sqlite;
