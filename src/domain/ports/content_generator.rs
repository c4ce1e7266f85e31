use crate::domain::error::DomainError;

/// Generative text backend used to draft blog posts.
#[async_trait::async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Produce Markdown for `prompt`.
    async fn generate(&self, prompt: &str) -> Result<String, DomainError>;

    /// Backend name for logging
    fn name(&self) -> &str;
}
