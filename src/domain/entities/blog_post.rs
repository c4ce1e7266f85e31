use serde::{Deserialize, Serialize};

/// What the admin asks the content generator to write about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostBrief {
    pub title: String,
    pub topic: Option<String>,
    pub description: Option<String>,
    pub keywords: Vec<String>,
    pub word_count: Option<u32>,
}

/// A drafted blog post, ready for review in the admin panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPostDraft {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
}
