use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub deal_id: String,
    pub user_id: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(deal_id: String, user_id: String, body: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            deal_id,
            user_id,
            body,
            created_at: Utc::now(),
        }
    }
}
