use serde::{Deserialize, Serialize};

/// Signed-in user as reported by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub is_admin: bool,
}

impl User {
    pub fn new(email: impl Into<String>) -> Self {
        let email = email.into().trim().to_lowercase();
        Self {
            id: email.clone(),
            email,
            is_admin: false,
        }
    }

    pub fn admin(email: impl Into<String>) -> Self {
        Self {
            is_admin: true,
            ..Self::new(email)
        }
    }
}
