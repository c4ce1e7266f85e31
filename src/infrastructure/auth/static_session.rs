use crate::domain::entities::user::User;
use crate::domain::error::DomainError;
use crate::domain::ports::auth_provider::AuthProvider;
use std::collections::HashSet;
use std::sync::RwLock;

/// Process-local session: whoever signs in stays signed in until `sign_out`.
/// Admin rights come from a fixed list of emails.
pub struct StaticSession {
    current: RwLock<Option<User>>,
    admins: HashSet<String>,
}

impl StaticSession {
    pub fn anonymous() -> Self {
        Self {
            current: RwLock::new(None),
            admins: HashSet::new(),
        }
    }

    pub fn with_admins<I, S>(admins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            current: RwLock::new(None),
            admins: admins
                .into_iter()
                .map(|a| a.as_ref().trim().to_lowercase())
                .filter(|a| !a.is_empty())
                .collect(),
        }
    }

    fn user_for(&self, email: &str) -> Result<User, DomainError> {
        let email = email.trim();
        let valid = email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
        if !valid {
            return Err(DomainError::InvalidInput(format!("Invalid email: {email}")));
        }
        let user = User::new(email);
        Ok(if self.admins.contains(&user.email) {
            User::admin(user.email)
        } else {
            user
        })
    }
}

impl AuthProvider for StaticSession {
    fn current_user(&self) -> Option<User> {
        self.current.read().ok().and_then(|u| u.clone())
    }

    fn sign_in(&self, email: &str) -> Result<User, DomainError> {
        let user = self.user_for(email)?;
        let mut current = self
            .current
            .write()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        *current = Some(user.clone());
        tracing::debug!(user = %user.email, "signed in");
        Ok(user)
    }

    fn sign_up(&self, email: &str) -> Result<User, DomainError> {
        self.sign_in(email)
    }

    fn sign_out(&self) {
        if let Ok(mut current) = self.current.write() {
            *current = None;
        }
    }
}
