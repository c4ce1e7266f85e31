use crate::domain::entities::user::User;
use crate::domain::error::DomainError;

/// Authentication collaborator. The engine only needs to know who, if anyone,
/// is signed in.
pub trait AuthProvider: Send + Sync {
    fn current_user(&self) -> Option<User>;

    fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }

    fn sign_in(&self, email: &str) -> Result<User, DomainError>;
    fn sign_up(&self, email: &str) -> Result<User, DomainError>;
    fn sign_out(&self);
}
