use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::user_query::{UserQuery, UserQueryError};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResolveUserIdError {
    #[error("User not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Resolves external identifiers (email) into a `UserId`.
/// Inactive users are treated as absent.
#[derive(Clone)]
pub struct UserIdentityResolver {
    user_query: Arc<dyn UserQuery + Send + Sync>,
}

impl UserIdentityResolver {
    pub fn new(user_query: Arc<dyn UserQuery + Send + Sync>) -> Self {
        Self { user_query }
    }

    pub async fn by_email(&self, email: &str) -> Result<UserId, ResolveUserIdError> {
        let email = email.trim().to_lowercase();
        match self.user_query.find_by_email(&email).await {
            Ok(Some(user)) if user.is_active => Ok(UserId::from(user.id)),
            Ok(_) => Err(ResolveUserIdError::NotFound),
            Err(UserQueryError::DatabaseError(msg)) => Err(ResolveUserIdError::RepositoryError(msg)),
        }
    }
}
