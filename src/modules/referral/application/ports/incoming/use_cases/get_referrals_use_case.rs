use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    referral::application::domain::entities::Referral,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetReferralsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Everyone the given user has referred, oldest first.
#[async_trait]
pub trait GetReferralsUseCase: Send + Sync {
    async fn execute(&self, referrer: UserId) -> Result<Vec<Referral>, GetReferralsError>;
}
