use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeleteReferralCodeError {
    #[error("Referral code not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Removes the caller's own referral code.
#[async_trait]
pub trait DeleteReferralCodeUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<(), DeleteReferralCodeError>;
}
