use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    referral::application::domain::entities::ReferralCode,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetReferralCodeError {
    #[error("Referral code not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// The referral code owned by a user.
#[async_trait]
pub trait GetReferralCodeUseCase: Send + Sync {
    async fn execute(&self, owner: UserId) -> Result<ReferralCode, GetReferralCodeError>;
}
