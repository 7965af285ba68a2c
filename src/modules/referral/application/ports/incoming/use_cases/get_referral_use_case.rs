use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    auth::application::domain::entities::UserId,
    referral::application::domain::entities::Referral,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetReferralError {
    #[error("Referral not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// A single ledger edge, visible only to its referrer or referred user.
#[async_trait]
pub trait GetReferralUseCase: Send + Sync {
    async fn execute(
        &self,
        requester: UserId,
        referral_id: Uuid,
    ) -> Result<Referral, GetReferralError>;
}
