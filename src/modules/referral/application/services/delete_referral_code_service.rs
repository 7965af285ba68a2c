use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::referral::application::ports::{
    incoming::use_cases::{DeleteReferralCodeError, DeleteReferralCodeUseCase},
    outgoing::{ReferralCodeRepository, ReferralCodeRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteReferralCodeService<R>
where
    R: ReferralCodeRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteReferralCodeService<R>
where
    R: ReferralCodeRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl From<ReferralCodeRepositoryError> for DeleteReferralCodeError {
    fn from(err: ReferralCodeRepositoryError) -> Self {
        match err {
            ReferralCodeRepositoryError::ReferralCodeNotFound => Self::NotFound,
            other => Self::RepositoryError(other.to_string()),
        }
    }
}

#[async_trait]
impl<R> DeleteReferralCodeUseCase for DeleteReferralCodeService<R>
where
    R: ReferralCodeRepository + Send + Sync,
{
    async fn execute(&self, owner: UserId) -> Result<(), DeleteReferralCodeError> {
        self.repository.delete_by_owner(owner).await?;
        info!(%owner, "Referral code deleted by owner");
        Ok(())
    }
}
