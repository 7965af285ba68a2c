use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::referral::application::ports::{
    incoming::use_cases::{DeleteReferralCodeByIdUseCase, DeleteReferralCodeError},
    outgoing::ReferralCodeRepository,
};

#[derive(Debug, Clone)]
pub struct DeleteReferralCodeByIdService<R>
where
    R: ReferralCodeRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteReferralCodeByIdService<R>
where
    R: ReferralCodeRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteReferralCodeByIdUseCase for DeleteReferralCodeByIdService<R>
where
    R: ReferralCodeRepository + Send + Sync,
{
    async fn execute(
        &self,
        requester: UserId,
        code_id: Uuid,
    ) -> Result<(), DeleteReferralCodeError> {
        let owner = self.repository.delete_by_id(code_id).await?;

        if owner != requester {
            warn!(%requester, %owner, %code_id, "Referral code deleted by a user other than its owner");
        } else {
            info!(%owner, %code_id, "Referral code deleted");
        }

        Ok(())
    }
}
