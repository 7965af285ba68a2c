use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::referral::application::{
    domain::{entities::Referral, policies::ReferralVisibility},
    ports::{
        incoming::use_cases::{GetReferralError, GetReferralUseCase},
        outgoing::ReferralQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetReferralService<Q>
where
    Q: ReferralQuery + Send + Sync,
{
    query: Q,
    visibility: ReferralVisibility,
}

impl<Q> GetReferralService<Q>
where
    Q: ReferralQuery + Send + Sync,
{
    pub fn new(query: Q, visibility: ReferralVisibility) -> Self {
        Self { query, visibility }
    }
}

#[async_trait]
impl<Q> GetReferralUseCase for GetReferralService<Q>
where
    Q: ReferralQuery + Send + Sync,
{
    async fn execute(
        &self,
        requester: UserId,
        referral_id: Uuid,
    ) -> Result<Referral, GetReferralError> {
        let referral = self
            .query
            .find_by_id(referral_id)
            .await
            .map_err(|e| GetReferralError::RepositoryError(e.to_string()))?
            .ok_or(GetReferralError::NotFound)?;

        // Hidden referrals get the same answer as a missing id
        if !self.visibility.permits(&referral, requester) {
            return Err(GetReferralError::NotFound);
        }

        Ok(referral)
    }
}
