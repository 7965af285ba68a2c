use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::referral::application::{
    domain::entities::ReferralCode,
    ports::{
        incoming::use_cases::{GetReferralCodeError, GetReferralCodeUseCase},
        outgoing::ReferralCodeQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetReferralCodeService<Q>
where
    Q: ReferralCodeQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetReferralCodeService<Q>
where
    Q: ReferralCodeQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetReferralCodeUseCase for GetReferralCodeService<Q>
where
    Q: ReferralCodeQuery + Send + Sync,
{
    async fn execute(&self, owner: UserId) -> Result<ReferralCode, GetReferralCodeError> {
        self.query
            .find_by_owner(owner)
            .await
            .map_err(|e| GetReferralCodeError::RepositoryError(e.to_string()))?
            .ok_or(GetReferralCodeError::NotFound)
    }
}
