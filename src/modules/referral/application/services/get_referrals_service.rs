use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::referral::application::{
    domain::entities::Referral,
    ports::{
        incoming::use_cases::{GetReferralsError, GetReferralsUseCase},
        outgoing::ReferralQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetReferralsService<Q>
where
    Q: ReferralQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetReferralsService<Q>
where
    Q: ReferralQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetReferralsUseCase for GetReferralsService<Q>
where
    Q: ReferralQuery + Send + Sync,
{
    async fn execute(&self, referrer: UserId) -> Result<Vec<Referral>, GetReferralsError> {
        self.query
            .list_by_referrer(referrer)
            .await
            .map_err(|e| GetReferralsError::RepositoryError(e.to_string()))
    }
}
