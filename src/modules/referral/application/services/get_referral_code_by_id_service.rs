use async_trait::async_trait;
use uuid::Uuid;

use crate::referral::application::{
    domain::entities::ReferralCode,
    ports::{
        incoming::use_cases::{GetReferralCodeByIdUseCase, GetReferralCodeError},
        outgoing::ReferralCodeQuery,
    },
};

#[derive(Debug, Clone)]
pub struct GetReferralCodeByIdService<Q>
where
    Q: ReferralCodeQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetReferralCodeByIdService<Q>
where
    Q: ReferralCodeQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetReferralCodeByIdUseCase for GetReferralCodeByIdService<Q>
where
    Q: ReferralCodeQuery + Send + Sync,
{
    async fn execute(&self, code_id: Uuid) -> Result<ReferralCode, GetReferralCodeError> {
        self.query
            .find_by_id(code_id)
            .await
            .map_err(|e| GetReferralCodeError::RepositoryError(e.to_string()))?
            .ok_or(GetReferralCodeError::NotFound)
    }
}
