use async_trait::async_trait;
use tracing::info;

use crate::referral::application::{
    domain::{entities::Referral, policies::SelfReferralPolicy},
    ports::{
        incoming::use_cases::{
            RedeemReferralCodeCommand, RedeemReferralCodeError, RedeemReferralCodeUseCase,
        },
        outgoing::{RedeemReferralData, ReferralRepository, ReferralRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct RedeemReferralCodeService<R>
where
    R: ReferralRepository + Send + Sync,
{
    repository: R,
    self_referral: SelfReferralPolicy,
}

impl<R> RedeemReferralCodeService<R>
where
    R: ReferralRepository + Send + Sync,
{
    pub fn new(repository: R, self_referral: SelfReferralPolicy) -> Self {
        Self {
            repository,
            self_referral,
        }
    }
}

impl From<ReferralRepositoryError> for RedeemReferralCodeError {
    fn from(err: ReferralRepositoryError) -> Self {
        match err {
            ReferralRepositoryError::InvalidCode => Self::InvalidCode,
            ReferralRepositoryError::AlreadyReferred => Self::AlreadyReferred,
            ReferralRepositoryError::SelfReferral => Self::SelfReferral,
            ReferralRepositoryError::DatabaseError(msg) => Self::RepositoryError(msg),
        }
    }
}

#[async_trait]
impl<R> RedeemReferralCodeUseCase for RedeemReferralCodeService<R>
where
    R: ReferralRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: RedeemReferralCodeCommand,
    ) -> Result<Referral, RedeemReferralCodeError> {
        let data = RedeemReferralData {
            code: command.code().to_string(),
            referred: command.referred(),
            self_referral: self.self_referral,
        };

        let referral = self.repository.redeem(data).await?;

        info!(
            referrer = %referral.referrer,
            referred = %referral.referred,
            "Referral recorded"
        );

        Ok(referral)
    }
}
