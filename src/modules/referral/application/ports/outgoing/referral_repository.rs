use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::referral::application::domain::{entities::Referral, policies::SelfReferralPolicy};

#[derive(Debug, Clone)]
pub struct RedeemReferralData {
    pub code: String,
    pub referred: UserId,
    pub self_referral: SelfReferralPolicy,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReferralRepositoryError {
    #[error("Referral code does not exist")]
    InvalidCode,

    #[error("User has already been referred")]
    AlreadyReferred,

    #[error("Users cannot redeem their own referral code")]
    SelfReferral,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ReferralRepository: Send + Sync {
    /// Resolves the code, checks the referred user is not yet referred and
    /// records the edge, all in one transaction.
    async fn redeem(&self, data: RedeemReferralData) -> Result<Referral, ReferralRepositoryError>;
}
