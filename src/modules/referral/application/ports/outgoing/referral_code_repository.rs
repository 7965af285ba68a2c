use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::referral::application::domain::entities::ReferralCode;

#[derive(Debug, Clone)]
pub struct CreateReferralCodeData {
    pub owner: UserId,
    pub code: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReferralCodeRepositoryError {
    #[error("User already has a referral code")]
    OwnerAlreadyHasCode,

    #[error("Generated code collides with an existing code")]
    CodeCollision,

    #[error("Referral code not found")]
    ReferralCodeNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ReferralCodeRepository: Send + Sync {
    /// Existence checks and insert run in one transaction.
    async fn create_code(
        &self,
        data: CreateReferralCodeData,
    ) -> Result<ReferralCode, ReferralCodeRepositoryError>;

    async fn delete_by_owner(&self, owner: UserId) -> Result<(), ReferralCodeRepositoryError>;

    /// Deletes by identifier and returns the owner of the removed code.
    async fn delete_by_id(&self, code_id: Uuid) -> Result<UserId, ReferralCodeRepositoryError>;
}
