use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::referral::application::domain::entities::ReferralCode;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReferralCodeQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ReferralCodeQuery: Send + Sync {
    async fn find_by_owner(
        &self,
        owner: UserId,
    ) -> Result<Option<ReferralCode>, ReferralCodeQueryError>;

    async fn find_by_id(&self, code_id: Uuid)
        -> Result<Option<ReferralCode>, ReferralCodeQueryError>;

    /// Reverse lookup: the code record (and so its owner) for a code string.
    async fn find_by_code(&self, code: &str)
        -> Result<Option<ReferralCode>, ReferralCodeQueryError>;
}
