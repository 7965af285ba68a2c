use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::referral::application::domain::entities::Referral;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReferralQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ReferralQuery: Send + Sync {
    /// Edges where `referrer` is the referrer, oldest first.
    async fn list_by_referrer(&self, referrer: UserId) -> Result<Vec<Referral>, ReferralQueryError>;

    async fn find_by_id(&self, referral_id: Uuid) -> Result<Option<Referral>, ReferralQueryError>;
}
