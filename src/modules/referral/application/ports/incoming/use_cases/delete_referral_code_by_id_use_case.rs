use async_trait::async_trait;
use uuid::Uuid;

use super::DeleteReferralCodeError;
use crate::auth::application::domain::entities::UserId;

/// Removes a referral code by identifier. Any authenticated user may do this;
/// `requester` is only recorded.
#[async_trait]
pub trait DeleteReferralCodeByIdUseCase: Send + Sync {
    async fn execute(&self, requester: UserId, code_id: Uuid)
        -> Result<(), DeleteReferralCodeError>;
}
