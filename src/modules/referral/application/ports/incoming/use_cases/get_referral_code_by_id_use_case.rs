use async_trait::async_trait;
use uuid::Uuid;

use super::GetReferralCodeError;
use crate::referral::application::domain::entities::ReferralCode;

#[async_trait]
pub trait GetReferralCodeByIdUseCase: Send + Sync {
    async fn execute(&self, code_id: Uuid) -> Result<ReferralCode, GetReferralCodeError>;
}
