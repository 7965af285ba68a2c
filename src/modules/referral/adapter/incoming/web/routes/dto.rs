use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::referral::application::domain::entities::{Referral, ReferralCode};

#[derive(Debug, Serialize, ToSchema)]
pub struct ReferralCodeResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    #[schema(example = "ABC1234567")]
    pub code: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<ReferralCode> for ReferralCodeResponse {
    fn from(code: ReferralCode) -> Self {
        Self {
            id: code.id,
            user_id: code.owner.value(),
            code: code.code,
            expires_at: code.expires_at,
            created_at: code.created_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReferralResponse {
    pub id: Uuid,
    pub referrer_id: Uuid,
    pub referred_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<Referral> for ReferralResponse {
    fn from(referral: Referral) -> Self {
        Self {
            id: referral.id,
            referrer_id: referral.referrer.value(),
            referred_id: referral.referred.value(),
            created_at: referral.created_at,
        }
    }
}
