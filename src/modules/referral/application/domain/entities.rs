use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

/// A user's single active referral code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferralCode {
    pub id: Uuid,
    pub owner: UserId,
    pub code: String,
    /// Stored as given; never compared against the current time.
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Edge in the referral ledger: `referrer` brought in `referred`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Referral {
    pub id: Uuid,
    pub referrer: UserId,
    pub referred: UserId,
    pub created_at: DateTime<Utc>,
}

impl Referral {
    pub fn involves(&self, user: UserId) -> bool {
        self.referrer == user || self.referred == user
    }
}
