use async_trait::async_trait;

use crate::{
    auth::application::domain::entities::UserId,
    referral::application::domain::entities::Referral,
};

//
// ──────────────────────────────────────────────────────────
// Redeem Referral Code Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct RedeemReferralCodeCommand {
    referred: UserId,
    code: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RedeemReferralCodeCommandError {
    #[error("referral_code is required")]
    MissingReferralCode,
}

impl RedeemReferralCodeCommand {
    /// Codes are compared in their canonical uppercase form.
    pub fn new(
        referred: UserId,
        code: Option<&str>,
    ) -> Result<Self, RedeemReferralCodeCommandError> {
        let code = code.map(str::trim).unwrap_or_default();

        if code.is_empty() {
            return Err(RedeemReferralCodeCommandError::MissingReferralCode);
        }

        Ok(Self {
            referred,
            code: code.to_uppercase(),
        })
    }

    pub fn referred(&self) -> UserId {
        self.referred
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RedeemReferralCodeError {
    #[error("Invalid referral code")]
    InvalidCode,

    #[error("User has already been referred")]
    AlreadyReferred,

    #[error("Users cannot redeem their own referral code")]
    SelfReferral,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RedeemReferralCodeUseCase: Send + Sync {
    async fn execute(
        &self,
        command: RedeemReferralCodeCommand,
    ) -> Result<Referral, RedeemReferralCodeError>;
}
