use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::{
    auth::application::domain::entities::UserId,
    referral::application::domain::{
        entities::ReferralCode,
        expires_at::{parse_expires_at, ExpiresAtError},
    },
};

//
// ──────────────────────────────────────────────────────────
// Create Referral Code Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateReferralCodeCommand {
    owner: UserId,
    expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateReferralCodeCommandError {
    #[error("expires_at is required")]
    MissingExpiresAt,

    #[error("Invalid expires_at: {0}")]
    InvalidExpiresAt(String),
}

impl CreateReferralCodeCommand {
    pub fn new(
        owner: UserId,
        expires_at: Option<&str>,
    ) -> Result<Self, CreateReferralCodeCommandError> {
        let expires_at = parse_expires_at(expires_at).map_err(|e| match e {
            ExpiresAtError::Missing => CreateReferralCodeCommandError::MissingExpiresAt,
            ExpiresAtError::Invalid(raw) => CreateReferralCodeCommandError::InvalidExpiresAt(raw),
        })?;

        Ok(Self { owner, expires_at })
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CreateReferralCodeError {
    #[error("User already has a referral code")]
    AlreadyHasCode,

    #[error("Could not generate a unique code after {0} attempts")]
    CodeGenerationExhausted(u32),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateReferralCodeUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateReferralCodeCommand,
    ) -> Result<ReferralCode, CreateReferralCodeError>;
}
