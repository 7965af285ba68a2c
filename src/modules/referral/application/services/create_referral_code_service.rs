use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::referral::application::{
    domain::{code_generator::ReferralCodeGenerator, entities::ReferralCode},
    ports::{
        incoming::use_cases::{
            CreateReferralCodeCommand, CreateReferralCodeError, CreateReferralCodeUseCase,
        },
        outgoing::{CreateReferralCodeData, ReferralCodeRepository, ReferralCodeRepositoryError},
    },
};

#[derive(Clone)]
pub struct CreateReferralCodeService<R>
where
    R: ReferralCodeRepository + Send + Sync,
{
    repository: R,
    generator: Arc<dyn ReferralCodeGenerator>,
    max_attempts: u32,
}

impl<R> CreateReferralCodeService<R>
where
    R: ReferralCodeRepository + Send + Sync,
{
    pub fn new(repository: R, generator: Arc<dyn ReferralCodeGenerator>, max_attempts: u32) -> Self {
        Self {
            repository,
            generator,
            max_attempts: max_attempts.max(1),
        }
    }
}

#[async_trait]
impl<R> CreateReferralCodeUseCase for CreateReferralCodeService<R>
where
    R: ReferralCodeRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateReferralCodeCommand,
    ) -> Result<ReferralCode, CreateReferralCodeError> {
        for attempt in 1..=self.max_attempts {
            let data = CreateReferralCodeData {
                owner: command.owner(),
                code: self.generator.generate(),
                expires_at: command.expires_at(),
            };

            match self.repository.create_code(data).await {
                Ok(code) => {
                    info!(owner = %code.owner, code_id = %code.id, "Referral code created");
                    return Ok(code);
                }
                Err(ReferralCodeRepositoryError::CodeCollision) => {
                    warn!(attempt, "Generated referral code collided, retrying");
                }
                Err(ReferralCodeRepositoryError::OwnerAlreadyHasCode) => {
                    return Err(CreateReferralCodeError::AlreadyHasCode);
                }
                Err(other) => {
                    return Err(CreateReferralCodeError::RepositoryError(other.to_string()));
                }
            }
        }

        Err(CreateReferralCodeError::CodeGenerationExhausted(
            self.max_attempts,
        ))
    }
}
