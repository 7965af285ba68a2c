use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{
    TokenClaims, TokenError, TokenProvider, UserQuery, UserQueryError, UserQueryResult,
};
use crate::auth::application::use_cases::{
    create_user::{CreateUserError, CreateUserInput, CreateUserOutput, ICreateUserUseCase},
    fetch_profile::{FetchUserError, FetchUserOutput, FetchUserProfileUseCase},
    login_user::{ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse},
};
use crate::referral::application::domain::entities::{Referral, ReferralCode};
use crate::referral::application::ports::incoming::use_cases::{
    CreateReferralCodeCommand, CreateReferralCodeError, CreateReferralCodeUseCase,
    DeleteReferralCodeByIdUseCase, DeleteReferralCodeError, DeleteReferralCodeUseCase,
    GetReferralCodeByIdUseCase, GetReferralCodeError, GetReferralCodeUseCase, GetReferralError,
    GetReferralUseCase, GetReferralsError, GetReferralsUseCase, RedeemReferralCodeCommand,
    RedeemReferralCodeError, RedeemReferralCodeUseCase,
};

// ============================================================
// Token provider
// ============================================================

/// Accepts any bearer token as `user_id`, or rejects every token.
#[derive(Clone)]
pub struct StubTokenProvider {
    user_id: Option<Uuid>,
}

impl StubTokenProvider {
    pub fn valid(user_id: Uuid) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }

    pub fn rejecting() -> Self {
        Self { user_id: None }
    }
}

impl TokenProvider for StubTokenProvider {
    fn generate_access_token(&self, user_id: Uuid) -> Result<String, TokenError> {
        Ok(format!("stub-token-{}", user_id))
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        let user_id = self.user_id.ok_or(TokenError::InvalidSignature)?;
        let now = Utc::now();
        Ok(TokenClaims {
            sub: user_id,
            exp: (now + Duration::minutes(30)).timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            iss: "referral-service".to_string(),
            token_type: "access".to_string(),
        })
    }

    fn access_token_expiry(&self) -> i64 {
        1800
    }
}

/// App data in the shape the `AuthenticatedUser` extractor looks up.
pub fn token_provider_data(
    provider: StubTokenProvider,
) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(provider);
    web::Data::new(provider)
}

// ============================================================
// Auth use cases
// ============================================================

#[derive(Default, Clone)]
pub struct StubCreateUserUseCase;

#[async_trait]
impl ICreateUserUseCase for StubCreateUserUseCase {
    async fn execute(&self, _input: CreateUserInput) -> Result<CreateUserOutput, CreateUserError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoginUserUseCase;

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubFetchUserProfileUseCase;

#[async_trait]
impl FetchUserProfileUseCase for StubFetchUserProfileUseCase {
    async fn execute(&self, user_id: UserId) -> Result<FetchUserOutput, FetchUserError> {
        Ok(FetchUserOutput {
            user_id,
            email: "stub@example.com".to_string(),
            username: "stubuser".to_string(),
            is_active: true,
            created_at: Utc::now(),
        })
    }
}

#[derive(Default, Clone)]
pub struct DummyUserQuery;

#[async_trait]
impl UserQuery for DummyUserQuery {
    async fn find_by_id(&self, _user_id: Uuid) -> Result<Option<UserQueryResult>, UserQueryError> {
        Ok(None)
    }

    async fn find_by_email(&self, _email: &str) -> Result<Option<UserQueryResult>, UserQueryError> {
        Ok(None)
    }

    async fn find_by_username(
        &self,
        _username: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError> {
        Ok(None)
    }
}

// ============================================================
// Referral use cases
// ============================================================

#[derive(Default, Clone)]
pub struct StubGetReferralCodeUseCase;

#[async_trait]
impl GetReferralCodeUseCase for StubGetReferralCodeUseCase {
    async fn execute(&self, _owner: UserId) -> Result<ReferralCode, GetReferralCodeError> {
        Err(GetReferralCodeError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubGetReferralCodeByIdUseCase;

#[async_trait]
impl GetReferralCodeByIdUseCase for StubGetReferralCodeByIdUseCase {
    async fn execute(&self, _code_id: Uuid) -> Result<ReferralCode, GetReferralCodeError> {
        Err(GetReferralCodeError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubCreateReferralCodeUseCase;

#[async_trait]
impl CreateReferralCodeUseCase for StubCreateReferralCodeUseCase {
    async fn execute(
        &self,
        _command: CreateReferralCodeCommand,
    ) -> Result<ReferralCode, CreateReferralCodeError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteReferralCodeUseCase;

#[async_trait]
impl DeleteReferralCodeUseCase for StubDeleteReferralCodeUseCase {
    async fn execute(&self, _owner: UserId) -> Result<(), DeleteReferralCodeError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteReferralCodeByIdUseCase;

#[async_trait]
impl DeleteReferralCodeByIdUseCase for StubDeleteReferralCodeByIdUseCase {
    async fn execute(
        &self,
        _requester: UserId,
        _code_id: Uuid,
    ) -> Result<(), DeleteReferralCodeError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubRedeemReferralCodeUseCase;

#[async_trait]
impl RedeemReferralCodeUseCase for StubRedeemReferralCodeUseCase {
    async fn execute(
        &self,
        _command: RedeemReferralCodeCommand,
    ) -> Result<Referral, RedeemReferralCodeError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubGetReferralsUseCase;

#[async_trait]
impl GetReferralsUseCase for StubGetReferralsUseCase {
    async fn execute(&self, _referrer: UserId) -> Result<Vec<Referral>, GetReferralsError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubGetReferralUseCase;

#[async_trait]
impl GetReferralUseCase for StubGetReferralUseCase {
    async fn execute(
        &self,
        _requester: UserId,
        _referral_id: Uuid,
    ) -> Result<Referral, GetReferralError> {
        Err(GetReferralError::NotFound)
    }
}
