use actix_web::{delete, get, post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use super::{dto::ReferralCodeResponse, map_delete_code_error, map_get_code_error};
use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::{
        adapter::incoming::web::extractors::AuthenticatedUser,
        application::domain::entities::UserId,
    },
    referral::application::ports::incoming::use_cases::{
        CreateReferralCodeCommand, CreateReferralCodeCommandError, CreateReferralCodeError,
        GetReferralCodeError,
    },
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateReferralCodeRequest {
    /// ISO-8601 timestamp or date
    #[schema(example = "2030-01-01T00:00:00Z")]
    pub expires_at: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Routes
// ──────────────────────────────────────────────────────────
//

/// Caller's referral code
#[utoipa::path(
    get,
    path = "/referral-code/",
    tag = "referral-codes",
    responses(
        (status = 200, description = "Referral code of the caller", body = inline(SuccessResponse<ReferralCodeResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Caller has no referral code", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/referral-code/")]
pub async fn get_referral_code_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .referral
        .get_code
        .execute(UserId::from(user.user_id))
        .await
    {
        Ok(code) => ApiResponse::success(ReferralCodeResponse::from(code)),
        Err(err) => map_get_code_error(err),
    }
}

/// Create the caller's referral code
#[utoipa::path(
    post,
    path = "/referral-code/",
    tag = "referral-codes",
    request_body = CreateReferralCodeRequest,
    responses(
        (status = 201, description = "Referral code created", body = inline(SuccessResponse<ReferralCodeResponse>)),
        (status = 400, description = "Missing or invalid expires_at, or caller already has a code", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/referral-code/")]
pub async fn create_referral_code_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<CreateReferralCodeRequest>,
) -> impl Responder {
    let owner = UserId::from(user.user_id);

    // Ownership is checked before the payload is validated
    match data.referral.get_code.execute(owner).await {
        Ok(_) => return already_has_code(),
        Err(GetReferralCodeError::NotFound) => {}
        Err(GetReferralCodeError::RepositoryError(msg)) => {
            error!("Repository error checking existing referral code: {}", msg);
            return ApiResponse::internal_error();
        }
    }

    let command = match CreateReferralCodeCommand::new(owner, payload.expires_at.as_deref()) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.referral.create_code.execute(command).await {
        Ok(code) => ApiResponse::created(ReferralCodeResponse::from(code)),
        Err(err) => map_create_error(err),
    }
}

/// Delete the caller's referral code
#[utoipa::path(
    delete,
    path = "/referral-code/",
    tag = "referral-codes",
    responses(
        (status = 204, description = "Referral code deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Caller has no referral code", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[delete("/referral-code/")]
pub async fn delete_referral_code_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .referral
        .delete_code
        .execute(UserId::from(user.user_id))
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => map_delete_code_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: CreateReferralCodeCommandError) -> HttpResponse {
    match err {
        CreateReferralCodeCommandError::MissingExpiresAt => {
            ApiResponse::bad_request("MISSING_EXPIRES_AT", "expires_at is required")
        }
        CreateReferralCodeCommandError::InvalidExpiresAt(_) => ApiResponse::bad_request(
            "INVALID_EXPIRES_AT",
            "expires_at must be an ISO-8601 date or timestamp",
        ),
    }
}

fn already_has_code() -> HttpResponse {
    ApiResponse::bad_request(
        "REFERRAL_CODE_ALREADY_EXISTS",
        "You already have a referral code",
    )
}

fn map_create_error(err: CreateReferralCodeError) -> HttpResponse {
    match err {
        CreateReferralCodeError::AlreadyHasCode => already_has_code(),
        CreateReferralCodeError::CodeGenerationExhausted(attempts) => {
            error!(attempts, "Could not generate a unique referral code");
            ApiResponse::internal_error()
        }
        CreateReferralCodeError::RepositoryError(msg) => {
            error!("Repository error creating referral code: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    use crate::{
        referral::application::{
            domain::entities::ReferralCode,
            ports::incoming::use_cases::{
                CreateReferralCodeUseCase, DeleteReferralCodeError, DeleteReferralCodeUseCase,
                GetReferralCodeError, GetReferralCodeUseCase,
            },
        },
        shared::api::custom_json_config,
        tests::support::{
            app_state_builder::TestAppStateBuilder,
            stubs::{token_provider_data, StubTokenProvider},
        },
    };

    fn sample_code(owner: Uuid) -> ReferralCode {
        ReferralCode {
            id: Uuid::new_v4(),
            owner: UserId::from(owner),
            code: "ABC1234567".to_string(),
            expires_at: Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap(),
            created_at: Utc::now(),
        }
    }

    struct MockGetCode(Result<ReferralCode, GetReferralCodeError>);

    #[async_trait]
    impl GetReferralCodeUseCase for MockGetCode {
        async fn execute(&self, _owner: UserId) -> Result<ReferralCode, GetReferralCodeError> {
            self.0.clone()
        }
    }

    /// Echoes the command back as a created code.
    struct EchoCreateCode;

    #[async_trait]
    impl CreateReferralCodeUseCase for EchoCreateCode {
        async fn execute(
            &self,
            command: CreateReferralCodeCommand,
        ) -> Result<ReferralCode, CreateReferralCodeError> {
            Ok(ReferralCode {
                id: Uuid::new_v4(),
                owner: command.owner(),
                code: "ABC1234567".to_string(),
                expires_at: command.expires_at(),
                created_at: Utc::now(),
            })
        }
    }

    struct FailingCreateCode(CreateReferralCodeError);

    #[async_trait]
    impl CreateReferralCodeUseCase for FailingCreateCode {
        async fn execute(
            &self,
            _command: CreateReferralCodeCommand,
        ) -> Result<ReferralCode, CreateReferralCodeError> {
            Err(self.0.clone())
        }
    }

    struct MockDeleteCode(Result<(), DeleteReferralCodeError>);

    #[async_trait]
    impl DeleteReferralCodeUseCase for MockDeleteCode {
        async fn execute(&self, _owner: UserId) -> Result<(), DeleteReferralCodeError> {
            self.0.clone()
        }
    }

    async fn call(
        builder: TestAppStateBuilder,
        user_id: Uuid,
        req: test::TestRequest,
    ) -> actix_web::dev::ServiceResponse {
        let app = test::init_service(
            App::new()
                .app_data(builder.build())
                .app_data(token_provider_data(StubTokenProvider::valid(user_id)))
                .app_data(custom_json_config())
                .service(get_referral_code_handler)
                .service(create_referral_code_handler)
                .service(delete_referral_code_handler),
        )
        .await;

        let req = req
            .insert_header(("Authorization", "Bearer test-token"))
            .to_request();
        test::call_service(&app, req).await
    }

    // ==================== GET ====================

    #[actix_web::test]
    async fn get_returns_callers_code() {
        let user_id = Uuid::new_v4();
        let builder = TestAppStateBuilder::default()
            .with_get_referral_code(MockGetCode(Ok(sample_code(user_id))));

        let resp = call(
            builder,
            user_id,
            test::TestRequest::get().uri("/referral-code/"),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["data"]["code"], "ABC1234567");
        assert_eq!(json["data"]["user_id"], user_id.to_string());
    }

    #[actix_web::test]
    async fn get_without_code_is_404() {
        let builder = TestAppStateBuilder::default()
            .with_get_referral_code(MockGetCode(Err(GetReferralCodeError::NotFound)));

        let resp = call(
            builder,
            Uuid::new_v4(),
            test::TestRequest::get().uri("/referral-code/"),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "REFERRAL_CODE_NOT_FOUND");
    }

    #[actix_web::test]
    async fn get_without_token_is_401() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(token_provider_data(
                    StubTokenProvider::valid(Uuid::new_v4()),
                ))
                .service(get_referral_code_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/referral-code/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    // ==================== POST ====================

    #[actix_web::test]
    async fn post_creates_code() {
        let user_id = Uuid::new_v4();
        let builder = TestAppStateBuilder::default().with_create_referral_code(EchoCreateCode);

        let resp = call(
            builder,
            user_id,
            test::TestRequest::post()
                .uri("/referral-code/")
                .set_json(serde_json::json!({ "expires_at": "2030-01-01" })),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::CREATED);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["data"]["user_id"], user_id.to_string());
        assert_eq!(json["data"]["expires_at"], "2030-01-01T00:00:00Z");
    }

    #[actix_web::test]
    async fn post_without_expires_at_is_400() {
        let builder = TestAppStateBuilder::default().with_create_referral_code(EchoCreateCode);

        let resp = call(
            builder,
            Uuid::new_v4(),
            test::TestRequest::post()
                .uri("/referral-code/")
                .set_json(serde_json::json!({})),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "MISSING_EXPIRES_AT");
    }

    #[actix_web::test]
    async fn post_with_garbage_expires_at_is_400() {
        let builder = TestAppStateBuilder::default().with_create_referral_code(EchoCreateCode);

        let resp = call(
            builder,
            Uuid::new_v4(),
            test::TestRequest::post()
                .uri("/referral-code/")
                .set_json(serde_json::json!({ "expires_at": "next week" })),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "INVALID_EXPIRES_AT");
    }

    #[actix_web::test]
    async fn post_when_code_exists_is_400() {
        let builder = TestAppStateBuilder::default()
            .with_create_referral_code(FailingCreateCode(CreateReferralCodeError::AlreadyHasCode));

        let resp = call(
            builder,
            Uuid::new_v4(),
            test::TestRequest::post()
                .uri("/referral-code/")
                .set_json(serde_json::json!({ "expires_at": "2030-01-01T00:00:00Z" })),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "REFERRAL_CODE_ALREADY_EXISTS");
    }

    #[actix_web::test]
    async fn post_by_existing_owner_is_rejected_before_payload_validation() {
        let user_id = Uuid::new_v4();

        for body in [
            serde_json::json!({}),
            serde_json::json!({ "expires_at": "next week" }),
            serde_json::json!({ "expires_at": "2030-01-01T00:00:00Z" }),
        ] {
            let resp = call(
                TestAppStateBuilder::default()
                    .with_get_referral_code(MockGetCode(Ok(sample_code(user_id))))
                    .with_create_referral_code(EchoCreateCode),
                user_id,
                test::TestRequest::post()
                    .uri("/referral-code/")
                    .set_json(body),
            )
            .await;

            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            let json: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(json["error"]["code"], "REFERRAL_CODE_ALREADY_EXISTS");
        }
    }

    #[actix_web::test]
    async fn post_when_existing_code_lookup_fails_is_500() {
        let builder = TestAppStateBuilder::default()
            .with_get_referral_code(MockGetCode(Err(GetReferralCodeError::RepositoryError(
                "db down".to_string(),
            ))))
            .with_create_referral_code(EchoCreateCode);

        let resp = call(
            builder,
            Uuid::new_v4(),
            test::TestRequest::post()
                .uri("/referral-code/")
                .set_json(serde_json::json!({ "expires_at": "2030-01-01" })),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn post_exhausted_generation_is_500() {
        let builder = TestAppStateBuilder::default().with_create_referral_code(FailingCreateCode(
            CreateReferralCodeError::CodeGenerationExhausted(5),
        ));

        let resp = call(
            builder,
            Uuid::new_v4(),
            test::TestRequest::post()
                .uri("/referral-code/")
                .set_json(serde_json::json!({ "expires_at": "2030-01-01T00:00:00Z" })),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    // ==================== DELETE ====================

    #[actix_web::test]
    async fn delete_returns_204() {
        let builder =
            TestAppStateBuilder::default().with_delete_referral_code(MockDeleteCode(Ok(())));

        let resp = call(
            builder,
            Uuid::new_v4(),
            test::TestRequest::delete().uri("/referral-code/"),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn delete_without_code_is_404() {
        let builder = TestAppStateBuilder::default()
            .with_delete_referral_code(MockDeleteCode(Err(DeleteReferralCodeError::NotFound)));

        let resp = call(
            builder,
            Uuid::new_v4(),
            test::TestRequest::delete().uri("/referral-code/"),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
