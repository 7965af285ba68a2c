use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::create_user::{CreateUserError, CreateUserInput};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Request body for user registration
#[derive(Serialize, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    /// Username (3-150 characters: letters, digits and @/./+/-/_)
    #[schema(example = "johndoe")]
    pub username: String,

    /// Email address
    #[schema(example = "john@example.com")]
    pub email: String,

    /// Password (8-128 characters)
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct RegisterUserResponse {
    #[schema(example = "User created successfully")]
    message: String,

    user: RegisteredUser,
}

#[derive(Serialize, ToSchema)]
pub struct RegisteredUser {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,

    #[schema(example = "johndoe")]
    username: String,

    #[schema(example = "john@example.com")]
    email: String,

    created_at: DateTime<Utc>,
}

fn map_create_user_error(err: CreateUserError, req: &CreateUserRequest) -> HttpResponse {
    match &err {
        CreateUserError::InvalidUsername(msg)
        | CreateUserError::InvalidEmail(msg)
        | CreateUserError::InvalidPassword(msg) => {
            warn!(
                username = %req.username,
                email = %req.email,
                error = %err,
                "Invalid registration input"
            );
            let code = match &err {
                CreateUserError::InvalidUsername(_) => "INVALID_USERNAME",
                CreateUserError::InvalidEmail(_) => "INVALID_EMAIL",
                _ => "INVALID_PASSWORD",
            };
            ApiResponse::bad_request(code, msg)
        }

        CreateUserError::UsernameAlreadyExists => {
            warn!(username = %req.username, "Username already taken");
            ApiResponse::bad_request(
                "USERNAME_ALREADY_EXISTS",
                "A user with that username already exists",
            )
        }

        CreateUserError::EmailAlreadyExists => {
            warn!(email = %req.email, "Email already registered");
            ApiResponse::bad_request(
                "EMAIL_ALREADY_EXISTS",
                "A user with that email already exists",
            )
        }

        CreateUserError::UserAlreadyExists => {
            warn!(
                username = %req.username,
                email = %req.email,
                "User already exists"
            );
            ApiResponse::bad_request("USER_ALREADY_EXISTS", "User already exists")
        }

        CreateUserError::HashingFailed(_)
        | CreateUserError::QueryError(_)
        | CreateUserError::RepositoryError(_) => {
            error!(
                username = %req.username,
                email = %req.email,
                error = %err,
                "User creation failed"
            );
            ApiResponse::internal_error()
        }
    }
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/register/",
    tag = "auth",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created successfully", body = inline(SuccessResponse<RegisterUserResponse>)),
        (
            status = 400,
            description = "Validation error or duplicate username/email",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "EMAIL_ALREADY_EXISTS",
                    "message": "A user with that email already exists"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/register/")]
pub async fn register_user_handler(
    req: web::Json<CreateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    info!(
        username = %req.username,
        email = %req.email,
        "User registration attempt"
    );

    let input = CreateUserInput {
        username: req.username.clone(),
        email: req.email.clone(),
        password: req.password.clone(),
    };

    match data.create_user_use_case.execute(input).await {
        Ok(user) => {
            info!(
                user_id = %user.user_id,
                username = %user.username,
                "User created successfully"
            );

            ApiResponse::created(RegisterUserResponse {
                message: "User created successfully".to_string(),
                user: RegisteredUser {
                    id: user.user_id.to_string(),
                    username: user.username,
                    email: user.email,
                    created_at: user.created_at,
                },
            })
        }
        Err(e) => map_create_user_error(e, &req),
    }
}
