use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::{
        adapter::incoming::web::extractors::auth::AuthenticatedUser,
        application::{domain::entities::UserId, use_cases::fetch_profile::FetchUserError},
    },
    shared::api::ApiResponse,
    AppState,
};
use actix_web::{get, web, Responder};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct UserProfileResponse {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    user_id: String,
    #[schema(example = "john@example.com")]
    email: String,
    #[schema(example = "johndoe")]
    username: String,
    created_at: DateTime<Utc>,
}

/// Current user's profile
#[utoipa::path(
    get,
    path = "/me/",
    tag = "users",
    responses(
        (status = 200, description = "Profile of the authenticated caller", body = inline(SuccessResponse<UserProfileResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/me/")]
pub async fn get_user_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .fetch_user_profile_use_case
        .execute(UserId::from(user.user_id))
        .await
    {
        Ok(profile) => ApiResponse::success(UserProfileResponse {
            user_id: profile.user_id.to_string(),
            email: profile.email,
            username: profile.username,
            created_at: profile.created_at,
        }),

        Err(FetchUserError::UserNotFound(_)) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(FetchUserError::QueryError(e)) => {
            error!("Database error fetching user profile: {}", e);
            ApiResponse::internal_error()
        }
    }
}
