use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use super::dto::ReferralResponse;
use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::{
        adapter::incoming::web::extractors::AuthenticatedUser,
        application::domain::entities::UserId,
    },
    referral::application::ports::incoming::use_cases::GetReferralError,
    shared::api::ApiResponse,
    AppState,
};

/// A single referral the caller takes part in
#[utoipa::path(
    get,
    path = "/referrals/{id}/",
    tag = "referrals",
    params(("id" = Uuid, Path, description = "Referral id")),
    responses(
        (status = 200, description = "Referral", body = inline(SuccessResponse<ReferralResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Referral not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/referrals/{id}/")]
pub async fn get_referral_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data
        .referral
        .get_referral
        .execute(UserId::from(user.user_id), path.into_inner())
        .await
    {
        Ok(referral) => ApiResponse::success(ReferralResponse::from(referral)),
        Err(GetReferralError::NotFound) => {
            ApiResponse::not_found("REFERRAL_NOT_FOUND", "Referral not found")
        }
        Err(GetReferralError::RepositoryError(msg)) => {
            error!("Repository error fetching referral: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
