use actix_web::{get, web, Responder};
use tracing::error;

use super::dto::ReferralResponse;
use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::{
        adapter::incoming::web::extractors::AuthenticatedUser,
        application::domain::entities::UserId,
    },
    referral::application::ports::incoming::use_cases::GetReferralsError,
    shared::api::ApiResponse,
    AppState,
};

/// Users referred by the caller
#[utoipa::path(
    get,
    path = "/get-referrals/",
    tag = "referrals",
    responses(
        (status = 200, description = "Referrals where the caller is the referrer", body = inline(SuccessResponse<Vec<ReferralResponse>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/get-referrals/")]
pub async fn get_referrals_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .referral
        .get_referrals
        .execute(UserId::from(user.user_id))
        .await
    {
        Ok(referrals) => ApiResponse::success(
            referrals
                .into_iter()
                .map(ReferralResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(GetReferralsError::RepositoryError(msg)) => {
            error!("Repository error listing referrals: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
