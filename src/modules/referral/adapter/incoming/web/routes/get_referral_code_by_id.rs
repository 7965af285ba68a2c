use actix_web::{get, web, Responder};
use uuid::Uuid;

use super::{dto::ReferralCodeResponse, map_get_code_error};
use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::adapter::incoming::web::extractors::AuthenticatedUser,
    shared::api::ApiResponse,
    AppState,
};

/// Referral code by its identifier
#[utoipa::path(
    get,
    path = "/get-referral-by-user/{id}/",
    tag = "referral-codes",
    params(("id" = Uuid, Path, description = "Referral code id")),
    responses(
        (status = 200, description = "Referral code", body = inline(SuccessResponse<ReferralCodeResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Referral code not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/get-referral-by-user/{id}/")]
pub async fn get_referral_code_by_id_handler(
    _user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data
        .referral
        .get_code_by_id
        .execute(path.into_inner())
        .await
    {
        Ok(code) => ApiResponse::success(ReferralCodeResponse::from(code)),
        Err(err) => map_get_code_error(err),
    }
}
