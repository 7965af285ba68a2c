use actix_web::{delete, web, Responder};
use uuid::Uuid;

use super::map_delete_code_error;
use crate::{
    api::schemas::ErrorResponse,
    auth::{
        adapter::incoming::web::extractors::AuthenticatedUser,
        application::domain::entities::UserId,
    },
    shared::api::ApiResponse,
    AppState,
};

/// Delete a referral code by identifier
#[utoipa::path(
    delete,
    path = "/delete-referral-code/{id}/",
    tag = "referral-codes",
    params(("id" = Uuid, Path, description = "Referral code id")),
    responses(
        (status = 204, description = "Referral code deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Referral code not found", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[delete("/delete-referral-code/{id}/")]
pub async fn delete_referral_code_by_id_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data
        .referral
        .delete_code_by_id
        .execute(UserId::from(user.user_id), path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => map_delete_code_error(err),
    }
}
