use actix_web::{get, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use super::{dto::ReferralCodeResponse, map_get_code_error};
use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::{
        adapter::incoming::web::extractors::{
            resolve_user_id_by_email_or_response, AuthenticatedUser,
        },
        application::domain::entities::UserId,
    },
    referral::application::domain::policies::CodeLookupPolicy,
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ReferralCodeByEmailQuery {
    /// Owner's email. Only honored when lookup by email is enabled;
    /// otherwise the caller's own code is returned.
    pub email: Option<String>,
}

/// Caller's referral code, or the code of the user with the given email when lookup by email is enabled
#[utoipa::path(
    get,
    path = "/get-referral-code-by-email/",
    tag = "referral-codes",
    params(ReferralCodeByEmailQuery),
    responses(
        (status = 200, description = "Referral code", body = inline(SuccessResponse<ReferralCodeResponse>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Unknown email or user has no referral code", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[get("/get-referral-code-by-email/")]
pub async fn get_referral_code_by_email_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    query: web::Query<ReferralCodeByEmailQuery>,
) -> impl Responder {
    let email = match data.referral_code_lookup {
        CodeLookupPolicy::CallerOnly => None,
        CodeLookupPolicy::ByEmail => query
            .email
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty()),
    };

    let owner = match email {
        Some(email) => match resolve_user_id_by_email_or_response(&data, email).await {
            Ok(id) => id,
            Err(resp) => return resp,
        },
        None => user.user_id,
    };

    match data.referral.get_code.execute(UserId::from(owner)).await {
        Ok(code) => ApiResponse::success(ReferralCodeResponse::from(code)),
        Err(err) => map_get_code_error(err),
    }
}
