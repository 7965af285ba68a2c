use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use super::dto::ReferralResponse;
use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    auth::{
        adapter::incoming::web::extractors::AuthenticatedUser,
        application::domain::entities::UserId,
    },
    referral::application::ports::incoming::use_cases::{
        RedeemReferralCodeCommand, RedeemReferralCodeCommandError, RedeemReferralCodeError,
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct RedeemReferralCodeRequest {
    #[schema(example = "ABC1234567")]
    pub referral_code: Option<String>,
}

/// Redeem a referral code as the referred user
#[utoipa::path(
    post,
    path = "/register-by-referral-code/",
    tag = "referrals",
    request_body = RedeemReferralCodeRequest,
    responses(
        (status = 201, description = "Referral recorded", body = inline(SuccessResponse<ReferralResponse>)),
        (status = 400, description = "Missing or invalid code, already referred, or self referral", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    ),
    security(("BearerAuth" = []))
)]
#[post("/register-by-referral-code/")]
pub async fn redeem_referral_code_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    payload: web::Json<RedeemReferralCodeRequest>,
) -> impl Responder {
    let referred = UserId::from(user.user_id);

    let command = match RedeemReferralCodeCommand::new(referred, payload.referral_code.as_deref()) {
        Ok(cmd) => cmd,
        Err(RedeemReferralCodeCommandError::MissingReferralCode) => {
            return ApiResponse::bad_request("MISSING_REFERRAL_CODE", "referral_code is required")
        }
    };

    match data.referral.redeem.execute(command).await {
        Ok(referral) => ApiResponse::created(ReferralResponse::from(referral)),
        Err(err) => map_redeem_error(err),
    }
}

fn map_redeem_error(err: RedeemReferralCodeError) -> HttpResponse {
    match err {
        RedeemReferralCodeError::InvalidCode => {
            ApiResponse::bad_request("INVALID_REFERRAL_CODE", "Invalid referral code")
        }
        RedeemReferralCodeError::AlreadyReferred => {
            ApiResponse::bad_request("ALREADY_REFERRED", "You have already been referred")
        }
        RedeemReferralCodeError::SelfReferral => ApiResponse::bad_request(
            "SELF_REFERRAL_NOT_ALLOWED",
            "You cannot redeem your own referral code",
        ),
        RedeemReferralCodeError::RepositoryError(msg) => {
            error!("Repository error redeeming referral code: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
