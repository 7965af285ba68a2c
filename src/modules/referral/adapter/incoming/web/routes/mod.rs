mod delete_referral_code_by_id;
mod dto;
mod get_referral;
mod get_referral_code_by_email;
mod get_referral_code_by_id;
mod get_referrals;
mod redeem_referral_code;
mod referral_code;

pub use delete_referral_code_by_id::{
    __path_delete_referral_code_by_id_handler, delete_referral_code_by_id_handler,
};
pub use dto::{ReferralCodeResponse, ReferralResponse};
pub use get_referral::{__path_get_referral_handler, get_referral_handler};
pub use get_referral_code_by_email::{
    __path_get_referral_code_by_email_handler, get_referral_code_by_email_handler,
    ReferralCodeByEmailQuery,
};
pub use get_referral_code_by_id::{
    __path_get_referral_code_by_id_handler, get_referral_code_by_id_handler,
};
pub use get_referrals::{__path_get_referrals_handler, get_referrals_handler};
pub use redeem_referral_code::{
    __path_redeem_referral_code_handler, redeem_referral_code_handler, RedeemReferralCodeRequest,
};
pub use referral_code::{
    __path_create_referral_code_handler, __path_delete_referral_code_handler,
    __path_get_referral_code_handler, create_referral_code_handler, delete_referral_code_handler,
    get_referral_code_handler, CreateReferralCodeRequest,
};

use actix_web::HttpResponse;
use tracing::error;

use crate::referral::application::ports::incoming::use_cases::{
    DeleteReferralCodeError, GetReferralCodeError,
};
use crate::shared::api::ApiResponse;

fn map_get_code_error(err: GetReferralCodeError) -> HttpResponse {
    match err {
        GetReferralCodeError::NotFound => {
            ApiResponse::not_found("REFERRAL_CODE_NOT_FOUND", "Referral code not found")
        }
        GetReferralCodeError::RepositoryError(msg) => {
            error!("Repository error fetching referral code: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

fn map_delete_code_error(err: DeleteReferralCodeError) -> HttpResponse {
    match err {
        DeleteReferralCodeError::NotFound => {
            ApiResponse::not_found("REFERRAL_CODE_NOT_FOUND", "Referral code not found")
        }
        DeleteReferralCodeError::RepositoryError(msg) => {
            error!("Repository error deleting referral code: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
