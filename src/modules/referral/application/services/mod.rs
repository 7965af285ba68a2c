mod create_referral_code_service;
mod delete_referral_code_by_id_service;
mod delete_referral_code_service;
mod get_referral_code_by_id_service;
mod get_referral_code_service;
mod get_referral_service;
mod get_referrals_service;
mod redeem_referral_code_service;

pub use create_referral_code_service::CreateReferralCodeService;
pub use delete_referral_code_by_id_service::DeleteReferralCodeByIdService;
pub use delete_referral_code_service::DeleteReferralCodeService;
pub use get_referral_code_by_id_service::GetReferralCodeByIdService;
pub use get_referral_code_service::GetReferralCodeService;
pub use get_referral_service::GetReferralService;
pub use get_referrals_service::GetReferralsService;
pub use redeem_referral_code_service::RedeemReferralCodeService;
