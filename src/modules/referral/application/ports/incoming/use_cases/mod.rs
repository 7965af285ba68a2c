mod create_referral_code_use_case;
mod delete_referral_code_by_id_use_case;
mod delete_referral_code_use_case;
mod get_referral_code_by_id_use_case;
mod get_referral_code_use_case;
mod get_referral_use_case;
mod get_referrals_use_case;
mod redeem_referral_code_use_case;

pub use create_referral_code_use_case::{
    CreateReferralCodeCommand, CreateReferralCodeCommandError, CreateReferralCodeError,
    CreateReferralCodeUseCase,
};
pub use delete_referral_code_by_id_use_case::DeleteReferralCodeByIdUseCase;
pub use delete_referral_code_use_case::{DeleteReferralCodeError, DeleteReferralCodeUseCase};
pub use get_referral_code_by_id_use_case::GetReferralCodeByIdUseCase;
pub use get_referral_code_use_case::{GetReferralCodeError, GetReferralCodeUseCase};
pub use get_referral_use_case::{GetReferralError, GetReferralUseCase};
pub use get_referrals_use_case::{GetReferralsError, GetReferralsUseCase};
pub use redeem_referral_code_use_case::{
    RedeemReferralCodeCommand, RedeemReferralCodeCommandError, RedeemReferralCodeError,
    RedeemReferralCodeUseCase,
};
