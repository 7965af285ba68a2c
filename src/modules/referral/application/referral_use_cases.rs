use std::sync::Arc;

use crate::referral::application::ports::incoming::use_cases::{
    CreateReferralCodeUseCase, DeleteReferralCodeByIdUseCase, DeleteReferralCodeUseCase,
    GetReferralCodeByIdUseCase, GetReferralCodeUseCase, GetReferralUseCase, GetReferralsUseCase,
    RedeemReferralCodeUseCase,
};

#[derive(Clone)]
pub struct ReferralUseCases {
    pub get_code: Arc<dyn GetReferralCodeUseCase + Send + Sync>,
    pub get_code_by_id: Arc<dyn GetReferralCodeByIdUseCase + Send + Sync>,
    pub create_code: Arc<dyn CreateReferralCodeUseCase + Send + Sync>,
    pub delete_code: Arc<dyn DeleteReferralCodeUseCase + Send + Sync>,
    pub delete_code_by_id: Arc<dyn DeleteReferralCodeByIdUseCase + Send + Sync>,
    pub redeem: Arc<dyn RedeemReferralCodeUseCase + Send + Sync>,
    pub get_referrals: Arc<dyn GetReferralsUseCase + Send + Sync>,
    pub get_referral: Arc<dyn GetReferralUseCase + Send + Sync>,
}
