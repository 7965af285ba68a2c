mod referral_code_query;
mod referral_code_repository;
mod referral_query;
mod referral_repository;

pub use referral_code_query::{ReferralCodeQuery, ReferralCodeQueryError};
pub use referral_code_repository::{
    CreateReferralCodeData, ReferralCodeRepository, ReferralCodeRepositoryError,
};
pub use referral_query::{ReferralQuery, ReferralQueryError};
pub use referral_repository::{RedeemReferralData, ReferralRepository, ReferralRepositoryError};
