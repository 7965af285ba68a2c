use actix_web::web;
use std::sync::Arc;

use crate::auth::application::helpers::UserIdentityResolver;
use crate::auth::application::use_cases::{
    create_user::ICreateUserUseCase, fetch_profile::FetchUserProfileUseCase,
    login_user::ILoginUserUseCase,
};
use crate::referral::application::ports::incoming::use_cases::{
    CreateReferralCodeUseCase, DeleteReferralCodeByIdUseCase, DeleteReferralCodeUseCase,
    GetReferralCodeByIdUseCase, GetReferralCodeUseCase, GetReferralUseCase, GetReferralsUseCase,
    RedeemReferralCodeUseCase,
};
use crate::referral::application::domain::policies::CodeLookupPolicy;
use crate::referral::application::referral_use_cases::ReferralUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    create_user: Arc<dyn ICreateUserUseCase + Send + Sync>,
    login_user: Arc<dyn ILoginUserUseCase + Send + Sync>,
    fetch_user_profile: Arc<dyn FetchUserProfileUseCase + Send + Sync>,
    referral: ReferralUseCases,
    referral_code_lookup: CodeLookupPolicy,
    user_identity_resolver: UserIdentityResolver,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            create_user: Arc::new(StubCreateUserUseCase),
            login_user: Arc::new(StubLoginUserUseCase),
            fetch_user_profile: Arc::new(StubFetchUserProfileUseCase),
            referral: ReferralUseCases {
                get_code: Arc::new(StubGetReferralCodeUseCase),
                get_code_by_id: Arc::new(StubGetReferralCodeByIdUseCase),
                create_code: Arc::new(StubCreateReferralCodeUseCase),
                delete_code: Arc::new(StubDeleteReferralCodeUseCase),
                delete_code_by_id: Arc::new(StubDeleteReferralCodeByIdUseCase),
                redeem: Arc::new(StubRedeemReferralCodeUseCase),
                get_referrals: Arc::new(StubGetReferralsUseCase),
                get_referral: Arc::new(StubGetReferralUseCase),
            },
            referral_code_lookup: CodeLookupPolicy::default(),
            user_identity_resolver: UserIdentityResolver::new(Arc::new(DummyUserQuery)),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_create_user(mut self, uc: impl ICreateUserUseCase + Send + Sync + 'static) -> Self {
        self.create_user = Arc::new(uc);
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_fetch_user_profile(
        mut self,
        uc: impl FetchUserProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.fetch_user_profile = Arc::new(uc);
        self
    }

    pub fn with_referral_code_lookup(mut self, policy: CodeLookupPolicy) -> Self {
        self.referral_code_lookup = policy;
        self
    }

    pub fn with_user_identity_resolver(mut self, resolver: UserIdentityResolver) -> Self {
        self.user_identity_resolver = resolver;
        self
    }

    pub fn with_get_referral_code(
        mut self,
        uc: impl GetReferralCodeUseCase + Send + Sync + 'static,
    ) -> Self {
        self.referral.get_code = Arc::new(uc);
        self
    }

    pub fn with_get_referral_code_by_id(
        mut self,
        uc: impl GetReferralCodeByIdUseCase + Send + Sync + 'static,
    ) -> Self {
        self.referral.get_code_by_id = Arc::new(uc);
        self
    }

    pub fn with_create_referral_code(
        mut self,
        uc: impl CreateReferralCodeUseCase + Send + Sync + 'static,
    ) -> Self {
        self.referral.create_code = Arc::new(uc);
        self
    }

    pub fn with_delete_referral_code(
        mut self,
        uc: impl DeleteReferralCodeUseCase + Send + Sync + 'static,
    ) -> Self {
        self.referral.delete_code = Arc::new(uc);
        self
    }

    pub fn with_delete_referral_code_by_id(
        mut self,
        uc: impl DeleteReferralCodeByIdUseCase + Send + Sync + 'static,
    ) -> Self {
        self.referral.delete_code_by_id = Arc::new(uc);
        self
    }

    pub fn with_redeem_referral_code(
        mut self,
        uc: impl RedeemReferralCodeUseCase + Send + Sync + 'static,
    ) -> Self {
        self.referral.redeem = Arc::new(uc);
        self
    }

    pub fn with_get_referrals(
        mut self,
        uc: impl GetReferralsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.referral.get_referrals = Arc::new(uc);
        self
    }

    pub fn with_get_referral(mut self, uc: impl GetReferralUseCase + Send + Sync + 'static) -> Self {
        self.referral.get_referral = Arc::new(uc);
        self
    }

    /// Replaces every referral use case at once, e.g. with services over an in-memory store.
    pub fn with_referral_use_cases(mut self, referral: ReferralUseCases) -> Self {
        self.referral = referral;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            create_user_use_case: self.create_user,
            login_user_use_case: self.login_user,
            fetch_user_profile_use_case: self.fetch_user_profile,
            referral: self.referral,
            referral_code_lookup: self.referral_code_lookup,
            user_identity_resolver: self.user_identity_resolver,
        })
    }
}
