use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::referral::application::domain::code_generator::ReferralCodeGenerator;
use crate::referral::application::domain::entities::{Referral, ReferralCode};
use crate::referral::application::domain::policies::{ReferralVisibility, SelfReferralPolicy};
use crate::referral::application::ports::outgoing::{
    CreateReferralCodeData, RedeemReferralData, ReferralCodeQuery, ReferralCodeQueryError,
    ReferralCodeRepository, ReferralCodeRepositoryError, ReferralQuery, ReferralQueryError,
    ReferralRepository, ReferralRepositoryError,
};
use crate::referral::application::referral_use_cases::ReferralUseCases;
use crate::referral::application::services::{
    CreateReferralCodeService, DeleteReferralCodeByIdService, DeleteReferralCodeService,
    GetReferralCodeByIdService, GetReferralCodeService, GetReferralService, GetReferralsService,
    RedeemReferralCodeService,
};

#[derive(Default)]
struct State {
    codes: Vec<ReferralCode>,
    referrals: Vec<Referral>,
}

/// Registry and ledger held in memory, enforcing the same uniqueness rules as
/// the database schema. Clones share state.
#[derive(Clone, Default)]
pub struct InMemoryReferralStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryReferralStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn code_count(&self) -> usize {
        self.state.lock().unwrap().codes.len()
    }

    pub fn referral_count(&self) -> usize {
        self.state.lock().unwrap().referrals.len()
    }
}

#[async_trait]
impl ReferralCodeRepository for InMemoryReferralStore {
    async fn create_code(
        &self,
        data: CreateReferralCodeData,
    ) -> Result<ReferralCode, ReferralCodeRepositoryError> {
        let mut state = self.state.lock().unwrap();

        if state.codes.iter().any(|c| c.owner == data.owner) {
            return Err(ReferralCodeRepositoryError::OwnerAlreadyHasCode);
        }
        if state.codes.iter().any(|c| c.code == data.code) {
            return Err(ReferralCodeRepositoryError::CodeCollision);
        }

        let code = ReferralCode {
            id: Uuid::new_v4(),
            owner: data.owner,
            code: data.code,
            expires_at: data.expires_at,
            created_at: Utc::now(),
        };
        state.codes.push(code.clone());
        Ok(code)
    }

    async fn delete_by_owner(&self, owner: UserId) -> Result<(), ReferralCodeRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let before = state.codes.len();
        state.codes.retain(|c| c.owner != owner);

        if state.codes.len() == before {
            return Err(ReferralCodeRepositoryError::ReferralCodeNotFound);
        }
        Ok(())
    }

    async fn delete_by_id(&self, code_id: Uuid) -> Result<UserId, ReferralCodeRepositoryError> {
        let mut state = self.state.lock().unwrap();
        let idx = state
            .codes
            .iter()
            .position(|c| c.id == code_id)
            .ok_or(ReferralCodeRepositoryError::ReferralCodeNotFound)?;

        Ok(state.codes.remove(idx).owner)
    }
}

#[async_trait]
impl ReferralCodeQuery for InMemoryReferralStore {
    async fn find_by_owner(
        &self,
        owner: UserId,
    ) -> Result<Option<ReferralCode>, ReferralCodeQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state.codes.iter().find(|c| c.owner == owner).cloned())
    }

    async fn find_by_id(
        &self,
        code_id: Uuid,
    ) -> Result<Option<ReferralCode>, ReferralCodeQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state.codes.iter().find(|c| c.id == code_id).cloned())
    }

    async fn find_by_code(
        &self,
        code: &str,
    ) -> Result<Option<ReferralCode>, ReferralCodeQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state.codes.iter().find(|c| c.code == code).cloned())
    }
}

#[async_trait]
impl ReferralRepository for InMemoryReferralStore {
    async fn redeem(&self, data: RedeemReferralData) -> Result<Referral, ReferralRepositoryError> {
        let mut state = self.state.lock().unwrap();

        let referrer = state
            .codes
            .iter()
            .find(|c| c.code == data.code)
            .map(|c| c.owner)
            .ok_or(ReferralRepositoryError::InvalidCode)?;

        if !data.self_referral.permits(referrer, data.referred) {
            return Err(ReferralRepositoryError::SelfReferral);
        }
        if state.referrals.iter().any(|r| r.referred == data.referred) {
            return Err(ReferralRepositoryError::AlreadyReferred);
        }

        let referral = Referral {
            id: Uuid::new_v4(),
            referrer,
            referred: data.referred,
            created_at: Utc::now(),
        };
        state.referrals.push(referral.clone());
        Ok(referral)
    }
}

#[async_trait]
impl ReferralQuery for InMemoryReferralStore {
    async fn list_by_referrer(&self, referrer: UserId) -> Result<Vec<Referral>, ReferralQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .referrals
            .iter()
            .filter(|r| r.referrer == referrer)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, referral_id: Uuid) -> Result<Option<Referral>, ReferralQueryError> {
        let state = self.state.lock().unwrap();
        Ok(state.referrals.iter().find(|r| r.id == referral_id).cloned())
    }
}

/// Hands out the given codes in order, then repeats the last one.
pub struct SequenceCodeGenerator {
    codes: Vec<&'static str>,
    next: Mutex<usize>,
}

impl SequenceCodeGenerator {
    pub fn new(codes: Vec<&'static str>) -> Self {
        Self {
            codes,
            next: Mutex::new(0),
        }
    }
}

impl ReferralCodeGenerator for SequenceCodeGenerator {
    fn generate(&self) -> String {
        let mut next = self.next.lock().unwrap();
        let idx = (*next).min(self.codes.len() - 1);
        *next += 1;
        self.codes[idx].to_string()
    }
}

/// Wires every referral service over one shared in-memory store.
pub fn in_memory_referral_use_cases(
    store: &InMemoryReferralStore,
    generator: Arc<dyn ReferralCodeGenerator>,
    self_referral: SelfReferralPolicy,
) -> ReferralUseCases {
    ReferralUseCases {
        get_code: Arc::new(GetReferralCodeService::new(store.clone())),
        get_code_by_id: Arc::new(GetReferralCodeByIdService::new(store.clone())),
        create_code: Arc::new(CreateReferralCodeService::new(store.clone(), generator, 5)),
        delete_code: Arc::new(DeleteReferralCodeService::new(store.clone())),
        delete_code_by_id: Arc::new(DeleteReferralCodeByIdService::new(store.clone())),
        redeem: Arc::new(RedeemReferralCodeService::new(store.clone(), self_referral)),
        get_referrals: Arc::new(GetReferralsService::new(store.clone())),
        get_referral: Arc::new(GetReferralService::new(
            store.clone(),
            ReferralVisibility::default(),
        )),
    }
}
