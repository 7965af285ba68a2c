use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    QueryFilter, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::referral_code_query_postgres::lookup_by_code;
use super::referral_query_postgres::to_referral;
use super::sea_orm_entity::{
    referrals::{ActiveModel as ReferralActiveModel, Column as ReferralColumn, Entity as ReferralEntity},
};
use crate::referral::application::{
    domain::entities::Referral,
    ports::outgoing::{RedeemReferralData, ReferralRepository, ReferralRepositoryError},
};
use crate::shared::db_errors::is_unique_violation;

#[derive(Clone, Debug)]
pub struct ReferralRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ReferralRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> ReferralRepositoryError {
        ReferralRepositoryError::DatabaseError(e.to_string())
    }

    /// Order of checks: code exists, self-referral policy, referred user not
    /// yet in the ledger. The unique index on `referred_id` settles races.
    async fn redeem_in_txn(
        txn: &DatabaseTransaction,
        data: RedeemReferralData,
    ) -> Result<Referral, ReferralRepositoryError> {
        let code = lookup_by_code(txn, &data.code)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(ReferralRepositoryError::InvalidCode)?;

        let referrer = code.owner;

        if !data.self_referral.permits(referrer, data.referred) {
            return Err(ReferralRepositoryError::SelfReferral);
        }

        let already_referred = ReferralEntity::find()
            .filter(ReferralColumn::ReferredId.eq(data.referred.value()))
            .one(txn)
            .await
            .map_err(Self::map_db_err)?;

        if already_referred.is_some() {
            return Err(ReferralRepositoryError::AlreadyReferred);
        }

        let active = ReferralActiveModel {
            id: Set(Uuid::new_v4()),
            referrer_id: Set(referrer.value()),
            referred_id: Set(data.referred.value()),
            created_at: NotSet,
        };

        let inserted = active.insert(txn).await.map_err(|e| {
            if is_unique_violation(&e) {
                return ReferralRepositoryError::AlreadyReferred;
            }
            Self::map_db_err(e)
        })?;

        Ok(to_referral(inserted))
    }
}

#[async_trait]
impl ReferralRepository for ReferralRepositoryPostgres {
    async fn redeem(&self, data: RedeemReferralData) -> Result<Referral, ReferralRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        match Self::redeem_in_txn(&txn, data).await {
            Ok(referral) => {
                txn.commit().await.map_err(Self::map_db_err)?;
                Ok(referral)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }
}
