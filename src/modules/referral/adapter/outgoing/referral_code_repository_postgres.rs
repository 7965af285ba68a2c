use async_trait::async_trait;
use chrono::SubsecRound;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    QueryFilter, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::referral_code_query_postgres::to_referral_code;
use super::sea_orm_entity::referral_codes::{
    ActiveModel as CodeActiveModel, Column as CodeColumn, Entity as CodeEntity,
};
use crate::auth::application::domain::entities::UserId;
use crate::referral::application::{
    domain::entities::ReferralCode,
    ports::outgoing::{CreateReferralCodeData, ReferralCodeRepository, ReferralCodeRepositoryError},
};
use crate::shared::db_errors::{is_unique_violation, violates_constraint};

const CODE_UNIQUE_CONSTRAINT: &str = "uq_referral_codes_code";

#[derive(Clone, Debug)]
pub struct ReferralCodeRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ReferralCodeRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> ReferralCodeRepositoryError {
        ReferralCodeRepositoryError::DatabaseError(e.to_string())
    }

    /// Classifies an insert failure. Only a clash on the code column is
    /// retryable; any other unique violation means the owner slot is taken.
    fn map_insert_err(e: DbErr) -> ReferralCodeRepositoryError {
        if violates_constraint(&e, CODE_UNIQUE_CONSTRAINT) {
            ReferralCodeRepositoryError::CodeCollision
        } else if is_unique_violation(&e) {
            ReferralCodeRepositoryError::OwnerAlreadyHasCode
        } else {
            Self::map_db_err(e)
        }
    }

    async fn create_in_txn(
        txn: &DatabaseTransaction,
        data: CreateReferralCodeData,
    ) -> Result<ReferralCode, ReferralCodeRepositoryError> {
        // Postgres keeps microseconds
        let expires_at = data.expires_at.trunc_subsecs(6);

        let existing = CodeEntity::find()
            .filter(CodeColumn::UserId.eq(data.owner.value()))
            .one(txn)
            .await
            .map_err(Self::map_db_err)?;

        // Covers the (owner, expires_at) pair as well
        if existing.is_some() {
            return Err(ReferralCodeRepositoryError::OwnerAlreadyHasCode);
        }

        let active = CodeActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.owner.value()),
            code: Set(data.code),
            expires_at: Set(expires_at.into()),
            created_at: NotSet,
        };

        let inserted = active.insert(txn).await.map_err(Self::map_insert_err)?;

        Ok(to_referral_code(inserted))
    }
}

#[async_trait]
impl ReferralCodeRepository for ReferralCodeRepositoryPostgres {
    async fn create_code(
        &self,
        data: CreateReferralCodeData,
    ) -> Result<ReferralCode, ReferralCodeRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        match Self::create_in_txn(&txn, data).await {
            Ok(code) => {
                txn.commit().await.map_err(Self::map_db_err)?;
                Ok(code)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(e)
            }
        }
    }

    async fn delete_by_owner(&self, owner: UserId) -> Result<(), ReferralCodeRepositoryError> {
        let res = CodeEntity::delete_many()
            .filter(CodeColumn::UserId.eq(owner.value()))
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        if res.rows_affected == 0 {
            return Err(ReferralCodeRepositoryError::ReferralCodeNotFound);
        }

        Ok(())
    }

    async fn delete_by_id(&self, code_id: Uuid) -> Result<UserId, ReferralCodeRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        let existing = match CodeEntity::find_by_id(code_id).one(&txn).await {
            Ok(Some(model)) => model,
            Ok(None) => {
                let _ = txn.rollback().await;
                return Err(ReferralCodeRepositoryError::ReferralCodeNotFound);
            }
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        };

        let res = match CodeEntity::delete_by_id(code_id).exec(&txn).await {
            Ok(res) => res,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(Self::map_db_err(e));
            }
        };

        // Deleted concurrently between the read and the delete
        if res.rows_affected == 0 {
            let _ = txn.rollback().await;
            return Err(ReferralCodeRepositoryError::ReferralCodeNotFound);
        }

        txn.commit().await.map_err(Self::map_db_err)?;

        Ok(UserId::from(existing.user_id))
    }
}
