use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::referral_codes::{
    Column as CodeColumn, Entity as CodeEntity, Model as CodeModel,
};
use crate::auth::application::domain::entities::UserId;
use crate::referral::application::{
    domain::entities::ReferralCode,
    ports::outgoing::{ReferralCodeQuery, ReferralCodeQueryError},
};

#[derive(Clone, Debug)]
pub struct ReferralCodeQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ReferralCodeQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

pub(crate) fn to_referral_code(model: CodeModel) -> ReferralCode {
    ReferralCode {
        id: model.id,
        owner: UserId::from(model.user_id),
        code: model.code,
        expires_at: model.expires_at.with_timezone(&Utc),
        created_at: model.created_at.with_timezone(&Utc),
    }
}

/// Resolves a code string to its record. Shared by the plain query and by
/// redemption, which runs it inside its own transaction.
pub(crate) async fn lookup_by_code<C>(conn: &C, code: &str) -> Result<Option<ReferralCode>, DbErr>
where
    C: ConnectionTrait,
{
    let model = CodeEntity::find()
        .filter(CodeColumn::Code.eq(code))
        .one(conn)
        .await?;

    Ok(model.map(to_referral_code))
}

fn map_db_err(e: DbErr) -> ReferralCodeQueryError {
    ReferralCodeQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl ReferralCodeQuery for ReferralCodeQueryPostgres {
    async fn find_by_owner(
        &self,
        owner: UserId,
    ) -> Result<Option<ReferralCode>, ReferralCodeQueryError> {
        let model = CodeEntity::find()
            .filter(CodeColumn::UserId.eq(owner.value()))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(to_referral_code))
    }

    async fn find_by_id(
        &self,
        code_id: Uuid,
    ) -> Result<Option<ReferralCode>, ReferralCodeQueryError> {
        let model = CodeEntity::find_by_id(code_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(to_referral_code))
    }

    async fn find_by_code(
        &self,
        code: &str,
    ) -> Result<Option<ReferralCode>, ReferralCodeQueryError> {
        lookup_by_code(&*self.db, code).await.map_err(map_db_err)
    }
}
