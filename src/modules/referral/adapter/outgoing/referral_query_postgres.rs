use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::referrals::{
    Column as ReferralColumn, Entity as ReferralEntity, Model as ReferralModel,
};
use crate::auth::application::domain::entities::UserId;
use crate::referral::application::{
    domain::entities::Referral,
    ports::outgoing::{ReferralQuery, ReferralQueryError},
};

#[derive(Clone, Debug)]
pub struct ReferralQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ReferralQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

pub(crate) fn to_referral(model: ReferralModel) -> Referral {
    Referral {
        id: model.id,
        referrer: UserId::from(model.referrer_id),
        referred: UserId::from(model.referred_id),
        created_at: model.created_at.with_timezone(&Utc),
    }
}

#[async_trait]
impl ReferralQuery for ReferralQueryPostgres {
    async fn list_by_referrer(&self, referrer: UserId) -> Result<Vec<Referral>, ReferralQueryError> {
        let models = ReferralEntity::find()
            .filter(ReferralColumn::ReferrerId.eq(referrer.value()))
            .order_by_asc(ReferralColumn::CreatedAt)
            .order_by_asc(ReferralColumn::Id)
            .all(&*self.db)
            .await
            .map_err(|e| ReferralQueryError::DatabaseError(e.to_string()))?;

        Ok(models.into_iter().map(to_referral).collect())
    }

    async fn find_by_id(&self, referral_id: Uuid) -> Result<Option<Referral>, ReferralQueryError> {
        let model = ReferralEntity::find_by_id(referral_id)
            .one(&*self.db)
            .await
            .map_err(|e| ReferralQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(to_referral))
    }
}
