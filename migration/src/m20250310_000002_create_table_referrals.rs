use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create referrals table (referrer -> referred edges)
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Referrals::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Referrals::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Referrals::ReferrerId).uuid().not_null())
                    .col(ColumnDef::new(Referrals::ReferredId).uuid().not_null())
                    .col(
                        ColumnDef::new(Referrals::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // FK → users (referrer)
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_referrals_referrer_id")
                            .from(Referrals::Table, Referrals::ReferrerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    // FK → users (referred)
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_referrals_referred_id")
                            .from(Referrals::Table, Referrals::ReferredId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Constraints & indexes
        // =====================================================

        // A user can be referred at most once
        manager
            .create_index(
                Index::create()
                    .name("uq_referrals_referred_id")
                    .table(Referrals::Table)
                    .col(Referrals::ReferredId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Fast lookup: all referrals made by a referrer
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_referrals_referrer_id
                ON referrals (referrer_id, created_at);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS uq_referrals_referred_id;
                DROP INDEX IF EXISTS idx_referrals_referrer_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Referrals::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Referrals {
    Table,
    Id,
    ReferrerId,
    ReferredId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
