use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create referral_codes table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(ReferralCodes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ReferralCodes::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ReferralCodes::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(ReferralCodes::Code)
                            .string_len(10)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ReferralCodes::ExpiresAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ReferralCodes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // FK → users
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_referral_codes_user_id")
                            .from(ReferralCodes::Table, ReferralCodes::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Constraints
        // =====================================================

        // One code per user
        manager
            .create_index(
                Index::create()
                    .name("uq_referral_codes_user_id")
                    .table(ReferralCodes::Table)
                    .col(ReferralCodes::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Codes are globally unique
        manager
            .create_index(
                Index::create()
                    .name("uq_referral_codes_code")
                    .table(ReferralCodes::Table)
                    .col(ReferralCodes::Code)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS uq_referral_codes_user_id;
                DROP INDEX IF EXISTS uq_referral_codes_code;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ReferralCodes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ReferralCodes {
    Table,
    Id,
    UserId,
    Code,
    ExpiresAt,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
