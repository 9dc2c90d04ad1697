use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_app_user::AppUser;

static IDX_BUSINESS_USER_ID: &str = "idx_business_user_id";
static FK_BUSINESS_USER_ID: &str = "fk_business_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Business::Table)
                    .if_not_exists()
                    .col(pk_auto(Business::Id))
                    .col(integer(Business::UserId))
                    .col(string(Business::Name))
                    .col(string(Business::Address).default(""))
                    .col(string_null(Business::Phone))
                    .col(string_null(Business::Email))
                    .col(string_uniq(Business::Alias))
                    .col(string_len(Business::CurrencyCode, 3).default("EUR"))
                    .col(string_len(Business::BusinessType, 16).default("restaurant"))
                    .col(timestamp(Business::CreatedAt))
                    .col(timestamp(Business::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_BUSINESS_USER_ID)
                            .from(Business::Table, Business::UserId)
                            .to(AppUser::Table, AppUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BUSINESS_USER_ID)
                    .table(Business::Table)
                    .col(Business::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BUSINESS_USER_ID)
                    .table(Business::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Business::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Business {
    Table,
    Id,
    UserId,
    Name,
    Address,
    Phone,
    Email,
    Alias,
    CurrencyCode,
    BusinessType,
    CreatedAt,
    UpdatedAt,
}
