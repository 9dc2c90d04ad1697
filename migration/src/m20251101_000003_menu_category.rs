use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000002_business::Business;

static IDX_MENU_CATEGORY_BUSINESS_ID: &str = "idx_menu_category_business_id";
static FK_MENU_CATEGORY_BUSINESS_ID: &str = "fk_menu_category_business_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MenuCategory::Table)
                    .if_not_exists()
                    .col(pk_auto(MenuCategory::Id))
                    .col(integer(MenuCategory::BusinessId))
                    .col(string(MenuCategory::Name))
                    .col(text_null(MenuCategory::Description))
                    .col(integer(MenuCategory::Order).default(0))
                    .col(timestamp(MenuCategory::CreatedAt))
                    .col(timestamp(MenuCategory::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_MENU_CATEGORY_BUSINESS_ID)
                            .from(MenuCategory::Table, MenuCategory::BusinessId)
                            .to(Business::Table, Business::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MENU_CATEGORY_BUSINESS_ID)
                    .table(MenuCategory::Table)
                    .col(MenuCategory::BusinessId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MENU_CATEGORY_BUSINESS_ID)
                    .table(MenuCategory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MenuCategory::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum MenuCategory {
    Table,
    Id,
    BusinessId,
    Name,
    Description,
    Order,
    CreatedAt,
    UpdatedAt,
}
