use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000003_menu_category::MenuCategory;

static IDX_MENU_ITEM_CATEGORY_ID: &str = "idx_menu_item_category_id";
static FK_MENU_ITEM_CATEGORY_ID: &str = "fk_menu_item_category_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MenuItem::Table)
                    .if_not_exists()
                    .col(pk_auto(MenuItem::Id))
                    .col(integer(MenuItem::CategoryId))
                    .col(string(MenuItem::Name))
                    .col(text_null(MenuItem::Description))
                    .col(double(MenuItem::Price))
                    .col(integer(MenuItem::Order).default(0))
                    .col(timestamp(MenuItem::CreatedAt))
                    .col(timestamp(MenuItem::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_MENU_ITEM_CATEGORY_ID)
                            .from(MenuItem::Table, MenuItem::CategoryId)
                            .to(MenuCategory::Table, MenuCategory::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MENU_ITEM_CATEGORY_ID)
                    .table(MenuItem::Table)
                    .col(MenuItem::CategoryId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MENU_ITEM_CATEGORY_ID)
                    .table(MenuItem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MenuItem::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum MenuItem {
    Table,
    Id,
    CategoryId,
    Name,
    Description,
    Price,
    Order,
    CreatedAt,
    UpdatedAt,
}
