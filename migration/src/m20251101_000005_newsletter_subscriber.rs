use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NewsletterSubscriber::Table)
                    .if_not_exists()
                    .col(pk_auto(NewsletterSubscriber::Id))
                    .col(string_uniq(NewsletterSubscriber::Email))
                    .col(timestamp(NewsletterSubscriber::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NewsletterSubscriber::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum NewsletterSubscriber {
    Table,
    Id,
    Email,
    CreatedAt,
}
