pub use sea_orm_migration::prelude::*;

mod m20251101_000001_app_user;
mod m20251101_000002_business;
mod m20251101_000003_menu_category;
mod m20251101_000004_menu_item;
mod m20251101_000005_newsletter_subscriber;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_app_user::Migration),
            Box::new(m20251101_000002_business::Migration),
            Box::new(m20251101_000003_menu_category::Migration),
            Box::new(m20251101_000004_menu_item::Migration),
            Box::new(m20251101_000005_newsletter_subscriber::Migration),
        ]
    }
}
