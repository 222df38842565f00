use sea_orm_migration::{prelude::*, sea_orm::DatabaseBackend};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // IF NOT EXISTS keeps a partial re-run from failing.
        if manager.get_database_backend() == DatabaseBackend::Postgres {
            crate::from_sql(
                manager,
                "ALTER TYPE assettype ADD VALUE IF NOT EXISTS 'facebook_ads';",
            )
            .await?;
        }
        Ok(())
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        // Irreversible, same as the google_ads value above.
        Ok(())
    }
}
