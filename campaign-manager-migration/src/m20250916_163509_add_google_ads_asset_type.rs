use sea_orm_migration::{prelude::*, sea_orm::DatabaseBackend};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The enum type only exists on postgres; sqlite stores asset_type as
        // varchar and accepts any value.
        if manager.get_database_backend() == DatabaseBackend::Postgres {
            crate::from_sql(manager, "ALTER TYPE assettype ADD VALUE 'GOOGLE_ADS';").await?;
        }
        Ok(())
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        // Postgres cannot remove an enum value without rebuilding the type
        // and every column referencing it. The value stays in place.
        Ok(())
    }
}
