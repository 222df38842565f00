use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(DigitalAssets::Table)
                    .rename_column(DigitalAssets::SubclientId, DigitalAssets::CustomerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(DigitalAssets::Table)
                    .rename_column(DigitalAssets::CustomerId, DigitalAssets::SubclientId)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum DigitalAssets {
    Table,
    SubclientId,
    CustomerId,
}
