use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(KpiGoals::Table)
                    .rename_column(KpiGoals::AdHeadline, KpiGoals::AdNameHeadline)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(KpiGoals::Table)
                    .rename_column(KpiGoals::AdNameHeadline, KpiGoals::AdHeadline)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum KpiGoals {
    Table,
    AdHeadline,
    AdNameHeadline,
}
