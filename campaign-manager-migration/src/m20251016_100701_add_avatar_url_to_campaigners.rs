use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Campaigners::Table)
                    .add_column(ColumnDef::new(Campaigners::AvatarUrl).string_len(500))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Campaigners::Table)
                    .drop_column(Campaigners::AvatarUrl)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Campaigners {
    Table,
    AvatarUrl,
}
