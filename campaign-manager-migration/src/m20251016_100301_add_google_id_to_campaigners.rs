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
                    .add_column(ColumnDef::new(Campaigners::GoogleId).string_len(255))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_campaigners_google_id")
                    .table(Campaigners::Table)
                    .col(Campaigners::GoogleId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("ix_campaigners_google_id")
                    .table(Campaigners::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Campaigners::Table)
                    .drop_column(Campaigners::GoogleId)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Campaigners {
    Table,
    GoogleId,
}
