use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .rename_table(
                Table::rename()
                    .table(AudienceTable::Table, Audience::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Audience::Table)
                    .drop_column(Audience::Description)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Audience::Table)
                    .drop_column(Audience::IsActive)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Audience::Table)
                    .add_column(
                        ColumnDef::new(Audience::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(Audience::Table)
                    .add_column(ColumnDef::new(Audience::Description).string_len(500))
                    .to_owned(),
            )
            .await?;

        manager
            .rename_table(
                Table::rename()
                    .table(Audience::Table, AudienceTable::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum AudienceTable {
    Table,
}

#[derive(DeriveIden)]
enum Audience {
    Table,
    Description,
    IsActive,
}
