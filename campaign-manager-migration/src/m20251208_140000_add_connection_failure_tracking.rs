use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut columns = [
            ColumnDef::new(Connections::LastFailureAt).date_time().to_owned(),
            ColumnDef::new(Connections::FailureCount)
                .integer()
                .not_null()
                .default(0)
                .to_owned(),
            ColumnDef::new(Connections::FailureReason)
                .string_len(255)
                .to_owned(),
        ];
        for column in &mut columns {
            manager
                .alter_table(
                    Table::alter()
                        .table(Connections::Table)
                        .add_column(column)
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for column in [
            Connections::FailureReason,
            Connections::FailureCount,
            Connections::LastFailureAt,
        ] {
            manager
                .alter_table(
                    Table::alter()
                        .table(Connections::Table)
                        .drop_column(column)
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Connections {
    Table,
    LastFailureAt,
    FailureCount,
    FailureReason,
}
