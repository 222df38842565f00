use sea_orm_migration::{prelude::*, sea_orm::DatabaseBackend};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Nullable: pre-existing logs have no customer yet.
        manager
            .alter_table(
                Table::alter()
                    .table(CustomerLogs::Table)
                    .add_column(ColumnDef::new(CustomerLogs::CustomerId).integer())
                    .to_owned(),
            )
            .await?;

        if manager.get_database_backend() == DatabaseBackend::Postgres {
            manager
                .create_foreign_key(
                    ForeignKey::create()
                        .name("fk_customer_logs_customer_id")
                        .from(CustomerLogs::Table, CustomerLogs::CustomerId)
                        .to(Customers::Table, Customers::Id)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .create_index(
                Index::create()
                    .name("ix_customer_logs_customer_id")
                    .table(CustomerLogs::Table)
                    .col(CustomerLogs::CustomerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("ix_customer_logs_customer_id")
                    .table(CustomerLogs::Table)
                    .to_owned(),
            )
            .await?;

        if manager.get_database_backend() == DatabaseBackend::Postgres {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name("fk_customer_logs_customer_id")
                        .table(CustomerLogs::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .alter_table(
                Table::alter()
                    .table(CustomerLogs::Table)
                    .drop_column(CustomerLogs::CustomerId)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum CustomerLogs {
    Table,
    CustomerId,
}

#[derive(DeriveIden)]
enum Customers {
    Table,
    Id,
}
