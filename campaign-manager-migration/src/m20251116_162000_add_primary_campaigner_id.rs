use sea_orm_migration::{prelude::*, sea_orm::DatabaseBackend};

#[derive(DeriveMigrationName)]
pub struct Migration;

// Denormalized copy of the primary assignment for fast lookups, synced from
// customer_campaigner_assignments.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Customers::Table)
                    .add_column(ColumnDef::new(Customers::PrimaryCampaignerId).integer())
                    .to_owned(),
            )
            .await?;

        if manager.get_database_backend() == DatabaseBackend::Postgres {
            manager
                .create_foreign_key(
                    ForeignKey::create()
                        .name("fk_customers_primary_campaigner_id")
                        .from(Customers::Table, Customers::PrimaryCampaignerId)
                        .to(Campaigners::Table, Campaigners::Id)
                        .on_delete(ForeignKeyAction::SetNull)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .create_index(
                Index::create()
                    .name("idx_customers_primary_campaigner_id")
                    .table(Customers::Table)
                    .col(Customers::PrimaryCampaignerId)
                    .to_owned(),
            )
            .await?;

        crate::from_sql(
            manager,
            r#"
            UPDATE customers
            SET primary_campaigner_id = cca.campaigner_id
            FROM customer_campaigner_assignments cca
            WHERE customers.id = cca.customer_id
              AND cca.is_primary = TRUE
              AND cca.is_active = TRUE;
            "#,
        )
        .await?;

        if manager.get_database_backend() == DatabaseBackend::Postgres {
            crate::from_statements(
                manager,
                &[
                    "COMMENT ON COLUMN customers.primary_campaigner_id IS \
                     'Denormalized primary campaigner for fast lookups. Synced from customer_campaigner_assignments.'",
                    "COMMENT ON COLUMN customers.assigned_campaigner_id IS \
                     'DEPRECATED: Use customer_campaigner_assignments table instead. Kept for backward compatibility.'",
                ],
            )
            .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_customers_primary_campaigner_id")
                    .table(Customers::Table)
                    .to_owned(),
            )
            .await?;

        if manager.get_database_backend() == DatabaseBackend::Postgres {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name("fk_customers_primary_campaigner_id")
                        .table(Customers::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .alter_table(
                Table::alter()
                    .table(Customers::Table)
                    .drop_column(Customers::PrimaryCampaignerId)
                    .to_owned(),
            )
            .await?;

        if manager.get_database_backend() == DatabaseBackend::Postgres {
            crate::from_sql(
                manager,
                "COMMENT ON COLUMN customers.assigned_campaigner_id IS \
                 'Campaigner assigned to this customer';",
            )
            .await?;
        }

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Customers {
    Table,
    PrimaryCampaignerId,
}

#[derive(DeriveIden)]
enum Campaigners {
    Table,
    Id,
}
