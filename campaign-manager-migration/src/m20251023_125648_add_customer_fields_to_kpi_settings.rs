use sea_orm_migration::{prelude::*, sea_orm::DatabaseBackend};

#[derive(DeriveMigrationName)]
pub struct Migration;

// Turns the admin-only KPI catalog into per-customer settings: every active
// customer with an assigned campaigner gets a copy of each default row under
// a "<agency>_<campaigner>_<customer>" composite id, then the admin-only
// originals are removed.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(KpiSettings::Table)
                    .add_column(ColumnDef::new(KpiSettings::CompositeId).string_len(100))
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(KpiSettings::Table)
                    .add_column(ColumnDef::new(KpiSettings::CustomerId).integer())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_kpi_settings_composite_id")
                    .table(KpiSettings::Table)
                    .col(KpiSettings::CompositeId)
                    .to_owned(),
            )
            .await?;

        if manager.get_database_backend() == DatabaseBackend::Postgres {
            manager
                .create_foreign_key(
                    ForeignKey::create()
                        .name("fk_kpi_settings_customer_id")
                        .from(KpiSettings::Table, KpiSettings::CustomerId)
                        .to(Customers::Table, Customers::Id)
                        .to_owned(),
                )
                .await?;
        }

        crate::from_sql(
            manager,
            r#"
            INSERT INTO kpi_settings (
                composite_id, customer_id, campaign_objective, kpi_name, kpi_type,
                direction, default_value, unit, created_at, updated_at
            )
            SELECT
                CAST(c.agency_id AS TEXT) || '_'
                    || CAST(c.assigned_campaigner_id AS TEXT) || '_'
                    || CAST(c.id AS TEXT),
                c.id, s.campaign_objective, s.kpi_name, s.kpi_type,
                s.direction, s.default_value, s.unit, s.created_at, s.updated_at
            FROM customers c, kpi_settings s
            WHERE c.is_active = TRUE
              AND c.assigned_campaigner_id IS NOT NULL
              AND s.composite_id IS NULL;
            DELETE FROM kpi_settings WHERE composite_id IS NULL;
            "#,
        )
        .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The admin-only seed rows deleted on the way up are not recreated.
        crate::from_sql(
            manager,
            "DELETE FROM kpi_settings WHERE composite_id IS NOT NULL;",
        )
        .await?;

        if manager.get_database_backend() == DatabaseBackend::Postgres {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name("fk_kpi_settings_customer_id")
                        .table(KpiSettings::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_index(
                Index::drop()
                    .name("ix_kpi_settings_composite_id")
                    .table(KpiSettings::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(KpiSettings::Table)
                    .drop_column(KpiSettings::CustomerId)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(KpiSettings::Table)
                    .drop_column(KpiSettings::CompositeId)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum KpiSettings {
    Table,
    CompositeId,
    CustomerId,
}

#[derive(DeriveIden)]
enum Customers {
    Table,
    Id,
}
