use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// Default KPI catalog, one row per KPI per campaign objective.
const SEED: [(&str, &str, &str, &str, f64, &str); 16] = [
    ("Sales & Profitability", "CPA (Cost Per Acquisition)", "Primary", "<", 133.0, "₪"),
    ("Sales & Profitability", "CVR (Conversion Rate)", "Secondary", ">", 3.0, "%"),
    ("Sales & Profitability", "Convval (Conversion Value)", "Secondary", ">", 300000.0, "₪"),
    ("Sales & Profitability", "CTR (Click-Through Rate)", "Secondary", ">", 4.0, "%"),
    ("Increasing Traffic", "CPC (Cost Per Click)", "Primary", "<", 4.0, "₪"),
    ("Increasing Traffic", "Clicks", "Secondary", ">", 5000.0, "Count"),
    ("Increasing Traffic", "Impressions", "Secondary", ">", 125000.0, "Count"),
    ("Increasing Traffic", "CTR (Click-Through Rate)", "Secondary", ">", 4.0, "%"),
    ("Increasing Awareness", "CPM (Cost Per Mille)", "Primary", "<", 30.0, "₪"),
    ("Increasing Awareness", "Impressions", "Secondary", ">", 125000.0, "Count"),
    ("Increasing Awareness", "Reach", "Secondary", ">", 41667.0, "Count"),
    ("Increasing Awareness", "Frequency", "Secondary", "<", 2.5, "Count"),
    ("Lead Generation", "CPL (Cost Per Lead)", "Primary", "<", 13.3, "₪"),
    ("Lead Generation", "Leads (Total)", "Secondary", "<", 1500.0, "Count"),
    ("Lead Generation", "CVR (Conversion Rate)", "Secondary", "<", 20.0, "%"),
    ("Lead Generation", "CTR (Click-Through Rate)", "Secondary", "<", 4.0, "%"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(KpiSettings::Table)
                    .col(
                        ColumnDef::new(KpiSettings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(KpiSettings::CampaignObjective)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(KpiSettings::KpiName).string_len(255).not_null())
                    .col(ColumnDef::new(KpiSettings::KpiType).string_len(20).not_null())
                    .col(ColumnDef::new(KpiSettings::Direction).string_len(10).not_null())
                    .col(ColumnDef::new(KpiSettings::DefaultValue).double().not_null())
                    .col(ColumnDef::new(KpiSettings::Unit).string_len(50).not_null())
                    .col(ColumnDef::new(KpiSettings::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(KpiSettings::UpdatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        let mut insert = Query::insert()
            .into_table(KpiSettings::Table)
            .columns([
                KpiSettings::CampaignObjective,
                KpiSettings::KpiName,
                KpiSettings::KpiType,
                KpiSettings::Direction,
                KpiSettings::DefaultValue,
                KpiSettings::Unit,
                KpiSettings::CreatedAt,
                KpiSettings::UpdatedAt,
            ])
            .to_owned();
        for (objective, kpi_name, kpi_type, direction, default_value, unit) in SEED {
            insert.values_panic([
                objective.into(),
                kpi_name.into(),
                kpi_type.into(),
                direction.into(),
                default_value.into(),
                unit.into(),
                Expr::current_timestamp().into(),
                Expr::current_timestamp().into(),
            ]);
        }
        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(KpiSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum KpiSettings {
    Table,
    Id,
    CampaignObjective,
    KpiName,
    KpiType,
    Direction,
    DefaultValue,
    Unit,
    CreatedAt,
    UpdatedAt,
}
