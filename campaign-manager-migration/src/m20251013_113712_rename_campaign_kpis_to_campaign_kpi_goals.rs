use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .rename_table(
                Table::rename()
                    .table(CampaignKpis::Table, CampaignKpiGoals::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(CampaignKpiGoals::Table)
                    .rename_column(CampaignKpiGoals::SubcustomerId, CampaignKpiGoals::CustomerId)
                    .to_owned(),
            )
            .await?;

        // One ALTER per column; sqlite only accepts a single ADD COLUMN per
        // statement.
        let mut columns = [
            ColumnDef::new(CampaignKpiGoals::CampaignStatus)
                .string_len(50)
                .to_owned(),
            ColumnDef::new(CampaignKpiGoals::AdScore).integer().to_owned(),
            ColumnDef::new(CampaignKpiGoals::AdGroupId).integer().to_owned(),
            ColumnDef::new(CampaignKpiGoals::AdGroupName)
                .string_len(255)
                .to_owned(),
            ColumnDef::new(CampaignKpiGoals::AdGroupStatus)
                .string_len(50)
                .to_owned(),
            ColumnDef::new(CampaignKpiGoals::AdId).integer().to_owned(),
            ColumnDef::new(CampaignKpiGoals::AdName).string_len(255).to_owned(),
            ColumnDef::new(CampaignKpiGoals::AdStatus).string_len(50).to_owned(),
            ColumnDef::new(CampaignKpiGoals::AdHeadline)
                .string_len(500)
                .to_owned(),
        ];
        for column in &mut columns {
            manager
                .alter_table(
                    Table::alter()
                        .table(CampaignKpiGoals::Table)
                        .add_column(column)
                        .to_owned(),
                )
                .await?;
        }

        // Pre-existing rows get the placeholder statuses the dashboard showed
        // before these fields were tracked.
        crate::from_sql(
            manager,
            r#"
            UPDATE campaign_kpi_goals SET
                campaign_status = 'ACTIVE/PAUSED',
                ad_score = 99,
                ad_group_status = 'ACTIVE/PAUSED',
                ad_status = 'ACTIVE/PAUSED'
            WHERE campaign_status IS NULL;
            "#,
        )
        .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for column in [
            CampaignKpiGoals::AdHeadline,
            CampaignKpiGoals::AdStatus,
            CampaignKpiGoals::AdName,
            CampaignKpiGoals::AdId,
            CampaignKpiGoals::AdGroupStatus,
            CampaignKpiGoals::AdGroupName,
            CampaignKpiGoals::AdGroupId,
            CampaignKpiGoals::AdScore,
            CampaignKpiGoals::CampaignStatus,
        ] {
            manager
                .alter_table(
                    Table::alter()
                        .table(CampaignKpiGoals::Table)
                        .drop_column(column)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .alter_table(
                Table::alter()
                    .table(CampaignKpiGoals::Table)
                    .rename_column(CampaignKpiGoals::CustomerId, CampaignKpiGoals::SubcustomerId)
                    .to_owned(),
            )
            .await?;

        manager
            .rename_table(
                Table::rename()
                    .table(CampaignKpiGoals::Table, CampaignKpis::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum CampaignKpis {
    Table,
}

#[derive(DeriveIden)]
enum CampaignKpiGoals {
    Table,
    SubcustomerId,
    CustomerId,
    CampaignStatus,
    AdScore,
    AdGroupId,
    AdGroupName,
    AdGroupStatus,
    AdId,
    AdName,
    AdStatus,
    AdHeadline,
}
