use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// Inputs to the work-priority score: importance and campaign_health are 1-5
// scales, budget feeds the weighting, last_work_date ages the score.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut columns = [
            ColumnDef::new(Customers::Importance)
                .integer()
                .not_null()
                .default(3)
                .to_owned(),
            ColumnDef::new(Customers::Budget)
                .double()
                .not_null()
                .default(0.0)
                .to_owned(),
            ColumnDef::new(Customers::CampaignHealth)
                .integer()
                .not_null()
                .default(3)
                .to_owned(),
            ColumnDef::new(Customers::LastWorkDate).date_time().to_owned(),
        ];
        for column in &mut columns {
            manager
                .alter_table(
                    Table::alter()
                        .table(Customers::Table)
                        .add_column(column)
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for column in [
            Customers::LastWorkDate,
            Customers::CampaignHealth,
            Customers::Budget,
            Customers::Importance,
        ] {
            manager
                .alter_table(
                    Table::alter()
                        .table(Customers::Table)
                        .drop_column(column)
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Customers {
    Table,
    Importance,
    Budget,
    CampaignHealth,
    LastWorkDate,
}
