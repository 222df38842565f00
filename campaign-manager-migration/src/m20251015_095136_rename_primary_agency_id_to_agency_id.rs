use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// Simplifies the campaigner/agency relationship to a single agency per
// campaigner. Both steps check the live schema first so a partially applied
// run can be repeated.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if manager.has_column("campaigners", "primary_agency_id").await? {
            manager
                .alter_table(
                    Table::alter()
                        .table(Campaigners::Table)
                        .rename_column(Campaigners::PrimaryAgencyId, Campaigners::AgencyId)
                        .to_owned(),
                )
                .await?;
        }

        if manager
            .has_column("campaigners", "additional_agency_ids")
            .await?
        {
            manager
                .alter_table(
                    Table::alter()
                        .table(Campaigners::Table)
                        .drop_column(Campaigners::AdditionalAgencyIds)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if !manager
            .has_column("campaigners", "additional_agency_ids")
            .await?
        {
            manager
                .alter_table(
                    Table::alter()
                        .table(Campaigners::Table)
                        .add_column(ColumnDef::new(Campaigners::AdditionalAgencyIds).json())
                        .to_owned(),
                )
                .await?;
        }

        if manager.has_column("campaigners", "agency_id").await? {
            manager
                .alter_table(
                    Table::alter()
                        .table(Campaigners::Table)
                        .rename_column(Campaigners::AgencyId, Campaigners::PrimaryAgencyId)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Campaigners {
    Table,
    PrimaryAgencyId,
    AgencyId,
    AdditionalAgencyIds,
}
