use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// One asset per customer per external platform id per asset type. Duplicate
// rows accumulated before the constraint existed: connections pointing at a
// duplicate are repointed to the survivor (MIN id), the rest are deleted,
// then the uniqueness is enforced.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        crate::from_sql(
            manager,
            r#"
            UPDATE connections
            SET digital_asset_id = (
                SELECT MIN(id)
                FROM digital_assets da2
                WHERE da2.customer_id = da.customer_id
                  AND da2.external_id = da.external_id
                  AND da2.asset_type = da.asset_type
            )
            FROM digital_assets da
            WHERE connections.digital_asset_id = da.id
              AND da.id NOT IN (
                  SELECT MIN(id)
                  FROM digital_assets
                  GROUP BY customer_id, external_id, asset_type
              );
            DELETE FROM digital_assets
            WHERE id NOT IN (
                SELECT MIN(id)
                FROM digital_assets
                GROUP BY customer_id, external_id, asset_type
            );
            "#,
        )
        .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_digital_asset_customer_external_type")
                    .table(DigitalAssets::Table)
                    .col(DigitalAssets::CustomerId)
                    .col(DigitalAssets::ExternalId)
                    .col(DigitalAssets::AssetType)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("uq_digital_asset_customer_external_type")
                    .table(DigitalAssets::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum DigitalAssets {
    Table,
    CustomerId,
    ExternalId,
    AssetType,
}
