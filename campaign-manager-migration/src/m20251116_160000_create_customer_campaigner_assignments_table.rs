use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// Junction table: several campaigners can work one customer. Replaces the
// single customers.assigned_campaigner_id link.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Assignments::Table)
                    .col(
                        ColumnDef::new(Assignments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Assignments::CustomerId).integer().not_null())
                    .col(ColumnDef::new(Assignments::CampaignerId).integer().not_null())
                    .col(
                        ColumnDef::new(Assignments::Role)
                            .string_len(50)
                            .not_null()
                            .default("assigned"),
                    )
                    .col(
                        ColumnDef::new(Assignments::IsPrimary)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Assignments::AssignedAt)
                            .date_time()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Assignments::AssignedByCampaignerId).integer())
                    .col(
                        ColumnDef::new(Assignments::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Assignments::UnassignedAt).date_time())
                    .col(ColumnDef::new(Assignments::UnassignedByCampaignerId).integer())
                    .col(
                        ColumnDef::new(Assignments::CreatedAt)
                            .date_time()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Assignments::UpdatedAt)
                            .date_time()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cca_customer_id")
                            .from(Assignments::Table, Assignments::CustomerId)
                            .to(Customers::Table, Customers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cca_campaigner_id")
                            .from(Assignments::Table, Assignments::CampaignerId)
                            .to(Campaigners::Table, Campaigners::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cca_assigned_by_campaigner_id")
                            .from(Assignments::Table, Assignments::AssignedByCampaignerId)
                            .to(Campaigners::Table, Campaigners::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cca_unassigned_by_campaigner_id")
                            .from(Assignments::Table, Assignments::UnassignedByCampaignerId)
                            .to(Campaigners::Table, Campaigners::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .index(
                        Index::create()
                            .name("unique_customer_campaigner_active")
                            .col(Assignments::CustomerId)
                            .col(Assignments::CampaignerId)
                            .col(Assignments::IsActive)
                            .unique(),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, columns) in [
            ("idx_cca_customer_id", vec![Assignments::CustomerId]),
            ("idx_cca_campaigner_id", vec![Assignments::CampaignerId]),
            ("idx_cca_is_active", vec![Assignments::IsActive]),
            ("idx_cca_is_primary", vec![Assignments::IsPrimary]),
            (
                "idx_cca_customer_active",
                vec![Assignments::CustomerId, Assignments::IsActive],
            ),
        ] {
            let mut index = Index::create()
                .name(name)
                .table(Assignments::Table)
                .to_owned();
            for column in columns {
                index.col(column);
            }
            manager.create_index(index).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            "idx_cca_customer_active",
            "idx_cca_is_primary",
            "idx_cca_is_active",
            "idx_cca_campaigner_id",
            "idx_cca_customer_id",
        ] {
            manager
                .drop_index(Index::drop().name(name).table(Assignments::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Assignments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Assignments {
    #[sea_orm(iden = "customer_campaigner_assignments")]
    Table,
    Id,
    CustomerId,
    CampaignerId,
    Role,
    IsPrimary,
    AssignedAt,
    AssignedByCampaignerId,
    IsActive,
    UnassignedAt,
    UnassignedByCampaignerId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Customers {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Campaigners {
    Table,
    Id,
}
