use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// Order matters for client_info: customer_id must move to agency_id before
// subclient_id can take the customer_id name.
const RENAMES: [(&str, &str, &str); 8] = [
    ("campaigners", "primary_customer_id", "primary_agency_id"),
    ("campaigners", "additional_customer_ids", "additional_agency_ids"),
    ("agencies", "primary_contact_user_id", "primary_contact_campaigner_id"),
    ("customers", "customer_id", "agency_id"),
    ("client_info", "customer_id", "agency_id"),
    ("client_info", "subclient_id", "customer_id"),
    ("client_info", "user_id", "campaigner_id"),
    ("campaigner_sessions", "user_id", "campaigner_id"),
];

async fn rename_column(
    manager: &SchemaManager<'_>,
    table: &str,
    from: &str,
    to: &str,
) -> Result<(), DbErr> {
    manager
        .alter_table(
            Table::alter()
                .table(Alias::new(table))
                .rename_column(Alias::new(from), Alias::new(to))
                .to_owned(),
        )
        .await
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (table, from, to) in RENAMES {
            rename_column(manager, table, from, to).await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (table, from, to) in RENAMES.iter().rev() {
            rename_column(manager, table, to, from).await?;
        }
        Ok(())
    }
}
