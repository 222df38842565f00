use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// users -> campaigners (agency workers), customers -> agencies,
// sub_customers -> customers (agency clients), info_table -> client_info,
// user_sessions -> campaigner_sessions.
const RENAMES: [(&str, &str); 5] = [
    ("users", "campaigners"),
    ("customers", "agencies"),
    ("sub_customers", "customers"),
    ("info_table", "client_info"),
    ("user_sessions", "campaigner_sessions"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (from, to) in RENAMES {
            manager
                .rename_table(
                    Table::rename()
                        .table(Alias::new(from), Alias::new(to))
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (from, to) in RENAMES.iter().rev() {
            manager
                .rename_table(
                    Table::rename()
                        .table(Alias::new(*to), Alias::new(*from))
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }
}
