use sea_orm_migration::{prelude::*, sea_orm::DatabaseBackend};

#[derive(DeriveMigrationName)]
pub struct Migration;

// Columns are added nullable, backfilled, then tightened to NOT NULL. The
// tightening is postgres-only: sqlite has no ALTER COLUMN, and its rows get
// the defaults through the backfill anyway.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut columns = [
            ColumnDef::new(Campaigners::EmailVerified).boolean().to_owned(),
            ColumnDef::new(Campaigners::Locale).string_len(10).to_owned(),
            ColumnDef::new(Campaigners::Timezone).string_len(50).to_owned(),
            ColumnDef::new(Campaigners::LastLoginAt).date_time().to_owned(),
        ];
        for column in &mut columns {
            manager
                .alter_table(
                    Table::alter()
                        .table(Campaigners::Table)
                        .add_column(column)
                        .to_owned(),
                )
                .await?;
        }

        crate::from_sql(
            manager,
            r#"
            UPDATE campaigners SET email_verified = FALSE WHERE email_verified IS NULL;
            UPDATE campaigners SET locale = 'he-IL' WHERE locale IS NULL;
            UPDATE campaigners SET timezone = 'Asia/Jerusalem' WHERE timezone IS NULL;
            "#,
        )
        .await?;

        if manager.get_database_backend() == DatabaseBackend::Postgres {
            crate::from_sql(
                manager,
                r#"
                ALTER TABLE campaigners ALTER COLUMN email_verified SET NOT NULL;
                ALTER TABLE campaigners ALTER COLUMN locale SET NOT NULL;
                ALTER TABLE campaigners ALTER COLUMN timezone SET NOT NULL;
                "#,
            )
            .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for column in [
            Campaigners::LastLoginAt,
            Campaigners::Timezone,
            Campaigners::Locale,
            Campaigners::EmailVerified,
        ] {
            manager
                .alter_table(
                    Table::alter()
                        .table(Campaigners::Table)
                        .drop_column(column)
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
    EmailVerified,
    Locale,
    Timezone,
    LastLoginAt,
}
