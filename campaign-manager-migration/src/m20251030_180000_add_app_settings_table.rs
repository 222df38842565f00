use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AppSettings::Table)
                    .col(
                        ColumnDef::new(AppSettings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AppSettings::Key)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(AppSettings::Value).text().not_null())
                    .col(ColumnDef::new(AppSettings::ValueType).string_len(50).not_null())
                    .col(ColumnDef::new(AppSettings::Category).string_len(100).not_null())
                    .col(ColumnDef::new(AppSettings::Description).string_len(500))
                    .col(
                        ColumnDef::new(AppSettings::IsSecret)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(AppSettings::IsEditable)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(AppSettings::RequiresRestart)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(AppSettings::UpdatedById).integer())
                    .col(ColumnDef::new(AppSettings::CreatedAt).date_time())
                    .col(ColumnDef::new(AppSettings::UpdatedAt).date_time())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_app_settings_updated_by_id")
                            .from(AppSettings::Table, AppSettings::UpdatedById)
                            .to(Campaigners::Table, Campaigners::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_app_settings_key")
                    .table(AppSettings::Table)
                    .col(AppSettings::Key)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("ix_app_settings_key")
                    .table(AppSettings::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AppSettings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AppSettings {
    Table,
    Id,
    Key,
    Value,
    ValueType,
    Category,
    Description,
    IsSecret,
    IsEditable,
    RequiresRestart,
    UpdatedById,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Campaigners {
    Table,
    Id,
}
