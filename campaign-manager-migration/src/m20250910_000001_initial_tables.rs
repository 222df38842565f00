use sea_orm_migration::{prelude::*, sea_orm::DatabaseBackend};

#[derive(DeriveMigrationName)]
pub struct Migration;

// Pre-chain schema as the application bootstrapped it: tables still carry
// their original names (users, customers, sub_customers, info_table) that
// later revisions rename.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();

        // SQLite stores SQLAlchemy enums as plain varchar, so the type only
        // exists on postgres.
        if backend == DatabaseBackend::Postgres {
            crate::from_sql(
                manager,
                r#"
                CREATE TYPE assettype AS ENUM (
                    'social_media',
                    'analytics',
                    'advertising',
                    'search_console',
                    'email_marketing',
                    'crm',
                    'ecommerce'
                );
                "#,
            )
            .await?;
        }

        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Users::PasswordHash).string_len(255))
                    .col(
                        ColumnDef::new(Users::Role)
                            .string_len(50)
                            .not_null()
                            .default("campaigner"),
                    )
                    .col(ColumnDef::new(Users::PrimaryCustomerId).integer())
                    .col(ColumnDef::new(Users::AdditionalCustomerIds).json())
                    .col(
                        ColumnDef::new(Users::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Users::CreatedAt).date_time())
                    .col(ColumnDef::new(Users::UpdatedAt).date_time())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Customers::Table)
                    .col(
                        ColumnDef::new(Customers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Customers::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Customers::PrimaryContactUserId).integer())
                    .col(ColumnDef::new(Customers::CreatedAt).date_time())
                    .col(ColumnDef::new(Customers::UpdatedAt).date_time())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SubCustomers::Table)
                    .col(
                        ColumnDef::new(SubCustomers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SubCustomers::CustomerId).integer().not_null())
                    .col(ColumnDef::new(SubCustomers::Name).string_len(255).not_null())
                    .col(ColumnDef::new(SubCustomers::LoginEmail).string_len(255))
                    .col(ColumnDef::new(SubCustomers::OpeningHours).string_len(500))
                    .col(ColumnDef::new(SubCustomers::CreatedAt).date_time())
                    .col(ColumnDef::new(SubCustomers::UpdatedAt).date_time())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sub_customers_customer_id")
                            .from(SubCustomers::Table, SubCustomers::CustomerId)
                            .to(Customers::Table, Customers::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(InfoTable::Table)
                    .col(
                        ColumnDef::new(InfoTable::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(InfoTable::SubclientId).integer().not_null())
                    .col(ColumnDef::new(InfoTable::CustomerId).integer())
                    .col(ColumnDef::new(InfoTable::UserId).integer())
                    .col(ColumnDef::new(InfoTable::BusinessInfo).text())
                    .col(ColumnDef::new(InfoTable::CreatedAt).date_time())
                    .col(ColumnDef::new(InfoTable::UpdatedAt).date_time())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_info_table_subclient_id")
                            .from(InfoTable::Table, InfoTable::SubclientId)
                            .to(SubCustomers::Table, SubCustomers::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserSessions::Table)
                    .col(
                        ColumnDef::new(UserSessions::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserSessions::UserId).integer().not_null())
                    .col(
                        ColumnDef::new(UserSessions::SessionToken)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(UserSessions::ExpiresAt).date_time())
                    .col(ColumnDef::new(UserSessions::CreatedAt).date_time())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_sessions_user_id")
                            .from(UserSessions::Table, UserSessions::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AgentConfigs::Table)
                    .col(
                        ColumnDef::new(AgentConfigs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AgentConfigs::Name).string_len(255).not_null())
                    .col(ColumnDef::new(AgentConfigs::Config).json())
                    .col(
                        ColumnDef::new(AgentConfigs::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(AgentConfigs::CreatedAt).date_time())
                    .col(ColumnDef::new(AgentConfigs::UpdatedAt).date_time())
                    .to_owned(),
            )
            .await?;

        let mut asset_type = ColumnDef::new(DigitalAssets::AssetType);
        match backend {
            DatabaseBackend::Postgres => asset_type.custom(Alias::new("assettype")),
            _ => asset_type.string_len(50),
        };
        asset_type.not_null();

        manager
            .create_table(
                Table::create()
                    .table(DigitalAssets::Table)
                    .col(
                        ColumnDef::new(DigitalAssets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DigitalAssets::SubclientId)
                            .integer()
                            .not_null(),
                    )
                    .col(&mut asset_type)
                    .col(
                        ColumnDef::new(DigitalAssets::Provider)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(DigitalAssets::Name).string_len(255).not_null())
                    .col(ColumnDef::new(DigitalAssets::Handle).string_len(100))
                    .col(ColumnDef::new(DigitalAssets::Url).string_len(500))
                    .col(
                        ColumnDef::new(DigitalAssets::ExternalId)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(DigitalAssets::Meta).json())
                    .col(
                        ColumnDef::new(DigitalAssets::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(DigitalAssets::CreatedAt).date_time())
                    .col(ColumnDef::new(DigitalAssets::UpdatedAt).date_time())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_digital_assets_subclient_id")
                            .from(DigitalAssets::Table, DigitalAssets::SubclientId)
                            .to(SubCustomers::Table, SubCustomers::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Connections::Table)
                    .col(
                        ColumnDef::new(Connections::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Connections::DigitalAssetId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Connections::UserId).integer().not_null())
                    .col(
                        ColumnDef::new(Connections::AuthType)
                            .string_len(20)
                            .not_null()
                            .default("oauth2"),
                    )
                    .col(ColumnDef::new(Connections::AccountEmail).string_len(255))
                    .col(ColumnDef::new(Connections::Scopes).json())
                    .col(ColumnDef::new(Connections::AccessTokenEnc).binary())
                    .col(ColumnDef::new(Connections::RefreshTokenEnc).binary())
                    .col(ColumnDef::new(Connections::TokenHash).string_len(64))
                    .col(ColumnDef::new(Connections::ExpiresAt).date_time())
                    .col(
                        ColumnDef::new(Connections::Revoked)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Connections::RotatedAt).date_time())
                    .col(ColumnDef::new(Connections::LastUsedAt).date_time())
                    .col(ColumnDef::new(Connections::CreatedAt).date_time())
                    .col(ColumnDef::new(Connections::UpdatedAt).date_time())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_connections_digital_asset_id")
                            .from(Connections::Table, Connections::DigitalAssetId)
                            .to(DigitalAssets::Table, DigitalAssets::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_connections_user_id")
                            .from(Connections::Table, Connections::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CampaignKpis::Table)
                    .col(
                        ColumnDef::new(CampaignKpis::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CampaignKpis::SubcustomerId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CampaignKpis::CampaignId).integer())
                    .col(ColumnDef::new(CampaignKpis::CampaignName).string_len(255))
                    .col(ColumnDef::new(CampaignKpis::KpiName).string_len(255).not_null())
                    .col(ColumnDef::new(CampaignKpis::KpiValue).double())
                    .col(ColumnDef::new(CampaignKpis::GoalValue).double())
                    .col(ColumnDef::new(CampaignKpis::CreatedAt).date_time())
                    .col(ColumnDef::new(CampaignKpis::UpdatedAt).date_time())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_campaign_kpis_subcustomer_id")
                            .from(CampaignKpis::Table, CampaignKpis::SubcustomerId)
                            .to(SubCustomers::Table, SubCustomers::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AudienceTable::Table)
                    .col(
                        ColumnDef::new(AudienceTable::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AudienceTable::SubclientId).integer())
                    .col(ColumnDef::new(AudienceTable::Name).string_len(255).not_null())
                    .col(ColumnDef::new(AudienceTable::Description).string_len(500))
                    .col(
                        ColumnDef::new(AudienceTable::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(AudienceTable::CreatedAt).date_time())
                    .col(ColumnDef::new(AudienceTable::UpdatedAt).date_time())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CustomerLogs::Table)
                    .col(
                        ColumnDef::new(CustomerLogs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CustomerLogs::CampaignerId).integer())
                    .col(ColumnDef::new(CustomerLogs::Action).string_len(255).not_null())
                    .col(ColumnDef::new(CustomerLogs::Detail).text())
                    .col(ColumnDef::new(CustomerLogs::CreatedAt).date_time())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in [
            Alias::new("customer_logs"),
            Alias::new("audience_table"),
            Alias::new("campaign_kpis"),
            Alias::new("connections"),
            Alias::new("digital_assets"),
            Alias::new("agent_configs"),
            Alias::new("user_sessions"),
            Alias::new("info_table"),
            Alias::new("sub_customers"),
            Alias::new("customers"),
            Alias::new("users"),
        ] {
            manager
                .drop_table(Table::drop().table(table).to_owned())
                .await?;
        }

        if manager.get_database_backend() == DatabaseBackend::Postgres {
            crate::from_sql(manager, "DROP TYPE assettype;").await?;
        }

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Email,
    Name,
    PasswordHash,
    Role,
    PrimaryCustomerId,
    AdditionalCustomerIds,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Customers {
    Table,
    Id,
    Name,
    PrimaryContactUserId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SubCustomers {
    Table,
    Id,
    CustomerId,
    Name,
    LoginEmail,
    OpeningHours,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum InfoTable {
    Table,
    Id,
    SubclientId,
    CustomerId,
    UserId,
    BusinessInfo,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum UserSessions {
    Table,
    Id,
    UserId,
    SessionToken,
    ExpiresAt,
    CreatedAt,
}

#[derive(DeriveIden)]
enum AgentConfigs {
    Table,
    Id,
    Name,
    Config,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum DigitalAssets {
    Table,
    Id,
    SubclientId,
    AssetType,
    Provider,
    Name,
    Handle,
    Url,
    ExternalId,
    Meta,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Connections {
    Table,
    Id,
    DigitalAssetId,
    UserId,
    AuthType,
    AccountEmail,
    Scopes,
    AccessTokenEnc,
    RefreshTokenEnc,
    TokenHash,
    ExpiresAt,
    Revoked,
    RotatedAt,
    LastUsedAt,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CampaignKpis {
    Table,
    Id,
    SubcustomerId,
    CampaignId,
    CampaignName,
    KpiName,
    KpiValue,
    GoalValue,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum AudienceTable {
    Table,
    Id,
    SubclientId,
    Name,
    Description,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CustomerLogs {
    Table,
    Id,
    CampaignerId,
    Action,
    Detail,
    CreatedAt,
}
