pub use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{Statement, TransactionTrait};

mod m20250910_000001_initial_tables;
mod m20250916_163509_add_google_ads_asset_type;
mod m20251001_081844_add_facebook_ads_asset_type;
mod m20251012_090736_rename_tables_users_to_campaigners;
mod m20251012_100436_rename_columns_to_match_new_table_names;
mod m20251012_111621_rename_connections_user_id_to_campaigner_id;
mod m20251012_112133_rename_digital_assets_subclient_id_to_customer_id;
mod m20251013_110902_add_is_active_to_customers;
mod m20251013_113712_rename_campaign_kpis_to_campaign_kpi_goals;
mod m20251013_114928_rename_campaign_kpi_goals_to_kpi_goals;
mod m20251015_095136_rename_primary_agency_id_to_agency_id;
mod m20251016_100301_add_google_id_to_campaigners;
mod m20251016_100405_add_google_auth_fields_to_campaigners;
mod m20251016_100701_add_avatar_url_to_campaigners;
mod m20251016_103755_add_assigned_campaigner_id_to_customers;
mod m20251019_120201_rename_login_email_to_contact_email;
mod m20251021_142905_rename_ad_headline_to_ad_name_headline;
mod m20251021_152207_add_kpi_settings_table;
mod m20251023_121101_rename_audience_table_and_simplify;
mod m20251023_125648_add_customer_fields_to_kpi_settings;
mod m20251028_144801_add_agent_configs_unique_name;
mod m20251029_124300_add_customer_id_to_customer_logs;
mod m20251029_125212_backfill_customer_id_in_existing_logs;
mod m20251030_180000_add_app_settings_table;
mod m20251116_160000_create_customer_campaigner_assignments_table;
mod m20251116_161000_migrate_existing_campaigner_assignments;
mod m20251116_162000_add_primary_campaigner_id;
mod m20251116_165000_merge_migration_branches;
mod m20251118_170000_add_unique_constraint_digital_assets;
mod m20251127_093000_add_oauth_validation_fields;
mod m20251208_140000_add_connection_failure_tracking;
mod m20251211_120000_add_customer_priority_fields;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250910_000001_initial_tables::Migration),
            Box::new(m20250916_163509_add_google_ads_asset_type::Migration),
            Box::new(m20251001_081844_add_facebook_ads_asset_type::Migration),
            Box::new(m20251012_090736_rename_tables_users_to_campaigners::Migration),
            Box::new(m20251012_100436_rename_columns_to_match_new_table_names::Migration),
            Box::new(m20251012_111621_rename_connections_user_id_to_campaigner_id::Migration),
            Box::new(m20251012_112133_rename_digital_assets_subclient_id_to_customer_id::Migration),
            Box::new(m20251013_110902_add_is_active_to_customers::Migration),
            Box::new(m20251013_113712_rename_campaign_kpis_to_campaign_kpi_goals::Migration),
            Box::new(m20251013_114928_rename_campaign_kpi_goals_to_kpi_goals::Migration),
            Box::new(m20251015_095136_rename_primary_agency_id_to_agency_id::Migration),
            Box::new(m20251016_100301_add_google_id_to_campaigners::Migration),
            Box::new(m20251016_100405_add_google_auth_fields_to_campaigners::Migration),
            Box::new(m20251016_100701_add_avatar_url_to_campaigners::Migration),
            Box::new(m20251016_103755_add_assigned_campaigner_id_to_customers::Migration),
            Box::new(m20251019_120201_rename_login_email_to_contact_email::Migration),
            Box::new(m20251021_142905_rename_ad_headline_to_ad_name_headline::Migration),
            Box::new(m20251021_152207_add_kpi_settings_table::Migration),
            Box::new(m20251023_121101_rename_audience_table_and_simplify::Migration),
            Box::new(m20251023_125648_add_customer_fields_to_kpi_settings::Migration),
            Box::new(m20251028_144801_add_agent_configs_unique_name::Migration),
            Box::new(m20251029_124300_add_customer_id_to_customer_logs::Migration),
            Box::new(m20251029_125212_backfill_customer_id_in_existing_logs::Migration),
            Box::new(m20251030_180000_add_app_settings_table::Migration),
            Box::new(m20251116_160000_create_customer_campaigner_assignments_table::Migration),
            Box::new(m20251116_161000_migrate_existing_campaigner_assignments::Migration),
            Box::new(m20251116_162000_add_primary_campaigner_id::Migration),
            Box::new(m20251116_165000_merge_migration_branches::Migration),
            Box::new(m20251118_170000_add_unique_constraint_digital_assets::Migration),
            Box::new(m20251127_093000_add_oauth_validation_fields::Migration),
            Box::new(m20251208_140000_add_connection_failure_tracking::Migration),
            Box::new(m20251211_120000_add_customer_priority_fields::Migration),
        ]
    }
}

pub async fn from_statements(
    manager: &SchemaManager<'_>,
    statements: &[&str],
) -> Result<(), DbErr> {
    let txn = manager.get_connection().begin().await?;
    for statement in statements {
        txn.execute(Statement::from_string(
            manager.get_database_backend(),
            String::from(*statement),
        ))
        .await
        .map_err(|err| DbErr::Migration(format!("{err}\nQuery: {statement}")))?;
    }
    txn.commit().await
}

pub async fn from_sql(manager: &SchemaManager<'_>, content: &str) -> Result<(), DbErr> {
    let statements: Vec<&str> = content
        .split(';')
        .map(str::trim)
        .filter(|statement| !statement.is_empty())
        .collect();
    from_statements(manager, statements.as_slice()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    // The alembic history this chain descends from was a DAG with one merge
    // point. Rendered linearly, "acyclic with a single head" reduces to
    // unique names in strictly increasing timestamp order.
    #[test]
    fn migration_order_is_linear_with_a_single_head() {
        let names: Vec<String> = Migrator::migrations()
            .iter()
            .map(|migration| migration.name().to_string())
            .collect();

        let mut sorted = names.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), names.len(), "duplicate revision names");

        for window in names.windows(2) {
            assert!(
                window[0] < window[1],
                "{} must precede {}",
                window[0],
                window[1]
            );
        }

        assert_eq!(
            names.last().map(String::as_str),
            Some("m20251211_120000_add_customer_priority_fields")
        );
    }

    #[test]
    fn merge_revision_is_present() {
        assert!(Migrator::migrations()
            .iter()
            .any(|migration| migration.name() == "m20251116_165000_merge_migration_branches"));
    }
}
