mod helpers;

use migration::{Migrator, MigratorTrait, SchemaManager};
use pretty_assertions::assert_eq;

// Positions in the chain, counted as steps from an empty database.
const STEPS_THROUGH_ENUM_ADDITIONS: u32 = 3;
const STEPS_THROUGH_KPI_SETTINGS_SEED: u32 = 18;
const STEPS_THROUGH_CUSTOMER_LOGS_CUSTOMER_ID: u32 = 22;
const STEPS_THROUGH_ASSIGNMENTS_TABLE: u32 = 25;

#[tokio::test]
async fn full_chain_up_reaches_the_single_head() {
    let db = helpers::init_db().await;
    helpers::migrate_up(&db, None).await;

    let manager = SchemaManager::new(&db);

    // Renamed tables exist under their final names only.
    assert!(manager.has_table("campaigners").await.unwrap());
    assert!(manager.has_table("agencies").await.unwrap());
    assert!(manager.has_table("customers").await.unwrap());
    assert!(manager.has_table("client_info").await.unwrap());
    assert!(manager.has_table("kpi_goals").await.unwrap());
    assert!(manager.has_table("audience").await.unwrap());
    assert!(!manager.has_table("users").await.unwrap());
    assert!(!manager.has_table("sub_customers").await.unwrap());
    assert!(!manager.has_table("campaign_kpis").await.unwrap());
    assert!(!manager.has_table("audience_table").await.unwrap());

    // Tables created mid-chain.
    assert!(manager.has_table("kpi_settings").await.unwrap());
    assert!(manager.has_table("app_settings").await.unwrap());
    assert!(manager
        .has_table("customer_campaigner_assignments")
        .await
        .unwrap());

    // Late column additions.
    assert!(manager.has_column("customers", "importance").await.unwrap());
    assert!(manager.has_column("customers", "budget").await.unwrap());
    assert!(manager
        .has_column("customers", "primary_campaigner_id")
        .await
        .unwrap());
    assert!(manager
        .has_column("connections", "needs_reauth")
        .await
        .unwrap());
    assert!(manager
        .has_column("connections", "failure_count")
        .await
        .unwrap());
    assert!(manager
        .has_column("connections", "campaigner_id")
        .await
        .unwrap());
    assert!(manager
        .has_column("kpi_goals", "ad_name_headline")
        .await
        .unwrap());
    assert!(manager.has_column("campaigners", "google_id").await.unwrap());

    // Simplified audience table lost its extra columns.
    assert!(!manager.has_column("audience", "description").await.unwrap());
    assert!(!manager.has_column("audience", "is_active").await.unwrap());

    assert!(Migrator::get_pending_migrations(&db)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn full_chain_down_returns_to_an_empty_schema() {
    let db = helpers::init_db().await;
    helpers::migrate_up(&db, None).await;
    helpers::migrate_down(&db, None).await;

    let manager = SchemaManager::new(&db);
    for table in [
        "campaigners",
        "agencies",
        "customers",
        "client_info",
        "connections",
        "digital_assets",
        "kpi_goals",
        "kpi_settings",
        "audience",
        "audience_table",
        "agent_configs",
        "customer_logs",
        "app_settings",
        "customer_campaigner_assignments",
        "users",
    ] {
        assert!(
            !manager.has_table(table).await.unwrap(),
            "table {table} should be gone after a full downgrade"
        );
    }
}

#[tokio::test]
async fn table_renames_roundtrip() {
    let db = helpers::init_db().await;
    helpers::migrate_up(&db, Some(STEPS_THROUGH_ENUM_ADDITIONS)).await;

    let manager = SchemaManager::new(&db);
    assert!(manager.has_table("users").await.unwrap());
    assert!(!manager.has_table("campaigners").await.unwrap());

    helpers::migrate_up(&db, Some(1)).await;
    assert!(manager.has_table("campaigners").await.unwrap());
    assert!(manager.has_table("agencies").await.unwrap());
    assert!(!manager.has_table("users").await.unwrap());

    helpers::migrate_down(&db, Some(1)).await;
    assert!(manager.has_table("users").await.unwrap());
    assert!(manager.has_table("sub_customers").await.unwrap());
    assert!(!manager.has_table("campaigners").await.unwrap());
}

#[tokio::test]
async fn last_migration_one_step_down_restores_prior_shape() {
    let db = helpers::init_db().await;
    helpers::migrate_up(&db, None).await;

    let manager = SchemaManager::new(&db);
    assert!(manager.has_column("customers", "importance").await.unwrap());

    helpers::migrate_down(&db, Some(1)).await;
    for column in ["importance", "budget", "campaign_health", "last_work_date"] {
        assert!(
            !manager.has_column("customers", column).await.unwrap(),
            "customers.{column} should be gone after one downgrade step"
        );
    }

    helpers::migrate_up(&db, Some(1)).await;
    assert!(manager.has_column("customers", "importance").await.unwrap());
}

#[tokio::test]
async fn enum_value_addition_downgrade_is_a_noop() {
    let db = helpers::init_db().await;
    helpers::migrate_up(&db, Some(STEPS_THROUGH_ENUM_ADDITIONS)).await;

    let manager = SchemaManager::new(&db);
    assert!(manager
        .has_column("digital_assets", "asset_type")
        .await
        .unwrap());
    let pending_before = Migrator::get_pending_migrations(&db).await.unwrap().len();

    // Both enum additions revert without touching the schema.
    helpers::migrate_down(&db, Some(2)).await;
    assert!(manager.has_table("digital_assets").await.unwrap());
    assert!(manager
        .has_column("digital_assets", "asset_type")
        .await
        .unwrap());
    let pending_after = Migrator::get_pending_migrations(&db).await.unwrap().len();
    assert_eq!(pending_after, pending_before + 2);

    helpers::migrate_up(&db, Some(2)).await;
}

#[tokio::test]
async fn kpi_settings_are_seeded_one_row_per_kpi() {
    let db = helpers::init_db().await;
    helpers::migrate_up(&db, Some(STEPS_THROUGH_KPI_SETTINGS_SEED)).await;

    assert_eq!(
        helpers::count(&db, "SELECT COUNT(*) AS cnt FROM kpi_settings").await,
        16
    );
    assert_eq!(
        helpers::count(
            &db,
            "SELECT COUNT(*) AS cnt FROM kpi_settings \
             WHERE campaign_objective = 'Lead Generation'"
        )
        .await,
        4
    );
}

#[tokio::test]
async fn kpi_settings_are_duplicated_per_active_customer() {
    let db = helpers::init_db().await;
    helpers::migrate_up(&db, Some(STEPS_THROUGH_KPI_SETTINGS_SEED)).await;

    helpers::exec(&db, "INSERT INTO agencies (name) VALUES ('Acme Media')").await;
    helpers::exec(
        &db,
        "INSERT INTO campaigners (email, name) VALUES ('dana@acme.test', 'Dana')",
    )
    .await;
    helpers::exec(
        &db,
        "INSERT INTO customers (agency_id, name, is_active, assigned_campaigner_id) \
         VALUES (1, 'Initech', TRUE, 1)",
    )
    .await;
    // A customer without an assigned campaigner gets no copy.
    helpers::exec(
        &db,
        "INSERT INTO customers (agency_id, name, is_active) VALUES (1, 'Globex', TRUE)",
    )
    .await;

    // audience rename + the customer-fields data migration.
    helpers::migrate_up(&db, Some(2)).await;

    assert_eq!(
        helpers::count(
            &db,
            "SELECT COUNT(*) AS cnt FROM kpi_settings WHERE composite_id = '1_1_1'"
        )
        .await,
        16
    );
    assert_eq!(
        helpers::count(
            &db,
            "SELECT COUNT(*) AS cnt FROM kpi_settings WHERE composite_id IS NULL"
        )
        .await,
        0
    );
}

#[tokio::test]
async fn orphaned_logs_are_backfilled_round_robin() {
    let db = helpers::init_db().await;
    helpers::migrate_up(&db, Some(STEPS_THROUGH_CUSTOMER_LOGS_CUSTOMER_ID)).await;

    helpers::exec(&db, "INSERT INTO agencies (name) VALUES ('Acme Media')").await;
    helpers::exec(
        &db,
        "INSERT INTO customers (agency_id, name) VALUES (1, 'Initech'), (1, 'Globex')",
    )
    .await;
    helpers::exec(
        &db,
        "INSERT INTO customer_logs (action) \
         VALUES ('sync'), ('report'), ('sync'), ('invite')",
    )
    .await;

    helpers::migrate_up(&db, Some(1)).await;

    assert_eq!(
        helpers::count(
            &db,
            "SELECT COUNT(*) AS cnt FROM customer_logs WHERE customer_id IS NULL"
        )
        .await,
        0
    );
    // Four logs over two customers, assigned in turn.
    for customer_id in [1, 2] {
        assert_eq!(
            helpers::count(
                &db,
                &format!(
                    "SELECT COUNT(*) AS cnt FROM customer_logs \
                     WHERE customer_id = {customer_id}"
                )
            )
            .await,
            2
        );
    }
}

#[tokio::test]
async fn legacy_assignments_become_primary_junction_rows() {
    let db = helpers::init_db().await;
    helpers::migrate_up(&db, Some(STEPS_THROUGH_ASSIGNMENTS_TABLE)).await;

    helpers::exec(&db, "INSERT INTO agencies (name) VALUES ('Acme Media')").await;
    helpers::exec(
        &db,
        "INSERT INTO campaigners (email, name) VALUES ('dana@acme.test', 'Dana')",
    )
    .await;
    helpers::exec(
        &db,
        "INSERT INTO customers (agency_id, name, assigned_campaigner_id) \
         VALUES (1, 'Initech', 1)",
    )
    .await;
    helpers::exec(
        &db,
        "INSERT INTO customers (agency_id, name) VALUES (1, 'Globex')",
    )
    .await;

    // Copy into the junction table, then denormalize back onto customers.
    helpers::migrate_up(&db, Some(2)).await;

    assert_eq!(
        helpers::count(
            &db,
            "SELECT COUNT(*) AS cnt FROM customer_campaigner_assignments \
             WHERE is_primary = TRUE AND is_active = TRUE AND role = 'PRIMARY'"
        )
        .await,
        1
    );
    assert_eq!(
        helpers::count(
            &db,
            "SELECT COUNT(*) AS cnt FROM customers WHERE primary_campaigner_id = 1"
        )
        .await,
        1
    );
    assert_eq!(
        helpers::count(
            &db,
            "SELECT COUNT(*) AS cnt FROM customers WHERE primary_campaigner_id IS NULL"
        )
        .await,
        1
    );
}

#[tokio::test]
async fn reapplying_the_defensive_migrations_is_tolerated() {
    let db = helpers::init_db().await;
    helpers::migrate_up(&db, None).await;

    // The unique-name migration checks the live schema before creating the
    // index, so a second run against the same database must not fail.
    helpers::migrate_down(&db, Some(12)).await;
    helpers::migrate_up(&db, Some(12)).await;

    assert!(Migrator::get_pending_migrations(&db)
        .await
        .unwrap()
        .is_empty());
}
