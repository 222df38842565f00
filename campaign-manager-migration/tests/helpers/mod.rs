use migration::MigratorTrait;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};

/// Connects to the database under test. `TEST_DATABASE_URL` overrides the
/// in-memory default so the suite can be pointed at a real postgres; the
/// production `DATABASE_URL` is deliberately never consulted.
pub async fn init_db() -> DatabaseConnection {
    let db_url =
        std::env::var("TEST_DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string());
    assert!(
        db_url.starts_with("sqlite") || db_url.contains("test"),
        "TEST_DATABASE_URL appears to point at a production database: {db_url}"
    );

    tracing::info!(url = %db_url, "connecting to test database");
    // A single connection keeps every statement on the same in-memory
    // database.
    let mut options = ConnectOptions::new(db_url);
    options.max_connections(1);
    Database::connect(options)
        .await
        .expect("connection to test database failed")
}

pub async fn migrate_up(db: &DatabaseConnection, steps: Option<u32>) {
    migration::Migrator::up(db, steps)
        .await
        .expect("migration up failed");
}

pub async fn migrate_down(db: &DatabaseConnection, steps: Option<u32>) {
    migration::Migrator::down(db, steps)
        .await
        .expect("migration down failed");
}

pub async fn exec(db: &DatabaseConnection, sql: &str) {
    db.execute(Statement::from_string(
        db.get_database_backend(),
        sql.to_string(),
    ))
    .await
    .unwrap_or_else(|err| panic!("query failed: {err}\nQuery: {sql}"));
}

pub async fn count(db: &DatabaseConnection, sql: &str) -> i64 {
    let row = db
        .query_one(Statement::from_string(
            db.get_database_backend(),
            sql.to_string(),
        ))
        .await
        .unwrap_or_else(|err| panic!("query failed: {err}\nQuery: {sql}"))
        .expect("count query returned no rows");
    row.try_get::<i64>("", "cnt").expect("cnt column")
}
