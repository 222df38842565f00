use sea_orm_migration::{
    prelude::*,
    sea_orm::{ConnectionTrait, Statement},
};

#[derive(DeriveMigrationName)]
pub struct Migration;

// The orphaned logs predate per-customer attribution and carry no hint of
// ownership, so they are spread round-robin across the active customers.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();
        let backend = manager.get_database_backend();

        let customers = conn
            .query_all(Statement::from_string(
                backend,
                "SELECT id FROM customers WHERE is_active = TRUE ORDER BY id".to_owned(),
            ))
            .await?;
        let customer_ids = customers
            .iter()
            .map(|row| row.try_get::<i32>("", "id"))
            .collect::<Result<Vec<_>, _>>()?;
        if customer_ids.is_empty() {
            return Ok(());
        }

        let logs = conn
            .query_all(Statement::from_string(
                backend,
                "SELECT id FROM customer_logs WHERE customer_id IS NULL ORDER BY id".to_owned(),
            ))
            .await?;

        for (position, row) in logs.iter().enumerate() {
            let log_id = row.try_get::<i32>("", "id")?;
            let customer_id = customer_ids[position % customer_ids.len()];
            conn.execute(Statement::from_string(
                backend,
                format!("UPDATE customer_logs SET customer_id = {customer_id} WHERE id = {log_id}"),
            ))
            .await?;
        }

        Ok(())
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        // Backfilled rows are indistinguishable from rows attributed later;
        // nulling customer_id across the board would destroy real data.
        Ok(())
    }
}
