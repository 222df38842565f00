use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// Copies the legacy customers.assigned_campaigner_id link into the junction
// table as the primary assignment. The legacy column itself is left in place
// for backward compatibility.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        crate::from_sql(
            manager,
            r#"
            INSERT INTO customer_campaigner_assignments (
                customer_id, campaigner_id, role, is_primary, is_active, assigned_at
            )
            SELECT
                c.id, c.assigned_campaigner_id, 'PRIMARY', TRUE, TRUE,
                COALESCE(c.created_at, CURRENT_TIMESTAMP)
            FROM customers c
            WHERE c.assigned_campaigner_id IS NOT NULL;
            "#,
        )
        .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // assigned_campaigner_id was never touched, so removing the copied
        // rows is a full revert.
        crate::from_sql(
            manager,
            "DELETE FROM customer_campaigner_assignments WHERE is_primary = TRUE;",
        )
        .await
    }
}
