use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// Agent configs are now identified by name alone. The index check tolerates
// environments where the constraint was already created by hand.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if !manager
            .has_index("agent_configs", "uq_agent_configs_name")
            .await?
        {
            manager
                .create_index(
                    Index::create()
                        .name("uq_agent_configs_name")
                        .table(AgentConfigs::Table)
                        .col(AgentConfigs::Name)
                        .unique()
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if manager
            .has_index("agent_configs", "uq_agent_configs_name")
            .await?
        {
            manager
                .drop_index(
                    Index::drop()
                        .name("uq_agent_configs_name")
                        .table(AgentConfigs::Table)
                        .to_owned(),
                )
                .await?;
        }

        // The original agent_type discriminator was dropped by hand before
        // this revision; restore it on the way back down.
        manager
            .alter_table(
                Table::alter()
                    .table(AgentConfigs::Table)
                    .add_column(ColumnDef::new(AgentConfigs::AgentType).string_len(50))
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum AgentConfigs {
    Table,
    Name,
    AgentType,
}
