//! Database connection and schema bootstrap

use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema};

use crate::entity::{operators, voters};

/// Connect to the database with pool settings suited to a poll-station
/// deployment (a handful of terminals, not a fleet).
pub async fn connect(url: &str, max_connections: u32) -> anyhow::Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(url.to_string());
    opt.max_connections(max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(30))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(600))
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Ok(db)
}

/// Create the `operators` and `voters` tables if they do not exist.
///
/// Table definitions are derived from the entities, so this stays in sync
/// with the schema across all supported backends.
pub async fn setup_schema(db: &DatabaseConnection) -> anyhow::Result<()> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut operators_table = schema.create_table_from_entity(operators::Entity);
    operators_table.if_not_exists();
    db.execute(backend.build(&operators_table)).await?;

    let mut voters_table = schema.create_table_from_entity(voters::Entity);
    voters_table.if_not_exists();
    db.execute(backend.build(&voters_table)).await?;

    tracing::debug!("database schema is up to date");

    Ok(())
}
