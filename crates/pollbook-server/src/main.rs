//! Main entry point for the Pollbook server

use std::sync::Arc;

use pollbook_server::{
    model::{AppState, Configuration},
    startup,
};
use tracing::info;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let configuration = Configuration::new()?;

    let _logging_guard = startup::init_logging(configuration.logs_path().as_deref())?;

    configuration.validate()?;

    let database_url = configuration.database_url()?;
    let database_connection =
        pollbook_persistence::connect(&database_url, configuration.db_max_connections()).await?;
    pollbook_persistence::setup_schema(&database_connection).await?;

    let address = configuration.server_address();
    let port = configuration.server_port();

    let app_state = Arc::new(AppState::new(configuration, database_connection));

    info!("Pollbook server listening on {}:{}", address, port);

    startup::http_server(app_state, address, port)?.await?;

    Ok(())
}
