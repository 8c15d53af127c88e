//! Setup tool: bulk import of operator accounts and the voter roll
//!
//! Runs against the same database the server uses. Re-imports skip rows
//! that already exist.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use pollbook_server::{import, model::Configuration, startup};

#[derive(Debug, Parser)]
#[command(name = "pollbook-setup", about = "Provision the Pollbook database")]
struct Cli {
    #[arg(long = "db-url", env = "DATABASE_URL")]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Import operator accounts from a comma-separated username,password file
    ImportOperators { filename: PathBuf },
    /// Import the voter roll from a tab-separated export
    ImportVoters { filename: PathBuf },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Cli::parse();

    let _logging_guard = startup::init_logging(None)?;

    let configuration = Configuration::from_file()?;
    let database_url = match args.database_url {
        Some(url) => url,
        None => configuration.database_url()?,
    };

    let db = pollbook_persistence::connect(&database_url, 4).await?;
    pollbook_persistence::setup_schema(&db).await?;

    let summary = match args.command {
        Command::ImportOperators { filename } => import::import_operators(&db, &filename).await?,
        Command::ImportVoters { filename } => import::import_voters(&db, &filename).await?,
    };

    info!(
        "Done: {} imported, {} skipped",
        summary.imported, summary.skipped
    );

    Ok(())
}
