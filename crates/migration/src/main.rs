//! Schema management for the Dompetku database.
//!
//! `DATABASE_URL` (or `--database-url`) selects the target; without a
//! subcommand the pending migrations are applied.

use clap::{Parser, Subcommand};
use sea_orm::Database;
use sea_orm_migration::prelude::*;

#[derive(Debug, Parser)]
#[command(name = "migration", about = "Apply or inspect Dompetku schema migrations")]
struct Cli {
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite:./dompetku.db?mode=rwc")]
    database_url: String,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Apply every pending migration.
    Up,
    /// Roll back the last `steps` migrations (all of them when omitted).
    Down {
        #[arg(long)]
        steps: Option<u32>,
    },
    /// Drop every table and re-apply all migrations.
    Fresh,
    /// Roll back everything, then apply again.
    Refresh,
    /// Print applied/pending migrations.
    Status,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    let db = Database::connect(&cli.database_url).await?;

    match cli.command.unwrap_or(Command::Up) {
        Command::Up => migration::Migrator::up(&db, None).await?,
        Command::Down { steps } => migration::Migrator::down(&db, steps).await?,
        Command::Fresh => migration::Migrator::fresh(&db).await?,
        Command::Refresh => migration::Migrator::refresh(&db).await?,
        Command::Status => migration::Migrator::status(&db).await?,
    }

    Ok(())
}
