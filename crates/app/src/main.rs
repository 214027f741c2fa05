use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::ConnectOptions;
use settings::Database;

mod settings;

const KEEP_ALIVE: Duration = Duration::from_secs(u32::MAX as u64);

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "dompetku={level},server={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let server = settings.server;
    tracing::info!("Opening {:?} database...", server.database);
    let db = parse_database(&server.database).await?;

    let engine = engine::Engine::builder().database(db).build().await?;
    let state = server::ServerState::new(engine, &server.cors_origin)?;

    server::run(state, &server.bind, server.port).await?;
    Ok(())
}

async fn parse_database(
    config: &Database,
) -> Result<sea_orm::DatabaseConnection, Box<dyn std::error::Error + Send + Sync>> {
    let database = sea_orm::Database::connect(connect_options(config)).await?;
    Migrator::up(&database, None).await?;
    Ok(database)
}

fn connect_options(config: &Database) -> ConnectOptions {
    let url = match config {
        Database::Memory => String::from("sqlite::memory:"),
        Database::Sqlite(path) => format!("sqlite:{}?mode=rwc", path),
    };

    let mut options = ConnectOptions::new(url);
    if *config == Database::Memory {
        // The data lives on the single pooled connection; never recycle it.
        options
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(KEEP_ALIVE)
            .max_lifetime(KEEP_ALIVE);
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_database_keeps_its_connection() {
        let options = connect_options(&Database::Memory);
        assert_eq!(options.get_url(), "sqlite::memory:");
        assert_eq!(options.get_min_connections(), Some(1));
        assert_eq!(options.get_max_connections(), Some(1));
        assert_eq!(options.get_idle_timeout(), Some(KEEP_ALIVE));
        assert_eq!(options.get_max_lifetime(), Some(KEEP_ALIVE));
    }

    #[test]
    fn file_database_uses_pool_defaults() {
        let options = connect_options(&Database::Sqlite("dompetku.db".to_string()));
        assert_eq!(options.get_url(), "sqlite:dompetku.db?mode=rwc");
        assert_eq!(options.get_idle_timeout(), None);
        assert_eq!(options.get_max_lifetime(), None);
    }

    #[tokio::test]
    async fn memory_database_is_migrated() {
        let db = parse_database(&Database::Memory).await.unwrap();
        let engine = engine::Engine::builder().database(db).build().await.unwrap();
        assert_eq!(engine.list_categories(None).await.unwrap().len(), 18);
    }
}
