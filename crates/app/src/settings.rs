//! Runtime settings.
//!
//! Read from an optional TOML file (`config/dompetku.toml` unless `--config`
//! points elsewhere) layered with `DOMPETKU__SECTION__KEY` environment
//! variables.

use clap::Parser;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "config/dompetku.toml";

#[derive(Debug, Parser)]
#[command(name = "dompetku", about = "Personal finance ledger API")]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Memory,
    Sqlite(String),
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct App {
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Server {
    pub bind: String,
    pub port: u16,
    pub database: Database,
    pub cors_origin: String,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 6543,
            database: Database::Memory,
            cors_origin: "*".to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub server: Server,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let args = Args::parse();
        Self::from_path(args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH))
    }

    fn from_path(path: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("DOMPETKU").separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use config::FileFormat;

    use super::*;

    fn parse(toml: &str) -> Settings {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let settings = Settings::from_path("config/does-not-exist").unwrap();
        assert_eq!(settings.app.level, "info");
        assert_eq!(settings.server.port, 6543);
        assert_eq!(settings.server.bind, "127.0.0.1");
        assert_eq!(settings.server.database, Database::Memory);
        assert_eq!(settings.server.cors_origin, "*");
    }

    #[test]
    fn sqlite_database_is_parsed() {
        let settings = parse(
            r#"
            [app]
            level = "debug"

            [server]
            port = 8080
            database = { sqlite = "dompetku.db" }
            cors_origin = "http://localhost:5173"
            "#,
        );
        assert_eq!(settings.app.level, "debug");
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.bind, "127.0.0.1");
        assert_eq!(
            settings.server.database,
            Database::Sqlite("dompetku.db".to_string())
        );
        assert_eq!(settings.server.cors_origin, "http://localhost:5173");
    }

    #[test]
    fn memory_database_is_a_bare_string() {
        let settings = parse(
            r#"
            [server]
            database = "memory"
            "#,
        );
        assert_eq!(settings.server.database, Database::Memory);
    }
}
