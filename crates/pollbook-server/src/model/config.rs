//! Configuration management
//!
//! Configuration is layered: `conf/application.yml`, then `POLLBOOK_`
//! environment variables (underscores map to key dots, so
//! `POLLBOOK_DB_URL` sets `db.url`), then command line flags. The token
//! signing secret is an opaque credential supplied by the environment; it
//! is never a source-code literal.

use clap::Parser;
use config::{Config, Environment};
use jsonwebtoken::EncodingKey;

use pollbook_auth::model::{DEFAULT_TOKEN_EXPIRE_SECONDS, TOKEN_EXPIRE_SECONDS, TOKEN_SECRET_KEY};
use pollbook_common::PollbookError;

const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0";
const DEFAULT_SERVER_PORT: u16 = 8080;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 16;

/// Command line arguments for the server
#[derive(Debug, Parser)]
#[command()]
struct Cli {
    #[arg(long = "address")]
    address: Option<String>,
    #[arg(long = "port")]
    port: Option<u16>,
    #[arg(long = "db-url", env = "DATABASE_URL")]
    database_url: Option<String>,
}

/// Application configuration loaded from config file, environment, and CLI
#[derive(Clone, Debug, Default)]
pub struct Configuration {
    pub config: Config,
}

impl Configuration {
    /// Load configuration for the server binary (file + env + CLI flags).
    pub fn new() -> anyhow::Result<Self> {
        let args = Cli::parse();
        let mut config_builder = Self::base_builder();

        if let Some(v) = args.address {
            config_builder = config_builder.set_override("server.address", v)?;
        }
        if let Some(v) = args.port {
            config_builder = config_builder.set_override("server.port", v as i64)?;
        }
        if let Some(v) = args.database_url {
            config_builder = config_builder.set_override("db.url", v)?;
        }

        let config = config_builder.build()?;

        Ok(Configuration { config })
    }

    /// Load configuration without CLI flags (used by the setup tool, which
    /// carries its own argument parser).
    pub fn from_file() -> anyhow::Result<Self> {
        let config = Self::base_builder().build()?;

        Ok(Configuration { config })
    }

    /// Wrap an already-built `Config` (used by tests).
    pub fn from_config(config: Config) -> Self {
        Configuration { config }
    }

    fn base_builder() -> config::ConfigBuilder<config::builder::DefaultState> {
        Config::builder()
            .add_source(config::File::with_name("conf/application.yml").required(false))
            .add_source(
                Environment::with_prefix("pollbook")
                    .separator("_")
                    .try_parsing(true),
            )
    }

    /// Fail fast on configuration a running server cannot do without.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.database_url()?;

        if let Ok(port) = self.config.get_int("server.port") {
            if port < 1 || u16::try_from(port).is_err() {
                return Err(PollbookError::ConfigError(format!(
                    "'server.port' out of range: {}",
                    port
                ))
                .into());
            }
        }
        if let Ok(n) = self.config.get_int("db.pool.maxConnections") {
            if n < 1 || u32::try_from(n).is_err() {
                return Err(PollbookError::ConfigError(format!(
                    "'db.pool.maxConnections' out of range: {}",
                    n
                ))
                .into());
            }
        }

        let secret = self.token_secret_key();
        if secret.is_empty() {
            return Err(PollbookError::ConfigError(format!(
                "'{}' is not set; supply a base64-encoded HS256 secret",
                TOKEN_SECRET_KEY
            ))
            .into());
        }
        EncodingKey::from_base64_secret(&secret).map_err(|e| {
            PollbookError::ConfigError(format!("'{}' is not valid base64: {}", TOKEN_SECRET_KEY, e))
        })?;

        Ok(())
    }

    pub fn server_address(&self) -> String {
        self.config
            .get_string("server.address")
            .unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
    }

    pub fn server_port(&self) -> u16 {
        self.config
            .get_int("server.port")
            .ok()
            .and_then(|v| u16::try_from(v).ok())
            .unwrap_or(DEFAULT_SERVER_PORT)
    }

    pub fn database_url(&self) -> anyhow::Result<String> {
        self.config
            .get_string("db.url")
            .map_err(|_| PollbookError::ConfigError("'db.url' is not set".to_string()).into())
    }

    pub fn db_max_connections(&self) -> u32 {
        self.config
            .get_int("db.pool.maxConnections")
            .ok()
            .and_then(|v| u32::try_from(v).ok())
            .filter(|v| *v > 0)
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }

    pub fn token_secret_key(&self) -> String {
        self.config.get_string(TOKEN_SECRET_KEY).unwrap_or_default()
    }

    pub fn token_expire_seconds(&self) -> i64 {
        self.config
            .get_int(TOKEN_EXPIRE_SECONDS)
            .unwrap_or(DEFAULT_TOKEN_EXPIRE_SECONDS)
    }

    pub fn logs_path(&self) -> Option<String> {
        self.config
            .get_string("pollbook.logs.path")
            .ok()
            .filter(|p| !p.is_empty())
    }
}
