//! Server configuration read from the environment.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `DATABASE_PATH` | `notes.db` (`:memory:` allowed) |
//! | `HOST` | `0.0.0.0` |
//! | `PORT` | `5050` |
//! | `DB_MAX_CONNECTIONS` | `4` |
//! | `LOG_FORMAT` | `text` (or `json`) |
//! | `LOG_FILE` | unset, logs go to stdout |
//! | `LOG_ANSI` | auto |
//!
//! Invalid values fall back to the default. The fallback is recorded in
//! [`ServerConfig::warnings`] so `main` can log it once tracing is up.

use std::net::SocketAddr;

use jotpad_db::pool::DEFAULT_MAX_CONNECTIONS;
use jotpad_db::PoolConfig;

pub const DEFAULT_DATABASE_PATH: &str = "notes.db";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5050;

/// Default `RUST_LOG` directive.
pub const DEFAULT_LOG_FILTER: &str = "jotpad_api=debug,jotpad_db=info,tower_http=info";

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Text => "text",
            LogFormat::Json => "json",
        }
    }
}

/// Logging options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    pub format: LogFormat,
    /// Log file path; rotated daily.
    pub file: Option<String>,
    /// Force ANSI colours on or off.
    pub ansi: Option<bool>,
}

/// Everything the binary needs to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_path: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    pub log: LogConfig,
    /// Values that were rejected and replaced by their default.
    pub warnings: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            database_path: DEFAULT_DATABASE_PATH.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_connections: DEFAULT_MAX_CONNECTIONS,
            log: LogConfig::default(),
            warnings: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which returns the raw value of a
    /// variable or `None` when unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(path) = get("DATABASE_PATH") {
            config.database_path = path;
        }
        if let Some(host) = get("HOST") {
            config.host = host;
        }
        if let Some(raw) = get("PORT") {
            match raw.parse::<u16>() {
                Ok(port) if port > 0 => config.port = port,
                _ => config.warnings.push(format!(
                    "Invalid PORT '{}', using {}",
                    raw, DEFAULT_PORT
                )),
            }
        }
        if let Some(raw) = get("DB_MAX_CONNECTIONS") {
            match raw.parse::<u32>() {
                Ok(n) if n > 0 => config.max_connections = n,
                _ => config.warnings.push(format!(
                    "Invalid DB_MAX_CONNECTIONS '{}', using {}",
                    raw, DEFAULT_MAX_CONNECTIONS
                )),
            }
        }

        if let Some(raw) = get("LOG_FORMAT") {
            match raw.to_ascii_lowercase().as_str() {
                "json" => config.log.format = LogFormat::Json,
                "text" => config.log.format = LogFormat::Text,
                _ => config
                    .warnings
                    .push(format!("Invalid LOG_FORMAT '{}', using text", raw)),
            }
        }
        config.log.file = get("LOG_FILE");
        config.log.ansi = get("LOG_ANSI").map(|v| v == "true" || v == "1");

        config
    }

    /// Socket address to bind.
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.host, self.port).parse()?;
        Ok(addr)
    }

    /// Pool settings for [`jotpad_db::Database::connect_with_config`].
    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig::new().max_connections(self.max_connections)
    }
}
