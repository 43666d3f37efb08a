//! Configuration management for Kinship services.
//!
//! Configuration is loaded from (in priority order):
//! 1. The flat variables of the original deployment (`NEO4J_URI`,
//!    `NEO4J_USER`, `NEO4J_PASSWORD`, `PORT`)
//! 2. Environment variables (`KINSHIP__` prefix, `__` separator)
//! 3. Config file (`kinship.toml` by default)
//! 4. Defaults

use serde::Deserialize;

use crate::error::{KinshipError, Result};

/// Top-level service configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KinshipConfig {
    #[serde(default)]
    pub neo4j: Neo4jSettings,

    #[serde(default)]
    pub server: ServerSettings,
}

/// Connection settings for the Neo4j database.
#[derive(Debug, Clone, Deserialize)]
pub struct Neo4jSettings {
    #[serde(default = "default_uri")]
    pub uri: String,

    #[serde(default = "default_user")]
    pub user: String,

    #[serde(default = "default_password")]
    pub password: String,

    /// Size of the bolt connection pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_fetch_size")]
    pub fetch_size: usize,

    /// Create a uniqueness constraint on `Person.name` at startup.
    #[serde(default = "default_true")]
    pub enforce_unique_names: bool,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Origins allowed by the CORS layer. Empty disables CORS.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl ServerSettings {
    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Flat environment variables honoured for compatibility with the
/// original deployment. Set values win over every other source.
#[derive(Debug, Clone, Default)]
pub struct LegacyEnv {
    pub uri: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub port: Option<String>,
}

impl LegacyEnv {
    pub fn from_process() -> Self {
        let var = |key: &str| std::env::var(key).ok().filter(|v| !v.is_empty());
        Self {
            uri: var("NEO4J_URI"),
            user: var("NEO4J_USER"),
            password: var("NEO4J_PASSWORD"),
            port: var("PORT"),
        }
    }
}

impl KinshipConfig {
    /// Load configuration from `<file_prefix>.toml`, `KINSHIP__*` and the
    /// process environment.
    pub fn load(file_prefix: &str) -> Result<Self> {
        Self::load_with(file_prefix, &LegacyEnv::from_process())
    }

    /// Load configuration with an explicit set of legacy overrides.
    pub fn load_with(file_prefix: &str, legacy: &LegacyEnv) -> Result<Self> {
        let port = match legacy.port.as_deref() {
            Some(raw) => Some(i64::from(raw.parse::<u16>().map_err(|_| {
                KinshipError::InvalidValue {
                    key: "PORT".to_string(),
                    value: raw.to_string(),
                }
            })?)),
            None => None,
        };

        let cfg = config::Config::builder()
            .add_source(config::File::with_name(file_prefix).required(false))
            .add_source(
                config::Environment::with_prefix("KINSHIP")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("server.cors_origins"),
            )
            .set_override_option("neo4j.uri", legacy.uri.clone())?
            .set_override_option("neo4j.user", legacy.user.clone())?
            .set_override_option("neo4j.password", legacy.password.clone())?
            .set_override_option("server.port", port)?
            .build()?;

        let loaded: KinshipConfig = cfg.try_deserialize()?;
        tracing::debug!(
            uri = %loaded.neo4j.uri,
            port = loaded.server.port,
            "Configuration loaded"
        );
        Ok(loaded)
    }
}

fn default_uri() -> String {
    "bolt://localhost:7687".to_string()
}

fn default_user() -> String {
    "neo4j".to_string()
}

fn default_password() -> String {
    "neo4j".to_string()
}

fn default_max_connections() -> u32 {
    16
}

fn default_fetch_size() -> usize {
    256
}

fn default_true() -> bool {
    true
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for Neo4jSettings {
    fn default() -> Self {
        Self {
            uri: default_uri(),
            user: default_user(),
            password: default_password(),
            max_connections: default_max_connections(),
            fetch_size: default_fetch_size(),
            enforce_unique_names: default_true(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}
