use super::{
    CacheConfig, ConfigError, DatabaseConfig, EdgeConfig, LoggingConfig, PurgeConfig,
    RetentionConfig, ServerConfig,
};
use serde::{Deserialize, Serialize};

/// Overrides taken from the command line; they win over the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub http_port: Option<u16>,
    pub bind_address: Option<String>,
    pub database_path: Option<String>,
    pub edge_endpoint: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub purge: PurgeConfig,

    #[serde(default)]
    pub edge: EdgeConfig,

    #[serde(default)]
    pub retention: RetentionConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Loads configuration from an optional TOML file and applies CLI
    /// overrides. Missing file path means pure defaults.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.to_string(),
                    source,
                })?;
                toml::from_str(&raw).map_err(|source| ConfigError::Parse {
                    path: path.to_string(),
                    source,
                })?
            }
            None => Config::default(),
        };

        if let Some(port) = overrides.http_port {
            config.server.http_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            config.server.bind_address = bind;
        }
        if let Some(db) = overrides.database_path {
            config.database.path = db;
        }
        if let Some(edge) = overrides.edge_endpoint {
            config.edge.endpoint = edge;
        }

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cache.shards == 0 || !self.cache.shards.is_power_of_two() {
            return Err(ConfigError::Invalid(format!(
                "cache.shards must be a power of two, got {}",
                self.cache.shards
            )));
        }
        if self.purge.bucket_concurrency == 0 {
            return Err(ConfigError::Invalid(
                "purge.bucket_concurrency must be at least 1".to_string(),
            ));
        }
        if self.retention.bandwidth_days == 0 {
            return Err(ConfigError::Invalid(
                "retention.bandwidth_days must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
