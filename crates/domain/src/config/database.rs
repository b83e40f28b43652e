use serde::{Deserialize, Serialize};

/// SQLite settings for the admin database (purge log, bandwidth samples,
/// file metadata).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to SQLite database file (default: "./cinder-cdn.db")
    #[serde(default = "default_db_path")]
    pub path: String,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
            max_connections: default_max_connections(),
        }
    }
}

fn default_db_path() -> String {
    "./cinder-cdn.db".to_string()
}

fn default_max_connections() -> u32 {
    16
}
