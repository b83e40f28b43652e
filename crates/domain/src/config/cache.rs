use serde::{Deserialize, Serialize};

/// Cache index sizing.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Shard count of the index map. Must be a power of two.
    #[serde(default = "default_shards")]
    pub shards: usize,

    /// Pre-allocated entry capacity.
    #[serde(default = "default_capacity")]
    pub initial_capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            shards: default_shards(),
            initial_capacity: default_capacity(),
        }
    }
}

fn default_shards() -> usize {
    64
}

fn default_capacity() -> usize {
    16_384
}
