//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_pool_size() -> u32 {
    8
}

fn default_busy_timeout_secs() -> u64 {
    30
}

#[derive(Clone, Debug, Deserialize)]
/// Server settings read from `config/*.yaml` and `APP_*` variables.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
    #[serde(default = "default_busy_timeout_secs")]
    pub busy_timeout_secs: u64,
}
