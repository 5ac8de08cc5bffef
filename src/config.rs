use crate::error::{AgentError, Result};

#[derive(Debug, Clone)]
pub struct AgentConfig {
    pub postgres_url: String,
    pub consul_url: String,
    pub consul_kv_prefix: String,
    pub hostname: String,
    pub poll_interval_secs: u64,
    pub store_timeout_ms: u64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            postgres_url: "postgresql://localhost/postgres".to_string(),
            consul_url: "http://localhost:8500".to_string(),
            consul_kv_prefix: "pgha".to_string(),
            hostname: "localhost".to_string(),
            poll_interval_secs: 10,
            store_timeout_ms: 30000,
        }
    }
}

impl AgentConfig {
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("PGHA_POSTGRES_URL") {
            config.postgres_url = url;
        }

        if let Ok(url) = std::env::var("PGHA_CONSUL_URL") {
            config.consul_url = url;
        }

        if let Ok(prefix) = std::env::var("PGHA_CONSUL_KV_PREFIX") {
            config.consul_kv_prefix = prefix;
        }

        if let Ok(hostname) = std::env::var("PGHA_HOSTNAME") {
            config.hostname = hostname;
        }

        if let Ok(interval) = std::env::var("PGHA_POLL_INTERVAL_SECS") {
            config.poll_interval_secs = interval.parse().map_err(|e| {
                AgentError::ConfigurationError(format!("Invalid poll_interval_secs: {e}"))
            })?;
        }

        if let Ok(timeout) = std::env::var("PGHA_STORE_TIMEOUT_MS") {
            config.store_timeout_ms = timeout.parse().map_err(|e| {
                AgentError::ConfigurationError(format!("Invalid store_timeout_ms: {e}"))
            })?;
        }

        Ok(config)
    }
}
