use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::{AgentError, Result};
use crate::store::{KvStore, StoreError};

/// Consul KV client speaking the HTTP API.
#[derive(Debug, Clone)]
pub struct ConsulKv {
    client: Client,
    base_url: String,
}

impl ConsulKv {
    /// Build a client against the given Consul HTTP address.
    ///
    /// The request timeout is the client's own bound on a hung store;
    /// failure to construct the client is fatal at setup.
    pub fn new(consul_url: &str, timeout_ms: u64) -> Result<Self> {
        reqwest::Url::parse(consul_url)
            .map_err(|e| AgentError::StoreError(format!("Invalid Consul URL {consul_url}: {e}")))?;

        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| AgentError::StoreError(format!("Consul client init failed: {e}")))?;

        Ok(Self {
            client,
            base_url: consul_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl KvStore for ConsulKv {
    async fn put(&self, key: &str, value: Vec<u8>) -> std::result::Result<(), StoreError> {
        let url = format!("{}/v1/kv/{key}", self.base_url);

        let response = self
            .client
            .put(&url)
            .body(value)
            .send()
            .await
            .map_err(|e| StoreError {
                key: key.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError {
                key: key.to_string(),
                message: format!("Consul returned {status}"),
            });
        }

        debug!(key = %key, "KV value stored");
        Ok(())
    }
}
