//! # Distributed Store Access
//!
//! The put-by-key contract snapshots are published through, and the
//! Consul implementation of it. Last-write-wins: repeated publishes for
//! a node overwrite the previous record, and no history is retained.

pub mod consul;

pub use consul::ConsulKv;

use async_trait::async_trait;

/// A store write failed; the previously stored value is untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("KV put for `{key}` failed: {message}")]
pub struct StoreError {
    pub key: String,
    pub message: String,
}

/// Write contract against the distributed KV store.
///
/// A `put` is a single unconditional overwrite. No read-modify-write,
/// no compare-and-swap; the store retains only the latest value.
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn put(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;
}
