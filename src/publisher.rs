//! # Snapshot Publication
//!
//! Serializes a snapshot and writes it to the distributed store under
//! the node's deterministic key.

use crate::replication::ReplicationSnapshot;
use crate::store::{KvStore, StoreError};

/// A publish attempt failed; the store keeps whatever it held before.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// Should not happen for a fully populated snapshot. Observing this
    /// means a bug in the snapshot encoding, not a transient condition.
    #[error("snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Writes snapshots to the store, one key per node.
pub struct Publisher<K> {
    store: K,
    key_prefix: String,
}

impl<K: KvStore> Publisher<K> {
    /// `namespace` is the configured KV prefix; the full key layout is
    /// `{namespace}/replication/stats/{host}`.
    pub fn new(store: K, namespace: &str) -> Self {
        Self {
            store,
            key_prefix: format!("{}/replication/stats", namespace.trim_end_matches('/')),
        }
    }

    /// Deterministic key a node's record lives under. Stable across
    /// cycles for a fixed configuration.
    pub fn key_for(&self, host: &str) -> String {
        format!("{}/{host}", self.key_prefix)
    }

    /// Encode and write one snapshot, overwriting the previous record.
    pub async fn publish(&self, snapshot: &ReplicationSnapshot) -> Result<(), PublishError> {
        let payload = serde_json::to_vec(snapshot)?;
        let key = self.key_for(&snapshot.host);

        self.store.put(&key, payload).await?;
        Ok(())
    }
}
