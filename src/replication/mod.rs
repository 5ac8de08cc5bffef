//! # Replication Observation
//!
//! Snapshot model and the inspector that produces one snapshot per cycle
//! from the node's recovery state and WAL position.

pub mod inspector;
pub mod snapshot;

pub use inspector::{CollectError, CollectStage, Inspector};
pub use snapshot::{ReplicationRole, ReplicationSnapshot};
