use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::wal::WalPosition;

/// Replication role of the observed node at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplicationRole {
    Primary,
    Standby,
}

impl fmt::Display for ReplicationRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplicationRole::Primary => write!(f, "primary"),
            ReplicationRole::Standby => write!(f, "standby"),
        }
    }
}

/// One point-in-time observation of a node's replication state.
///
/// Serializes to the wire shape consumers read back from the store:
/// `{host, role, xlog, offset, timestamp}`, with the WAL components as
/// plain unsigned integers and the timestamp in RFC 3339.
///
/// A snapshot only exists fully populated. It is created fresh each
/// cycle, published, and discarded; it is never retained across cycles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplicationSnapshot {
    pub host: String,
    pub role: ReplicationRole,
    #[serde(flatten)]
    pub position: WalPosition,
    #[serde(rename = "timestamp")]
    pub observed_at: DateTime<Utc>,
}
