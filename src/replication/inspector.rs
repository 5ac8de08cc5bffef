use chrono::Utc;

use crate::database::{QueryError, ReplicationQueries};
use crate::replication::snapshot::{ReplicationRole, ReplicationSnapshot};
use crate::wal::{WalParseError, WalPosition};

/// Stage of the collect pipeline a failure occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectStage {
    RoleCheck,
    PositionQuery,
    PositionParse,
}

impl CollectStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectStage::RoleCheck => "role_check",
            CollectStage::PositionQuery => "position_query",
            CollectStage::PositionParse => "position_parse",
        }
    }
}

/// A cycle's collection failed; the snapshot was not constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollectError {
    #[error("role check failed: {0}")]
    RoleCheck(#[source] QueryError),
    #[error("position query failed: {0}")]
    PositionQuery(#[source] QueryError),
    #[error("position parse failed: {0}")]
    PositionParse(#[from] WalParseError),
}

impl CollectError {
    pub fn stage(&self) -> CollectStage {
        match self {
            CollectError::RoleCheck(_) => CollectStage::RoleCheck,
            CollectError::PositionQuery(_) => CollectStage::PositionQuery,
            CollectError::PositionParse(_) => CollectStage::PositionParse,
        }
    }
}

/// Produces one [`ReplicationSnapshot`] per call by querying the node.
///
/// The role is determined fresh on every call and never cached: a node
/// can be promoted between cycles and the published record must follow.
pub struct Inspector<Q> {
    queries: Q,
    host: String,
}

impl<Q: ReplicationQueries> Inspector<Q> {
    /// `host` is the node's stable logical identifier; it is captured
    /// once at construction and not re-resolved per cycle.
    pub fn new(queries: Q, host: impl Into<String>) -> Self {
        Self {
            queries,
            host: host.into(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Observe the node once: role check, then the role's position
    /// query, then position decode.
    ///
    /// Issues one or two read-only queries and never retries; the
    /// scheduler owns retry cadence.
    pub async fn collect(&self) -> Result<ReplicationSnapshot, CollectError> {
        let in_recovery = self
            .queries
            .is_in_recovery()
            .await
            .map_err(CollectError::RoleCheck)?;

        let (role, raw_position) = if in_recovery {
            let raw = self
                .queries
                .last_received_wal_position()
                .await
                .map_err(CollectError::PositionQuery)?;
            (ReplicationRole::Standby, raw)
        } else {
            let raw = self
                .queries
                .current_wal_position()
                .await
                .map_err(CollectError::PositionQuery)?;
            (ReplicationRole::Primary, raw)
        };

        let position = WalPosition::parse(&raw_position)?;

        Ok(ReplicationSnapshot {
            host: self.host.clone(),
            role,
            position,
            observed_at: Utc::now(),
        })
    }
}
