//! # Database Access
//!
//! Connection setup and the read-only query contract the replication
//! inspector runs against PostgreSQL. The contract is a trait so cycle
//! behavior can be exercised against scripted stand-ins.

pub mod connection;

pub use connection::DatabaseConnection;

use async_trait::async_trait;

/// A single replication query that failed during a cycle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("query {query} failed: {message}")]
pub struct QueryError {
    pub query: &'static str,
    pub message: String,
}

impl QueryError {
    pub fn new(query: &'static str, source: sqlx::Error) -> Self {
        Self {
            query,
            message: source.to_string(),
        }
    }
}

/// The three single-row, single-column signals the inspector reads.
///
/// All queries are read-only; a driver error surfaces as [`QueryError`]
/// and is handled by the caller.
#[async_trait]
pub trait ReplicationQueries: Send + Sync {
    /// `true` when the node is replaying WAL (a standby).
    async fn is_in_recovery(&self) -> Result<bool, QueryError>;

    /// Raw WAL write location on a primary.
    async fn current_wal_position(&self) -> Result<String, QueryError>;

    /// Raw WAL receive location on a standby.
    async fn last_received_wal_position(&self) -> Result<String, QueryError>;
}
