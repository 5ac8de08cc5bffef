//! # PGHA Agent
//!
//! Replication health agent for a PostgreSQL high-availability cluster.
//! Every poll interval it determines the node's replication role
//! (primary or standby) and current WAL position, then publishes a
//! timestamped JSON snapshot to Consul KV under a per-node key. Other
//! agents in the cluster read those records to drive failover and
//! routing; this crate only produces them.
//!
//! ## Module Organization
//!
//! - [`wal`] - WAL location parsing into comparable numeric positions
//! - [`database`] - Connection setup and the replication query contract
//! - [`replication`] - Snapshot model and the per-cycle inspector
//! - [`store`] - KV store contract and the Consul client
//! - [`publisher`] - Snapshot serialization and keyed publication
//! - [`monitor`] - Cycle orchestration and interval scheduling
//! - [`config`] - Agent configuration
//! - [`error`] - Structured error handling
//! - [`logging`] - Tracing subscriber setup
//!
//! ## Failure Model
//!
//! Setup-time connectivity failures abort startup. Everything that goes
//! wrong inside a scheduled cycle is contained by the orchestrator:
//! reported as a warning and dropped, leaving the previously published
//! record in place. A transient failure shows up to consumers as a
//! stale `timestamp`, never as a crash.

pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod monitor;
pub mod publisher;
pub mod replication;
pub mod store;
pub mod wal;

pub use config::AgentConfig;
pub use database::{DatabaseConnection, QueryError, ReplicationQueries};
pub use error::{AgentError, Result};
pub use monitor::{MonitorHandle, StatsCycle, StatsMonitor};
pub use publisher::{PublishError, Publisher};
pub use replication::{CollectError, CollectStage, Inspector, ReplicationRole, ReplicationSnapshot};
pub use store::{ConsulKv, KvStore, StoreError};
pub use wal::{WalParseError, WalPosition};
