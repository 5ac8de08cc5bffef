//! # Cycle Orchestration and Scheduling
//!
//! One cycle is collect-then-publish with every failure contained and
//! reported; the monitor runs cycles on a fixed interval until stopped.

pub mod cycle;
pub mod scheduler;

pub use cycle::StatsCycle;
pub use scheduler::{MonitorHandle, StatsMonitor};
