use std::time::Duration;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::info;

use crate::database::ReplicationQueries;
use crate::monitor::cycle::StatsCycle;
use crate::store::KvStore;

/// Runs a [`StatsCycle`] on a fixed interval until stopped.
///
/// Cycles are serialized: the loop awaits one cycle to completion before
/// taking the next tick, and ticks that fire while a cycle is still
/// running are skipped rather than queued. The stored record therefore
/// always reflects the most recently completed observation.
pub struct StatsMonitor<Q, K> {
    cycle: StatsCycle<Q, K>,
    poll_interval: Duration,
}

/// Control handle for a started monitor.
pub struct MonitorHandle {
    shutdown_tx: broadcast::Sender<()>,
    task: JoinHandle<()>,
}

impl<Q, K> StatsMonitor<Q, K>
where
    Q: ReplicationQueries + 'static,
    K: KvStore + 'static,
{
    pub fn new(cycle: StatsCycle<Q, K>, poll_interval_secs: u64) -> Self {
        Self {
            cycle,
            poll_interval: Duration::from_secs(poll_interval_secs),
        }
    }

    /// Spawn the polling loop. The first cycle runs immediately, then
    /// one per interval.
    pub fn start(self) -> MonitorHandle {
        let (shutdown_tx, mut shutdown_rx) = broadcast::channel(1);
        let cycle = self.cycle;
        let poll_interval = self.poll_interval;

        let task = tokio::spawn(async move {
            let mut ticker = interval(poll_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        cycle.run_once().await;
                    }
                    _ = shutdown_rx.recv() => {
                        info!("replication stats monitor shutting down");
                        break;
                    }
                }
            }
        });

        MonitorHandle { shutdown_tx, task }
    }
}

impl MonitorHandle {
    /// Stop scheduling new cycles. An in-flight cycle completes
    /// naturally; it is not cancelled mid-call.
    pub fn stop(&self) {
        let _ = self.shutdown_tx.send(());
    }

    /// Wait for the polling task to exit.
    pub async fn stopped(self) {
        let _ = self.task.await;
    }
}
