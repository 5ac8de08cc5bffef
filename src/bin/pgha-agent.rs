//! Agent entry point: load configuration, connect, schedule cycles,
//! run until interrupted.

use tracing::{error, info};

use pgha_agent::config::AgentConfig;
use pgha_agent::database::DatabaseConnection;
use pgha_agent::logging::init_logging;
use pgha_agent::monitor::{StatsCycle, StatsMonitor};
use pgha_agent::publisher::Publisher;
use pgha_agent::replication::Inspector;
use pgha_agent::store::ConsulKv;

#[tokio::main]
async fn main() {
    init_logging();

    if let Err(e) = run().await {
        error!(error = %e, "pgha-agent startup failed");
        std::process::exit(1);
    }
}

async fn run() -> pgha_agent::Result<()> {
    let config = AgentConfig::from_env()?;

    // Both collaborators must be reachable before any cycle is scheduled.
    let database = DatabaseConnection::connect(&config.postgres_url).await?;
    let store = ConsulKv::new(&config.consul_url, config.store_timeout_ms)?;

    let inspector = Inspector::new(database, config.hostname.clone());
    let publisher = Publisher::new(store, &config.consul_kv_prefix);
    let monitor = StatsMonitor::new(
        StatsCycle::new(inspector, publisher),
        config.poll_interval_secs,
    );

    info!(
        host = %config.hostname,
        interval_secs = config.poll_interval_secs,
        "starting replication stats monitor"
    );
    let handle = monitor.start();

    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
    }

    info!("shutdown signal received");
    handle.stop();
    handle.stopped().await;

    Ok(())
}
