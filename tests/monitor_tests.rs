//! Scheduler behavior under paused time: fixed-interval ticks, tick
//! independence across failed cycles, and stop semantics.

mod common;

use std::time::Duration;

use common::{query_failure, MemoryKv, ScriptedQueries};
use pgha_agent::monitor::{StatsCycle, StatsMonitor};
use pgha_agent::publisher::Publisher;
use pgha_agent::replication::Inspector;

fn monitor_for(
    queries: &ScriptedQueries,
    store: &MemoryKv,
    poll_interval_secs: u64,
) -> StatsMonitor<ScriptedQueries, MemoryKv> {
    StatsMonitor::new(
        StatsCycle::new(
            Inspector::new(queries.clone(), "db-1"),
            Publisher::new(store.clone(), "pgha"),
        ),
        poll_interval_secs,
    )
}

fn push_success(queries: &ScriptedQueries, raw: &str) {
    queries.push_recovery(Ok(false));
    queries.push_current(Ok(raw.to_string()));
}

#[tokio::test(start_paused = true)]
async fn cycles_fire_on_the_configured_interval() {
    let queries = ScriptedQueries::new();
    let store = MemoryKv::new();
    for _ in 0..3 {
        push_success(&queries, "1/0");
    }

    let handle = monitor_for(&queries, &store, 10).start();

    // Ticks land at t=0, t=10 and t=20.
    tokio::time::sleep(Duration::from_secs(25)).await;
    assert_eq!(store.put_attempts(), 3);

    handle.stop();
    handle.stopped().await;
}

#[tokio::test(start_paused = true)]
async fn stop_prevents_further_cycles() {
    let queries = ScriptedQueries::new();
    let store = MemoryKv::new();
    push_success(&queries, "1/0");

    let handle = monitor_for(&queries, &store, 10).start();

    tokio::time::sleep(Duration::from_secs(5)).await;
    handle.stop();
    handle.stopped().await;
    let published = store.put_attempts();

    // Nothing fires after the task has exited; any further tick would
    // also panic the scripted queries, which hold no more responses.
    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(store.put_attempts(), published);
    assert_eq!(published, 1);
}

#[tokio::test(start_paused = true)]
async fn a_failed_tick_does_not_halt_the_following_one() {
    let queries = ScriptedQueries::new();
    let store = MemoryKv::new();
    queries.push_recovery(Err(query_failure("pg_is_in_recovery")));
    push_success(&queries, "2/0");

    let handle = monitor_for(&queries, &store, 10).start();

    tokio::time::sleep(Duration::from_secs(15)).await;
    handle.stop();
    handle.stopped().await;

    let record = store
        .json_value("pgha/replication/stats/db-1")
        .expect("second tick published despite first failing");
    assert_eq!(record["xlog"], 2);
    assert_eq!(store.put_attempts(), 1);
}
