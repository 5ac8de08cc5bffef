//! Scripted stand-ins for the database and store contracts.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use pgha_agent::database::{QueryError, ReplicationQueries};
use pgha_agent::store::{KvStore, StoreError};

/// Replication queries answered from pre-loaded scripts, one response
/// consumed per call.
#[derive(Clone, Default)]
pub struct ScriptedQueries {
    inner: Arc<Mutex<ScriptState>>,
}

#[derive(Default)]
struct ScriptState {
    recovery: VecDeque<Result<bool, QueryError>>,
    current: VecDeque<Result<String, QueryError>>,
    last_received: VecDeque<Result<String, QueryError>>,
    current_calls: usize,
    last_received_calls: usize,
}

impl ScriptedQueries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_recovery(&self, response: Result<bool, QueryError>) {
        self.inner.lock().unwrap().recovery.push_back(response);
    }

    pub fn push_current(&self, response: Result<String, QueryError>) {
        self.inner.lock().unwrap().current.push_back(response);
    }

    pub fn push_last_received(&self, response: Result<String, QueryError>) {
        self.inner.lock().unwrap().last_received.push_back(response);
    }

    pub fn current_calls(&self) -> usize {
        self.inner.lock().unwrap().current_calls
    }

    pub fn last_received_calls(&self) -> usize {
        self.inner.lock().unwrap().last_received_calls
    }
}

#[async_trait]
impl ReplicationQueries for ScriptedQueries {
    async fn is_in_recovery(&self) -> Result<bool, QueryError> {
        self.inner
            .lock()
            .unwrap()
            .recovery
            .pop_front()
            .expect("no scripted is_in_recovery response left")
    }

    async fn current_wal_position(&self) -> Result<String, QueryError> {
        let mut state = self.inner.lock().unwrap();
        state.current_calls += 1;
        state
            .current
            .pop_front()
            .expect("no scripted current_wal_position response left")
    }

    async fn last_received_wal_position(&self) -> Result<String, QueryError> {
        let mut state = self.inner.lock().unwrap();
        state.last_received_calls += 1;
        state
            .last_received
            .pop_front()
            .expect("no scripted last_received_wal_position response left")
    }
}

/// In-memory store with a toggleable failure mode. Rejected writes count
/// as attempts but leave stored values untouched, mirroring a store that
/// refuses the write.
#[derive(Clone, Default)]
pub struct MemoryKv {
    inner: Arc<Mutex<MemoryKvState>>,
}

#[derive(Default)]
struct MemoryKvState {
    values: HashMap<String, Vec<u8>>,
    put_attempts: usize,
    reject_writes: bool,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reject_writes(&self, reject: bool) {
        self.inner.lock().unwrap().reject_writes = reject;
    }

    pub fn value(&self, key: &str) -> Option<Vec<u8>> {
        self.inner.lock().unwrap().values.get(key).cloned()
    }

    pub fn json_value(&self, key: &str) -> Option<serde_json::Value> {
        self.value(key)
            .map(|bytes| serde_json::from_slice(&bytes).expect("stored value is not JSON"))
    }

    pub fn keys(&self) -> Vec<String> {
        self.inner.lock().unwrap().values.keys().cloned().collect()
    }

    pub fn put_attempts(&self) -> usize {
        self.inner.lock().unwrap().put_attempts
    }
}

#[async_trait]
impl KvStore for MemoryKv {
    async fn put(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        let mut state = self.inner.lock().unwrap();
        state.put_attempts += 1;

        if state.reject_writes {
            return Err(StoreError {
                key: key.to_string(),
                message: "store rejected the write".to_string(),
            });
        }

        state.values.insert(key.to_string(), value);
        Ok(())
    }
}

pub fn query_failure(query: &'static str) -> QueryError {
    QueryError {
        query,
        message: "connection refused".to_string(),
    }
}
