use tracing::{debug, warn};

use crate::database::ReplicationQueries;
use crate::publisher::Publisher;
use crate::replication::Inspector;
use crate::store::KvStore;

/// One collect-then-publish attempt.
///
/// Nothing escapes `run_once`: a failed collection skips publication, a
/// failed publication leaves the previously stored record authoritative,
/// and either failure surfaces as a single warning event. A bad cycle
/// never halts the cycles after it.
pub struct StatsCycle<Q, K> {
    inspector: Inspector<Q>,
    publisher: Publisher<K>,
}

impl<Q: ReplicationQueries, K: KvStore> StatsCycle<Q, K> {
    pub fn new(inspector: Inspector<Q>, publisher: Publisher<K>) -> Self {
        Self {
            inspector,
            publisher,
        }
    }

    pub async fn run_once(&self) {
        let snapshot = match self.inspector.collect().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(
                    host = %self.inspector.host(),
                    stage = e.stage().as_str(),
                    error = %e,
                    "replication stats collection failed"
                );
                return;
            }
        };

        if let Err(e) = self.publisher.publish(&snapshot).await {
            warn!(
                host = %snapshot.host,
                key = %self.publisher.key_for(&snapshot.host),
                error = %e,
                "replication stats publication failed"
            );
            return;
        }

        debug!(
            host = %snapshot.host,
            role = %snapshot.role,
            position = %snapshot.position,
            "replication stats published"
        );
    }
}
