use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

use crate::database::{QueryError, ReplicationQueries};
use crate::error::{AgentError, Result};

/// Owned connection to the observed node.
///
/// The pool is capped at a single connection: the agent issues its
/// queries serially and never needs more than one in flight.
pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    /// Connect and verify the database answers.
    ///
    /// Failure here is fatal to startup; the agent must not begin
    /// scheduling cycles without a live connection.
    pub async fn connect(postgres_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect(postgres_url)
            .await
            .map_err(|e| AgentError::DatabaseError(format!("Postgres connect failed: {e}")))?;

        let connection = Self { pool };
        connection.ping().await?;

        Ok(connection)
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn ping(&self) -> Result<()> {
        let row = sqlx::query("SELECT 1 AS alive")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AgentError::DatabaseError(format!("Postgres ping failed: {e}")))?;

        let alive: i32 = row.get("alive");
        if alive == 1 {
            Ok(())
        } else {
            Err(AgentError::DatabaseError(
                "Postgres ping returned an unexpected row".to_string(),
            ))
        }
    }

    pub async fn close(self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl ReplicationQueries for DatabaseConnection {
    async fn is_in_recovery(&self) -> std::result::Result<bool, QueryError> {
        let row = sqlx::query("SELECT pg_is_in_recovery()")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| QueryError::new("pg_is_in_recovery", e))?;

        Ok(row.get(0))
    }

    async fn current_wal_position(&self) -> std::result::Result<String, QueryError> {
        let row = sqlx::query("SELECT pg_current_wal_lsn()::text")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| QueryError::new("pg_current_wal_lsn", e))?;

        Ok(row.get(0))
    }

    async fn last_received_wal_position(&self) -> std::result::Result<String, QueryError> {
        let row = sqlx::query("SELECT pg_last_wal_receive_lsn()::text")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| QueryError::new("pg_last_wal_receive_lsn", e))?;

        Ok(row.get(0))
    }
}
