// SQLite counter state + snapshot log. Three tables, created idempotently
// on every invocation: io_state and net_state hold the last absolute
// counter value per source, snapshot_log is append-only JSON payloads.

use crate::delta::CounterState;
use crate::error::ProbeError;
use crate::models::DeltaSnapshot;
use sqlx::Row;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use tracing::instrument;

/// Store file created inside the --store-path directory.
pub const STORE_FILE: &str = "statprobe.db";

pub struct StateRepo {
    pool: SqlitePool,
}

impl StateRepo {
    /// Opens (creating if missing) the store file under `dir`.
    pub async fn connect(dir: &Path) -> Result<Self, ProbeError> {
        std::fs::create_dir_all(dir)
            .map_err(|e| ProbeError::Store(format!("create store dir {}: {}", dir.display(), e)))?;
        let file = dir.join(STORE_FILE);
        let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", file.display()))?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .busy_timeout(std::time::Duration::from_secs(5))
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);
        let pool = SqlitePoolOptions::new().connect_with(opts).await?;
        Ok(Self { pool })
    }

    /// Schema creation, safe to run repeatedly (IF NOT EXISTS).
    pub async fn init(&self) -> Result<(), ProbeError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS io_state (name TEXT PRIMARY KEY, read_count INTEGER NOT NULL, write_count INTEGER NOT NULL)",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS net_state (name TEXT PRIMARY KEY, bytes_sent INTEGER NOT NULL, bytes_recv INTEGER NOT NULL)",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS snapshot_log (id INTEGER PRIMARY KEY AUTOINCREMENT, payload TEXT NOT NULL)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Prior counter values for every known source; empty maps on a fresh
    /// store.
    #[instrument(skip(self), fields(repo = "state", operation = "load_state"))]
    pub async fn load_state(&self) -> Result<CounterState, ProbeError> {
        let mut state = CounterState::default();

        let rows = sqlx::query("SELECT name, read_count, write_count FROM io_state")
            .fetch_all(&self.pool)
            .await?;
        for row in rows {
            let name: String = row.try_get("name")?;
            let read_count: i64 = row.try_get("read_count")?;
            let write_count: i64 = row.try_get("write_count")?;
            state.io_read.insert(name.clone(), read_count);
            state.io_write.insert(name, write_count);
        }

        let rows = sqlx::query("SELECT name, bytes_sent, bytes_recv FROM net_state")
            .fetch_all(&self.pool)
            .await?;
        for row in rows {
            let name: String = row.try_get("name")?;
            let bytes_sent: i64 = row.try_get("bytes_sent")?;
            let bytes_recv: i64 = row.try_get("bytes_recv")?;
            state.net_sent.insert(name.clone(), bytes_sent);
            state.net_recv.insert(name, bytes_recv);
        }

        Ok(state)
    }

    /// Upsert per source, one transaction for the whole state. Runs whether
    /// or not any delta was computable this run.
    #[instrument(skip(self, state), fields(repo = "state", operation = "save_state"))]
    pub async fn save_state(&self, state: &CounterState) -> Result<(), ProbeError> {
        let mut tx = self.pool.begin().await?;

        for (name, read_count) in &state.io_read {
            let write_count = state.io_write.get(name).copied().unwrap_or(0);
            sqlx::query(
                "INSERT OR REPLACE INTO io_state (name, read_count, write_count) VALUES ($1, $2, $3)",
            )
            .bind(name.as_str())
            .bind(*read_count)
            .bind(write_count)
            .execute(&mut *tx)
            .await?;
        }

        for (name, bytes_sent) in &state.net_sent {
            let bytes_recv = state.net_recv.get(name).copied().unwrap_or(0);
            sqlx::query(
                "INSERT OR REPLACE INTO net_state (name, bytes_sent, bytes_recv) VALUES ($1, $2, $3)",
            )
            .bind(name.as_str())
            .bind(*bytes_sent)
            .bind(bytes_recv)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    #[instrument(skip(self, payload), fields(repo = "state", operation = "append_snapshot"))]
    pub async fn append_snapshot(&self, payload: &str) -> Result<(), ProbeError> {
        sqlx::query("INSERT INTO snapshot_log (payload) VALUES ($1)")
            .bind(payload)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Most recent log entries, oldest first.
    pub async fn recent_snapshots(&self, limit: u32) -> Result<Vec<DeltaSnapshot>, ProbeError> {
        let rows = sqlx::query("SELECT payload FROM snapshot_log ORDER BY id DESC LIMIT $1")
            .bind(limit as i64)
            .fetch_all(&self.pool)
            .await?;
        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            let payload: String = row.try_get("payload")?;
            out.push(serde_json::from_str(&payload)?);
        }
        out.reverse();
        Ok(out)
    }
}
