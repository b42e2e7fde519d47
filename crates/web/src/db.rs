//! SQLite persistence for daily winners.

use std::path::Path;
use std::sync::Arc;

use lum_common::types::{DailyResult, Winner, WinnerTally};
use rusqlite::{params, Connection};
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::error::WebError;

/// Database handle. Clones are cheap and share one connection.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Open or create the database at `path`. Use `":memory:"` for tests.
    pub fn open(path: &str) -> Result<Self, WebError> {
        let conn = if path == ":memory:" {
            Connection::open_in_memory()?
        } else {
            ensure_parent_dir(path);
            Connection::open(path)?
        };

        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA busy_timeout=5000;")?;

        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.ensure_schema()?;
        Ok(db)
    }

    /// Idempotent schema creation, run on every open.
    fn ensure_schema(&self) -> Result<(), WebError> {
        // Nothing else holds the connection yet; open is single-threaded.
        let conn = self.conn.try_lock().map_err(|_| {
            WebError::Database("could not lock database for schema setup".to_string())
        })?;

        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS winners (
                date TEXT PRIMARY KEY,
                winner TEXT NOT NULL CHECK (winner IN ('nico', 'nena')),
                recorded_at INTEGER NOT NULL,
                source TEXT NOT NULL DEFAULT 'ui',
                note TEXT NULL
            );",
        )?;

        info!("database schema ensured");
        Ok(())
    }

    /// Insert the row for `date`, or overwrite it entirely if present.
    pub async fn upsert_day(
        &self,
        date: &str,
        winner: Winner,
        recorded_at: i64,
        source: &str,
        note: Option<&str>,
    ) -> Result<(), WebError> {
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO winners (date, winner, recorded_at, source, note)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(date) DO UPDATE SET
                 winner = excluded.winner,
                 recorded_at = excluded.recorded_at,
                 source = excluded.source,
                 note = excluded.note",
            params![date, winner.token(), recorded_at, source, note],
        )?;
        Ok(())
    }

    /// Point lookup by calendar date.
    pub async fn day(&self, date: &str) -> Result<Option<DailyResult>, WebError> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(
            "SELECT date, winner, recorded_at, source, note FROM winners WHERE date = ?1",
        )?;
        let mut rows = stmt.query_map(params![date], row_to_result)?;
        Ok(rows.next().transpose()?)
    }

    /// Total wins per contestant, most wins first. Tie order is whatever
    /// SQLite yields and is not guaranteed stable.
    pub async fn statistics(&self) -> Result<Vec<WinnerTally>, WebError> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(
            "SELECT winner, COUNT(*) AS count
             FROM winners
             GROUP BY winner
             ORDER BY count DESC",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(WinnerTally {
                    winner: winner_from_column(row, 0)?,
                    count: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Every recorded day, most recent first.
    pub async fn history(&self) -> Result<Vec<DailyResult>, WebError> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(
            "SELECT date, winner, recorded_at, source, note FROM winners ORDER BY date DESC",
        )?;
        let rows = stmt
            .query_map([], row_to_result)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

fn ensure_parent_dir(path: &str) {
    let Some(dir) = Path::new(path)
        .parent()
        .filter(|d| !d.as_os_str().is_empty())
    else {
        return;
    };
    // Best effort: a truly unusable path fails loudly at open below.
    if let Err(e) = std::fs::create_dir_all(dir) {
        warn!(dir = %dir.display(), error = %e, "could not create data directory");
    }
}

fn winner_from_column(row: &rusqlite::Row<'_>, idx: usize) -> rusqlite::Result<Winner> {
    let token: String = row.get(idx)?;
    Winner::from_token(&token).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            rusqlite::types::Type::Text,
            format!("unrecognized winner token: {token}").into(),
        )
    })
}

fn row_to_result(row: &rusqlite::Row<'_>) -> rusqlite::Result<DailyResult> {
    Ok(DailyResult {
        date: row.get(0)?,
        winner: winner_from_column(row, 1)?,
        recorded_at: row.get(2)?,
        source: row.get(3)?,
        note: row.get(4)?,
    })
}
