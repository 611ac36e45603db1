//! Board repository contract and SQLite slot implementation.
//!
//! # Responsibility
//! - Persist the full task collection into one durable key-value slot.
//! - Keep SQL and payload encoding details inside the persistence boundary.
//!
//! # Invariants
//! - The slot is only ever replaced wholesale; there is no partial-write API.
//! - A reader of the slot never observes a half-written collection: the
//!   replace happens inside a single SQLite statement.
//! - A corrupt payload is reported and read as an empty collection, never
//!   surfaced as an error to callers.
//!
//! # See also
//! - docs/architecture/persistence.md

use crate::db::{migrations::latest_version, DbError};
use crate::model::task::Task;
use log::{debug, error, info};
use rusqlite::{params, Connection};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Name of the slot holding the serialized task collection.
pub const TASKS_SLOT: &str = "tasks";

pub type RepoResult<T> = Result<T, RepoError>;

/// Persistence error for the durable slot.
///
/// This is the board's `StoreError`: always non-fatal to the in-memory
/// state, which stays authoritative when a durable write fails.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// The full collection could not be encoded for the slot payload.
    Serialize(serde_json::Error),
    /// Connection has not been migrated via `open_db`/`open_db_in_memory`.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to encode task collection: {err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection is not migrated: schema version {actual_version}, expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => write!(f, "required table `{table}` is missing"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
            Self::MissingRequiredTable(_) => None,
            Self::MissingRequiredColumn { .. } => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Repository interface for durable board persistence.
///
/// The trait is the seam for swapping storage backends; a networked store
/// would implement the same two operations. Exactly one production
/// implementation exists today.
pub trait BoardRepository {
    /// Reads the full task collection from the durable slot.
    ///
    /// # Contract
    /// - Absent slot reads as an empty collection.
    /// - A payload that fails to decode is reported via logging and also
    ///   reads as an empty collection; the next successful save heals it.
    ///
    /// # Errors
    /// - [`RepoError::Db`] for storage transport failures.
    fn load_tasks(&self) -> RepoResult<Vec<Task>>;

    /// Serializes the full collection and atomically replaces the slot
    /// payload, whatever it held before.
    fn save_tasks(&self, tasks: &[Task]) -> RepoResult<()>;
}

/// SQLite-backed slot repository.
pub struct SqliteBoardRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBoardRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    ///
    /// # Errors
    /// - [`RepoError::UninitializedConnection`] when migrations have not run.
    /// - [`RepoError::MissingRequiredTable`]/[`RepoError::MissingRequiredColumn`]
    ///   when the slot schema is absent despite a current version marker.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl BoardRepository for SqliteBoardRepository<'_> {
    fn load_tasks(&self) -> RepoResult<Vec<Task>> {
        let started_at = Instant::now();
        let mut stmt = self
            .conn
            .prepare("SELECT payload FROM slots WHERE slot = ?1;")?;
        let mut rows = stmt.query([TASKS_SLOT])?;

        let Some(row) = rows.next()? else {
            info!(
                "event=slot_load module=repo status=ok outcome=absent task_count=0 duration_ms={}",
                started_at.elapsed().as_millis()
            );
            return Ok(Vec::new());
        };

        let payload: String = row.get("payload")?;
        match serde_json::from_str::<Vec<Task>>(&payload) {
            Ok(tasks) => {
                info!(
                    "event=slot_load module=repo status=ok outcome=loaded task_count={} duration_ms={}",
                    tasks.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(tasks)
            }
            Err(err) => {
                error!(
                    "event=slot_load module=repo status=error error_code=payload_corrupt payload_bytes={} error={err}",
                    payload.len()
                );
                Ok(Vec::new())
            }
        }
    }

    fn save_tasks(&self, tasks: &[Task]) -> RepoResult<()> {
        let started_at = Instant::now();
        let payload = serde_json::to_string(tasks)?;

        let write = self.conn.execute(
            "INSERT INTO slots (slot, payload, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(slot) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at;",
            params![TASKS_SLOT, payload, now_epoch_ms()],
        );

        match write {
            Ok(_) => {
                debug!(
                    "event=slot_save module=repo status=ok task_count={} payload_bytes={} duration_ms={}",
                    tasks.len(),
                    payload.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=slot_save module=repo status=error task_count={} error={err}",
                    tasks.len()
                );
                Err(err.into())
            }
        }
    }
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    let expected_version = latest_version();
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "slots")? {
        return Err(RepoError::MissingRequiredTable("slots"));
    }

    for column in ["slot", "payload", "updated_at"] {
        if !table_has_column(conn, "slots", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "slots",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64)
}
