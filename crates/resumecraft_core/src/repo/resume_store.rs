//! Saved-resume store contract and SQLite key-value implementation.
//!
//! # Responsibility
//! - Persist the full saved-resume list as one JSON document under a
//!   single named key.
//! - Reconstruct the saved list on session start.
//!
//! # Invariants
//! - `load_all` never fails on absent or malformed stored data; it logs
//!   and yields an empty list.
//! - `save_all` replaces the whole stored document atomically.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::resume::Resume;
use log::warn;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Single named key holding the serialized saved-resume list.
pub const RESUMES_KEY: &str = "resumes";

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence error for saved-resume storage operations.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Serialize(serde_json::Error),
    /// Connection schema is not at the expected migrated version.
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

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize resume list: {err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Storage contract for the saved-resume list.
pub trait ResumeStore {
    /// Reads the full saved list; absent or malformed data yields an empty
    /// list.
    fn load_all(&self) -> StoreResult<Vec<Resume>>;
    /// Writes the full saved list back under the single named key.
    fn save_all(&self, resumes: &[Resume]) -> StoreResult<()>;
}

/// SQLite-backed key-value resume store.
pub struct SqliteResumeStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteResumeStore<'conn> {
    /// Constructs a store from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl ResumeStore for SqliteResumeStore<'_> {
    fn load_all(&self) -> StoreResult<Vec<Resume>> {
        let stored: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [RESUMES_KEY],
                |row| row.get(0),
            )
            .optional()?;

        let Some(text) = stored else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&text) {
            Ok(resumes) => Ok(resumes),
            Err(err) => {
                warn!(
                    "event=store_load module=repo status=malformed key={RESUMES_KEY} error={err}"
                );
                Ok(Vec::new())
            }
        }
    }

    fn save_all(&self, resumes: &[Resume]) -> StoreResult<()> {
        let text = serde_json::to_string(resumes)?;
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![RESUMES_KEY, text],
        )?;
        Ok(())
    }
}

fn ensure_connection_ready(conn: &Connection) -> StoreResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(StoreError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "kv_store")? {
        return Err(StoreError::MissingRequiredTable("kv_store"));
    }

    for column in ["key", "value"] {
        if !table_has_column(conn, "kv_store", column)? {
            return Err(StoreError::MissingRequiredColumn {
                table: "kv_store",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> StoreResult<bool> {
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

fn table_has_column(conn: &Connection, table: &str, column: &str) -> StoreResult<bool> {
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
