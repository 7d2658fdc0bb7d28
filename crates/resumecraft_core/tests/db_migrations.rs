use resumecraft_core::db::migrations::latest_version;
use resumecraft_core::db::{open_db, open_db_in_memory, DbError};

#[test]
fn fresh_database_is_at_latest_version() {
    let conn = open_db_in_memory().unwrap();
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
}

#[test]
fn migrated_database_has_kv_store_table() {
    let conn = open_db_in_memory().unwrap();
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'kv_store'
            );",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1);
}

#[test]
fn reopening_migrated_file_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resumes.sqlite3");

    {
        let conn = open_db(&path).unwrap();
        conn.execute(
            "INSERT INTO kv_store (key, value) VALUES ('resumes', '[]');",
            [],
        )
        .unwrap();
    }

    let conn = open_db(&path).unwrap();
    let value: String = conn
        .query_row(
            "SELECT value FROM kv_store WHERE key = 'resumes';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(value, "[]");
}

#[test]
fn newer_schema_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    {
        let conn = rusqlite::Connection::open(&path).unwrap();
        conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version() + 1))
            .unwrap();
    }

    match open_db(&path) {
        Err(DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        }) => {
            assert_eq!(db_version, latest_version() + 1);
            assert_eq!(latest_supported, latest_version());
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected unsupported schema version error"),
    }
}
