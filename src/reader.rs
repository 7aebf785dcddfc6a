//! Read-only access to a cookie store file.
//!
//! Opening is deliberately infallible: a missing or unreadable store is a
//! normal condition (the user may simply not have that browser), so the
//! reader records it as an unusable state and the error surfaces later,
//! at parse time. The connection handle is released on every exit path by
//! `rusqlite::Connection`'s drop.

use std::path::Path;

use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags, Row};

use crate::error::StoreError;
use crate::mapper::RawRow;

/// Exclusive read-only handle to a single cookie store file.
pub struct StoreReader {
    conn: Option<Connection>,
}

impl StoreReader {
    /// Attempt a read-only connection to `path`. Any failure (nonexistent
    /// file, permissions, corrupt header) yields an unusable reader.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let conn =
            Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY).ok();
        Self { conn }
    }

    /// Whether the underlying connection was established.
    pub fn is_usable(&self) -> bool {
        self.conn.is_some()
    }

    /// Run `sql`, invoking `row_callback` once per result row with the six
    /// raw columns. Engine-level failure aborts with the engine's
    /// diagnostic text; individual rows are never skipped here.
    pub(crate) fn execute_query<F>(&self, sql: &str, mut row_callback: F) -> Result<(), StoreError>
    where
        F: FnMut(&RawRow),
    {
        let conn = self.conn.as_ref().ok_or(StoreError::StoreUnavailable)?;
        let mut stmt = conn.prepare(sql)?;
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            let raw = read_columns(row)?;
            row_callback(&raw);
        }
        Ok(())
    }
}

/// Stringify the six columns the way `sqlite3_exec` presents them: NULL
/// stays absent, everything else becomes its text representation.
fn read_columns(row: &Row<'_>) -> Result<RawRow, StoreError> {
    let mut raw: RawRow = Default::default();
    for (idx, slot) in raw.iter_mut().enumerate() {
        *slot = match row.get_ref(idx)? {
            ValueRef::Null => None,
            ValueRef::Integer(i) => Some(i.to_string()),
            ValueRef::Real(f) => Some(f.to_string()),
            ValueRef::Text(t) => Some(String::from_utf8_lossy(t).into_owned()),
            ValueRef::Blob(b) => Some(String::from_utf8_lossy(b).into_owned()),
        };
    }
    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_nonexistent_path_is_unusable() {
        let reader = StoreReader::open("/nonexistent/cookies.sqlite");
        assert!(!reader.is_usable());
    }

    #[test]
    fn test_execute_query_on_unusable_reader() {
        let reader = StoreReader::open("/nonexistent/cookies.sqlite");
        let err = reader.execute_query("SELECT 1", |_| {}).unwrap_err();
        assert_eq!(err, StoreError::StoreUnavailable);
    }

    #[test]
    fn test_non_database_file_fails_by_query_time() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("not-a-db.sqlite");
        std::fs::write(&path, "definitely not sqlite").unwrap();
        let reader = StoreReader::open(&path);
        // SQLite defers header validation until first use on some
        // versions, so accept either an unusable reader or a query-time
        // failure.
        if reader.is_usable() {
            assert!(reader.execute_query("SELECT 1 FROM sqlite_master", |_| {}).is_err());
        }
    }
}
