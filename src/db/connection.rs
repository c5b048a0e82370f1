//! Database connection management.

use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};

use super::DbError;

/// Lifecycle of a connection handle: `Disconnected → Connected → Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connected,
    Closed,
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConnectionState::Disconnected => "disconnected",
            ConnectionState::Connected => "connected",
            ConnectionState::Closed => "closed",
        };
        f.write_str(name)
    }
}

/// An open, read-only connection to a SQLite file.
///
/// The underlying connection is released either by [`Database::close`] or,
/// on any other exit path, when the value is dropped.
pub struct Database {
    conn: Option<Connection>,
    path: PathBuf,
}

impl fmt::Debug for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Database")
            .field("path", &self.path)
            .field("state", &self.state())
            .finish()
    }
}

/// Open a SQLite database file for reading.
///
/// The file must already exist; nothing is created. The schema version is
/// read right away so that a file which is not a SQLite database fails here
/// rather than on the first query.
pub fn open_db(path: &Path) -> Result<Database, DbError> {
    tracing::debug!(path = %path.display(), state = %ConnectionState::Disconnected, "opening database");

    let connection_failed = |e: rusqlite::Error| DbError::ConnectionFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    };

    let flags = OpenFlags::SQLITE_OPEN_READ_ONLY
        | OpenFlags::SQLITE_OPEN_URI
        | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    let conn = Connection::open_with_flags(path, flags).map_err(connection_failed)?;

    let schema_version: i64 = conn
        .query_row("PRAGMA schema_version", [], |row| row.get(0))
        .map_err(connection_failed)?;

    tracing::info!(
        path = %path.display(),
        schema_version,
        state = %ConnectionState::Connected,
        "database connection established"
    );

    Ok(Database {
        conn: Some(conn),
        path: path.to_path_buf(),
    })
}

impl Database {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn state(&self) -> ConnectionState {
        if self.conn.is_some() {
            ConnectionState::Connected
        } else {
            ConnectionState::Closed
        }
    }

    /// Borrow the live connection.
    pub(crate) fn conn(&self) -> Result<&Connection, DbError> {
        self.conn.as_ref().ok_or_else(|| DbError::QueryFailed {
            message: format!("connection to '{}' is closed", self.path.display()),
        })
    }

    /// Release the connection, reporting any failure to close it.
    pub fn close(mut self) -> Result<(), DbError> {
        match self.conn.take() {
            Some(conn) => conn.close().map_err(|(_, e)| DbError::ConnectionFailed {
                path: self.path.display().to_string(),
                message: format!("failed to close: {}", e),
            })?,
            None => return Ok(()),
        }
        tracing::debug!(path = %self.path.display(), state = %ConnectionState::Closed, "database connection released");
        Ok(())
    }
}

impl Drop for Database {
    fn drop(&mut self) {
        if let Some(conn) = self.conn.take() {
            match conn.close() {
                Ok(()) => tracing::debug!(
                    path = %self.path.display(),
                    state = %ConnectionState::Closed,
                    "database connection released on drop"
                ),
                Err((_, e)) => tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "failed to close database connection"
                ),
            }
        }
    }
}

/// Open `path`, run `f` against the connection, and release it.
///
/// The connection is closed whether `f` succeeds or fails. An error from `f`
/// takes precedence over an error from closing.
pub fn with_connection<T, F>(path: &Path, f: F) -> Result<T, Box<dyn Error>>
where
    F: FnOnce(&Database) -> Result<T, Box<dyn Error>>,
{
    let db = open_db(path)?;
    let value = f(&db)?;
    db.close()?;
    Ok(value)
}
