//! Shared test utilities for execute and integration tests.
//!
//! This module provides common helpers used across command execute tests.

use std::error::Error;
use std::io::Write;
use std::path::Path;

use rusqlite::Connection;
use tempfile::NamedTempFile;

use crate::cli::Settings;
use crate::commands::Execute;
use crate::db::with_connection;

/// Create a temporary file containing the given content.
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file
}

/// Create a SQLite database file populated by a SQL script.
///
/// The script runs over a writable connection which is closed before the
/// file is handed back, so the code under test sees a settled file.
pub fn create_db_file(sql: &str) -> NamedTempFile {
    let file = NamedTempFile::new().expect("Failed to create temp db file");
    let conn = Connection::open(file.path()).expect("Failed to open temp db");
    conn.execute_batch(sql).expect("Fixture SQL should run");
    conn.close().map_err(|(_, e)| e).expect("Failed to close temp db");
    file
}

/// Execute a command against a database file with default settings.
pub fn execute_cmd<C: Execute>(cmd: C, db_path: &Path) -> Result<C::Output, Box<dyn Error>> {
    execute_cmd_with(cmd, &Settings::default(), db_path)
}

/// Execute a command against a database file with explicit settings.
pub fn execute_cmd_with<C: Execute>(
    cmd: C,
    settings: &Settings,
    db_path: &Path,
) -> Result<C::Output, Box<dyn Error>> {
    with_connection(db_path, |db| cmd.execute(db, settings))
}
