//! Read-only access to SQLite database files.
//!
//! This module is the data layer of the tool:
//! - Connection management with a guaranteed release on every exit path
//! - Schema reflection (tables and their ordered columns)
//! - Query execution returning column names and typed rows
//!
//! # Type Decisions
//!
//! **Why our own `Value` instead of `rusqlite::types::Value`?**
//! Results outlive the connection (display happens after release) and must
//! serialize to JSON/toon. A local enum lets us derive the rendering and
//! serialization rules in one place.
//!
//! **Why `BTreeMap` for schema metadata?**
//! The table set is unordered by contract, but sorted iteration keeps the
//! printed output stable between runs.

mod connection;
mod escape;
mod query;
mod schema;
mod value;

pub use connection::{open_db, with_connection, ConnectionState, Database};
pub use escape::quote_identifier;
pub use query::{execute_query, select_all, QueryResult};
pub use schema::{reflect, ColumnDescriptor, SchemaMetadata, TableDescriptor};
pub use value::Value;

use thiserror::Error;

/// Name of the table loaded when none is given.
pub const DEFAULT_TABLE: &str = "Employee";

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to open database '{path}': {message}")]
    ConnectionFailed { path: String, message: String },

    #[error("Failed to read schema: {message}")]
    SchemaFailed { message: String },

    #[error("Query failed: {message}")]
    QueryFailed { message: String },
}

/// Coarse classification of a [`DbError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Connection,
    Schema,
    Query,
}

impl DbError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DbError::ConnectionFailed { .. } => ErrorKind::Connection,
            DbError::SchemaFailed { .. } => ErrorKind::Schema,
            DbError::QueryFailed { .. } => ErrorKind::Query,
        }
    }
}
