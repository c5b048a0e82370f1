//! Schema reflection from the SQLite catalog.

use std::collections::{BTreeMap, BTreeSet};

use rusqlite::Connection;
use serde::Serialize;

use super::{Database, DbError};

/// One column of a reflected table, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDescriptor {
    pub name: String,
    /// Declared type from `CREATE TABLE`; empty when none was given
    pub decl_type: String,
    pub nullable: bool,
    pub primary_key: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableDescriptor {
    pub name: String,
    pub columns: Vec<ColumnDescriptor>,
}

impl TableDescriptor {
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}

/// Table name → descriptor for every user table in a database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SchemaMetadata {
    pub tables: BTreeMap<String, TableDescriptor>,
}

impl SchemaMetadata {
    pub fn table_names(&self) -> BTreeSet<String> {
        self.tables.keys().cloned().collect()
    }

    pub fn table(&self, name: &str) -> Option<&TableDescriptor> {
        self.tables.get(name)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// Read every user table and its columns from the connected database.
///
/// Views and SQLite's internal `sqlite_*` tables are skipped.
pub fn reflect(db: &Database) -> Result<SchemaMetadata, DbError> {
    let conn = db.conn()?;
    let schema_failed = |e: rusqlite::Error| DbError::SchemaFailed {
        message: e.to_string(),
    };

    let names = list_tables(conn).map_err(schema_failed)?;

    let mut tables = BTreeMap::new();
    for name in names {
        let columns = table_columns(conn, &name).map_err(schema_failed)?;
        tracing::trace!(table = %name, columns = columns.len(), "reflected table");
        tables.insert(name.clone(), TableDescriptor { name, columns });
    }

    tracing::debug!(table_count = tables.len(), "schema reflected");
    Ok(SchemaMetadata { tables })
}

fn list_tables(conn: &Connection) -> rusqlite::Result<Vec<String>> {
    // `_` is a LIKE wildcard, so it has to be escaped to match only `sqlite_`
    let mut stmt = conn.prepare(
        "SELECT name FROM sqlite_master \
         WHERE type = 'table' AND name NOT LIKE 'sqlite\\_%' ESCAPE '\\' \
         ORDER BY name",
    )?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(names)
}

fn table_columns(conn: &Connection, table: &str) -> rusqlite::Result<Vec<ColumnDescriptor>> {
    let mut stmt = conn.prepare(
        "SELECT name, type, \"notnull\", pk FROM pragma_table_info(?1) ORDER BY cid",
    )?;
    let columns = stmt
        .query_map([table], |row| {
            Ok(ColumnDescriptor {
                name: row.get(0)?,
                decl_type: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                nullable: row.get::<_, i64>(2)? == 0,
                primary_key: row.get::<_, i64>(3)? > 0,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(columns)
}
