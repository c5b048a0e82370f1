//! Query execution.

use serde::Serialize;

use super::escape::quote_identifier;
use super::{Database, DbError, Value};

/// Result of a query execution: column names and rows in result order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

/// Build `SELECT * FROM "<table>"` for a table name.
pub fn select_all(table: &str) -> String {
    format!("SELECT * FROM {}", quote_identifier(table))
}

/// Run a read-only statement and collect every row.
///
/// Statements that would modify the database are rejected before they run.
pub fn execute_query(db: &Database, sql: &str) -> Result<QueryResult, DbError> {
    let query_failed = |e: rusqlite::Error| DbError::QueryFailed {
        message: e.to_string(),
    };

    let conn = db.conn()?;
    let mut stmt = conn.prepare(sql).map_err(query_failed)?;

    if !stmt.readonly() {
        return Err(DbError::QueryFailed {
            message: format!("only read-only statements are allowed: {}", sql.trim()),
        });
    }

    let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
    let column_count = columns.len();

    let mut rows = Vec::new();
    let mut query_rows = stmt.query([]).map_err(query_failed)?;
    while let Some(row) = query_rows.next().map_err(query_failed)? {
        let mut values = Vec::with_capacity(column_count);
        for i in 0..column_count {
            values.push(Value::from(row.get_ref(i).map_err(query_failed)?));
        }
        rows.push(values);
    }

    tracing::debug!(columns = column_count, rows = rows.len(), "query executed");
    Ok(QueryResult { columns, rows })
}
