use std::collections::BTreeSet;
use std::error::Error;

use serde::Serialize;
use thiserror::Error;

use super::InspectCmd;
use crate::cli::Settings;
use crate::commands::Execute;
use crate::db::{execute_query, reflect, select_all, Database, DbError};
use crate::frame::{DataFrame, RenderOptions};

/// The table could not be loaded after the schema was reflected.
///
/// Carries the table set so it can still be shown.
#[derive(Error, Debug)]
#[error("{source}")]
pub struct TableLoadError {
    pub tables: BTreeSet<String>,
    pub source: DbError,
}

/// Result of the inspect command: the table set and the first rows of one table
#[derive(Debug, Serialize)]
pub struct InspectResult {
    pub tables: BTreeSet<String>,
    pub table: String,
    /// Rows the query returned before `head` was applied
    pub total_rows: usize,
    pub head: DataFrame,
    #[serde(skip)]
    pub render: RenderOptions,
}

impl Execute for InspectCmd {
    type Output = InspectResult;

    fn execute(self, db: &Database, settings: &Settings) -> Result<Self::Output, Box<dyn Error>> {
        let table = self.table.unwrap_or_else(|| settings.table.clone());
        let head = self.head.map_or(settings.head, |n| n as usize);

        let schema = reflect(db)?;
        let tables = schema.table_names();

        let result = match execute_query(db, &select_all(&table)) {
            Ok(result) => result,
            Err(source) => return Err(TableLoadError { tables, source }.into()),
        };
        let frame = DataFrame::try_from(result)?;
        tracing::info!(table = %table, rows = frame.len(), "table loaded");

        Ok(InspectResult {
            tables,
            table,
            total_rows: frame.len(),
            head: frame.head(head),
            render: settings.render,
        })
    }
}
