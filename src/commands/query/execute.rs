use std::error::Error;

use serde::Serialize;

use super::QueryCmd;
use crate::cli::Settings;
use crate::commands::Execute;
use crate::db::{execute_query, Database};
use crate::frame::{DataFrame, RenderOptions};

/// Result of the query command execution
#[derive(Debug, Serialize)]
pub struct QueryOutput {
    pub sql: String,
    /// Rows the statement returned before `head` was applied
    pub total_rows: usize,
    pub rows: DataFrame,
    #[serde(skip)]
    pub render: RenderOptions,
}

impl Execute for QueryCmd {
    type Output = QueryOutput;

    fn execute(self, db: &Database, settings: &Settings) -> Result<Self::Output, Box<dyn Error>> {
        let frame = DataFrame::try_from(execute_query(db, &self.sql)?)?;
        let total_rows = frame.len();

        let rows = if self.all {
            frame
        } else {
            frame.head(self.head.map_or(settings.head, |n| n as usize))
        };

        Ok(QueryOutput {
            sql: self.sql,
            total_rows,
            rows,
            render: settings.render,
        })
    }
}
