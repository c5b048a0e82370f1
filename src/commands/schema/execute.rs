use std::error::Error;

use serde::Serialize;
use thiserror::Error;

use super::SchemaCmd;
use crate::cli::Settings;
use crate::commands::Execute;
use crate::db::{reflect, Database, TableDescriptor};

#[derive(Error, Debug)]
enum SchemaError {
    #[error("Table not found: {name}")]
    TableNotFound { name: String },
}

/// Result of the schema command execution
#[derive(Debug, Default, Serialize)]
pub struct SchemaResult {
    pub tables: Vec<TableDescriptor>,
}

impl Execute for SchemaCmd {
    type Output = SchemaResult;

    fn execute(self, db: &Database, _settings: &Settings) -> Result<Self::Output, Box<dyn Error>> {
        let mut schema = reflect(db)?;

        let tables = match self.table {
            Some(name) => match schema.tables.remove(&name) {
                Some(table) => vec![table],
                None => return Err(SchemaError::TableNotFound { name }.into()),
            },
            None => schema.tables.into_values().collect(),
        };

        Ok(SchemaResult { tables })
    }
}
