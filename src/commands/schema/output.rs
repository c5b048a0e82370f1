//! Output formatting for schema command results.

use super::execute::SchemaResult;
use crate::db::ColumnDescriptor;
use crate::output::Outputable;

impl Outputable for SchemaResult {
    fn to_table(&self) -> String {
        if self.tables.is_empty() {
            return "No tables found.".to_string();
        }

        let mut lines = Vec::new();
        for (i, table) in self.tables.iter().enumerate() {
            if i > 0 {
                lines.push(String::new());
            }
            lines.push(format!("{} ({} column(s))", table.name, table.columns.len()));

            let name_width = table
                .columns
                .iter()
                .map(|c| c.name.chars().count())
                .max()
                .unwrap_or(0);
            for column in &table.columns {
                lines.push(format_column(column, name_width));
            }
        }

        lines.join("\n")
    }
}

fn format_column(column: &ColumnDescriptor, name_width: usize) -> String {
    let decl_type = if column.decl_type.is_empty() {
        "-"
    } else {
        column.decl_type.as_str()
    };

    let mut line = format!("  {:<width$}  {}", column.name, decl_type, width = name_width);
    if column.primary_key {
        line.push_str("  PRIMARY KEY");
    }
    if !column.nullable {
        line.push_str("  NOT NULL");
    }
    line
}
