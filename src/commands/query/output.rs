//! Output formatting for query command results.

use super::execute::QueryOutput;
use crate::output::Outputable;

impl Outputable for QueryOutput {
    fn to_table(&self) -> String {
        let mut lines = vec![self.rows.render(&self.render)];
        if self.rows.len() < self.total_rows {
            lines.push(String::new());
            lines.push(format!("({} of {} rows shown)", self.rows.len(), self.total_rows));
        }
        lines.join("\n")
    }
}
