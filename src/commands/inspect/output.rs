//! Output formatting for inspect command results.

use super::execute::InspectResult;
use crate::output::{format_name_set, Outputable};

impl Outputable for InspectResult {
    fn to_table(&self) -> String {
        let lines = [
            format_name_set(&self.tables),
            String::new(),
            self.head.render(&self.render),
        ];
        lines.join("\n")
    }
}
