//! Output formatting for tables command results.

use super::execute::TablesResult;
use crate::output::{format_name_set, Outputable};

impl Outputable for TablesResult {
    fn to_table(&self) -> String {
        format_name_set(&self.tables)
    }
}
