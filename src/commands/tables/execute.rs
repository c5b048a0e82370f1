use std::collections::BTreeSet;
use std::error::Error;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use super::TablesCmd;
use crate::cli::Settings;
use crate::commands::Execute;
use crate::db::{reflect, Database};

#[derive(Error, Debug)]
enum TablesError {
    #[error("Invalid table pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

/// Result of the tables command execution
#[derive(Debug, Default, Serialize)]
pub struct TablesResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    pub tables: BTreeSet<String>,
}

impl Execute for TablesCmd {
    type Output = TablesResult;

    fn execute(self, db: &Database, _settings: &Settings) -> Result<Self::Output, Box<dyn Error>> {
        let matcher = NameMatcher::new(self.pattern.as_deref(), self.regex)?;
        let tables = reflect(db)?
            .table_names()
            .into_iter()
            .filter(|name| matcher.matches(name))
            .collect();

        Ok(TablesResult {
            pattern: self.pattern,
            tables,
        })
    }
}

enum NameMatcher {
    All,
    Substring(String),
    Regex(Regex),
}

impl NameMatcher {
    fn new(pattern: Option<&str>, use_regex: bool) -> Result<Self, TablesError> {
        match pattern {
            None => Ok(NameMatcher::All),
            Some(p) if use_regex => Regex::new(p).map(NameMatcher::Regex).map_err(|e| {
                TablesError::InvalidPattern {
                    pattern: p.to_string(),
                    message: e.to_string(),
                }
            }),
            Some(p) => Ok(NameMatcher::Substring(p.to_string())),
        }
    }

    fn matches(&self, name: &str) -> bool {
        match self {
            NameMatcher::All => true,
            NameMatcher::Substring(s) => name.contains(s.as_str()),
            NameMatcher::Regex(re) => re.is_match(name),
        }
    }
}
