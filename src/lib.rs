//! sqlpeek library - read-only SQLite inspection
//!
//! Provides the connection, schema reflection, query execution, and result
//! materialization used by the `sqlpeek` binary, plus the command and output
//! formatting infrastructure around them.

pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod frame;
pub mod logging;
pub mod output;

#[macro_use]
pub mod test_macros;

#[cfg(test)]
pub mod fixtures;

#[cfg(test)]
pub mod test_utils;
