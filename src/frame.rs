//! In-memory tabular results.
//!
//! A [`DataFrame`] holds column names and rows exactly as a query produced
//! them. Rendering is a pure function ([`render`]) so it can be tested
//! without a database or a terminal.

use serde::Serialize;
use thiserror::Error;

use crate::db::{QueryResult, Value};

/// Number of rows shown by default.
pub const DEFAULT_HEAD: usize = 5;

/// Default cap on rendered cell width.
pub const DEFAULT_MAX_COL_WIDTH: usize = 50;

const COLUMN_GAP: &str = "  ";
const ELLIPSIS: &str = "...";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FrameError {
    #[error("Row {row} has {actual} value(s), expected {expected}")]
    ShapeMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DataFrame {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl DataFrame {
    /// Build a frame, checking that every row matches the header width.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self, FrameError> {
        if let Some((row, values)) = rows
            .iter()
            .enumerate()
            .find(|(_, values)| values.len() != columns.len())
        {
            return Err(FrameError::ShapeMismatch {
                row,
                expected: columns.len(),
                actual: values.len(),
            });
        }
        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The first `min(n, len)` rows, in order.
    pub fn head(&self, n: usize) -> DataFrame {
        DataFrame {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }

    /// Values of one column in row order, or `None` if there is no such column.
    pub fn column(&self, name: &str) -> Option<Vec<&Value>> {
        let idx = self.columns.iter().position(|c| c == name)?;
        Some(self.rows.iter().map(|row| &row[idx]).collect())
    }

    pub fn render(&self, options: &RenderOptions) -> String {
        render(&self.columns, &self.rows, options)
    }
}

impl TryFrom<QueryResult> for DataFrame {
    type Error = FrameError;

    fn try_from(result: QueryResult) -> Result<Self, Self::Error> {
        DataFrame::new(result.columns, result.rows)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Cells wider than this are cut and end in `...`
    pub max_col_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_col_width: DEFAULT_MAX_COL_WIDTH,
        }
    }
}

/// Render rows as a right-aligned text table with a leading row index.
///
/// ```text
///    EmployeeId  LastName  FirstName
/// 0           1     Adams     Andrew
/// 1           2   Edwards      Nancy
/// ```
pub fn render(columns: &[String], rows: &[Vec<Value>], options: &RenderOptions) -> String {
    if rows.is_empty() {
        return format!("Empty result\nColumns: [{}]", columns.join(", "));
    }

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|value| truncate(&value.to_string(), options.max_col_width))
                .collect()
        })
        .collect();

    let index_width = (rows.len() - 1).to_string().len();
    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, name)| {
            cells
                .iter()
                .filter_map(|row| row.get(i))
                .map(|cell| display_width(cell))
                .chain(std::iter::once(display_width(name)))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 1);

    let mut header = " ".repeat(index_width);
    for (name, width) in columns.iter().zip(&widths) {
        header.push_str(COLUMN_GAP);
        header.push_str(&pad_left(name, *width));
    }
    lines.push(header);

    for (idx, row) in cells.iter().enumerate() {
        let mut line = pad_right(&idx.to_string(), index_width);
        for (cell, width) in row.iter().zip(&widths) {
            line.push_str(COLUMN_GAP);
            line.push_str(&pad_left(cell, *width));
        }
        lines.push(line);
    }

    lines.join("\n")
}

fn display_width(s: &str) -> usize {
    s.chars().count()
}

fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    format!("{}{}", " ".repeat(fill), s)
}

fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(fill))
}

/// Cut a cell to at most `max` characters; newlines would break the grid.
fn truncate(s: &str, max: usize) -> String {
    let flat: String = s
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    if display_width(&flat) <= max {
        return flat;
    }
    let keep = max.saturating_sub(ELLIPSIS.len());
    let mut cut: String = flat.chars().take(keep).collect();
    cut.push_str(ELLIPSIS);
    cut
}
