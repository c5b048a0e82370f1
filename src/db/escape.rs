//! Identifier quoting for generated SQL.

/// Quote a SQL identifier (table or column name) with double quotes.
///
/// Embedded double quotes are doubled, so any table name reflected from the
/// catalog can be placed in a query verbatim.
pub fn quote_identifier(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + 2);
    result.push('"');
    for c in name.chars() {
        if c == '"' {
            result.push('"');
        }
        result.push(c);
    }
    result.push('"');
    result
}
