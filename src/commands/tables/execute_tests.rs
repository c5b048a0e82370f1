//! Execute tests for tables command.

#[cfg(test)]
mod tests {
    use super::super::TablesCmd;
    use crate::fixtures;
    use rstest::{fixture, rstest};

    crate::db_fixture! {
        fixture_name: sample_db,
        sql: fixtures::CHINOOK_SAMPLE,
    }

    crate::db_fixture! {
        fixture_name: empty_db,
        sql: "",
    }

    fn names(result: &super::super::TablesResult) -> Vec<&str> {
        result.tables.iter().map(String::as_str).collect()
    }

    crate::execute_test! {
        test_name: test_lists_all_tables,
        fixture: sample_db,
        cmd: TablesCmd::default(),
        assertions: |result| {
            assert_eq!(names(&result), vec!["Album", "Artist", "Customer", "Employee"]);
            assert_eq!(result.pattern, None);
        },
    }

    crate::execute_test! {
        test_name: test_substring_filter,
        fixture: sample_db,
        cmd: TablesCmd {
            pattern: Some("A".to_string()),
            regex: false,
        },
        assertions: |result| {
            assert_eq!(names(&result), vec!["Album", "Artist"]);
        },
    }

    crate::execute_test! {
        test_name: test_substring_filter_is_case_sensitive,
        fixture: sample_db,
        cmd: TablesCmd {
            pattern: Some("album".to_string()),
            regex: false,
        },
        assertions: |result| {
            assert!(result.tables.is_empty());
        },
    }

    crate::execute_test! {
        test_name: test_regex_filter,
        fixture: sample_db,
        cmd: TablesCmd {
            pattern: Some("(?i)^(album|employee)$".to_string()),
            regex: true,
        },
        assertions: |result| {
            assert_eq!(names(&result), vec!["Album", "Employee"]);
        },
    }

    crate::execute_test! {
        test_name: test_empty_database,
        fixture: empty_db,
        cmd: TablesCmd::default(),
        assertions: |result| {
            assert!(result.tables.is_empty());
        },
    }

    crate::execute_error_test! {
        test_name: test_invalid_regex,
        fixture: sample_db,
        cmd: TablesCmd {
            pattern: Some("(unclosed".to_string()),
            regex: true,
        },
        message_contains: "Invalid table pattern '(unclosed'",
    }

    crate::execute_missing_db_test! {
        cmd: TablesCmd::default(),
    }
}
