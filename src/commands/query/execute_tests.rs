//! Execute tests for query command.

#[cfg(test)]
mod tests {
    use super::super::QueryCmd;
    use crate::db::Value;
    use crate::fixtures;
    use rstest::{fixture, rstest};

    crate::db_fixture! {
        fixture_name: sample_db,
        sql: fixtures::CHINOOK_SAMPLE,
    }

    fn query(sql: &str) -> QueryCmd {
        QueryCmd {
            sql: sql.to_string(),
            head: None,
            all: false,
        }
    }

    // =========================================================================
    // Core functionality tests
    // =========================================================================

    crate::execute_test! {
        test_name: test_default_head,
        fixture: sample_db,
        cmd: query("SELECT EmployeeId, LastName FROM Employee"),
        assertions: |result| {
            assert_eq!(result.total_rows, 8);
            assert_eq!(result.rows.len(), 5);
            assert_eq!(result.rows.columns(), &["EmployeeId", "LastName"]);
        },
    }

    crate::execute_test! {
        test_name: test_all_rows,
        fixture: sample_db,
        cmd: QueryCmd {
            all: true,
            ..query("SELECT EmployeeId FROM Employee")
        },
        assertions: |result| {
            assert_eq!(result.rows.len(), 8);
        },
    }

    crate::execute_test! {
        test_name: test_custom_head,
        fixture: sample_db,
        cmd: QueryCmd {
            head: Some(1),
            ..query("SELECT Title FROM Employee WHERE ReportsTo IS NULL")
        },
        assertions: |result| {
            assert_eq!(result.rows.len(), 1);
            assert_eq!(result.rows.rows()[0][0], Value::from("General Manager"));
        },
    }

    crate::execute_test! {
        test_name: test_join_keeps_result_order,
        fixture: sample_db,
        cmd: query(
            "SELECT al.Title, ar.Name FROM Album al JOIN Artist ar USING (ArtistId) ORDER BY al.AlbumId DESC"
        ),
        assertions: |result| {
            let titles: Vec<&str> = result
                .rows
                .column("Title")
                .unwrap()
                .into_iter()
                .filter_map(Value::as_str)
                .collect();
            assert_eq!(titles, vec![
                "Restless and Wild",
                "Balls to the Wall",
                "For Those About To Rock We Salute You",
            ]);
        },
    }

    crate::execute_test! {
        test_name: test_no_rows,
        fixture: sample_db,
        cmd: query("SELECT * FROM Customer WHERE CustomerId > 100"),
        assertions: |result| {
            assert_eq!(result.total_rows, 0);
            assert!(result.rows.is_empty());
        },
    }

    crate::execute_test! {
        test_name: test_null_values,
        fixture: sample_db,
        cmd: query("SELECT ReportsTo FROM Employee ORDER BY EmployeeId"),
        assertions: |result| {
            assert!(result.rows.rows()[0][0].is_null());
            assert_eq!(result.rows.rows()[1][0], Value::Integer(1));
        },
    }

    // =========================================================================
    // Error handling tests
    // =========================================================================

    crate::execute_error_test! {
        test_name: test_missing_table,
        fixture: sample_db,
        cmd: query("SELECT * FROM Playlist"),
        message_contains: "no such table: Playlist",
    }

    crate::execute_error_test! {
        test_name: test_write_rejected,
        fixture: sample_db,
        cmd: query("UPDATE Employee SET Title = 'CEO'"),
        message_contains: "only read-only statements are allowed",
    }

    crate::execute_error_test! {
        test_name: test_syntax_error,
        fixture: sample_db,
        cmd: query("SELECT FROM WHERE"),
        message_contains: "Query failed",
    }

    crate::execute_missing_db_test! {
        cmd: query("SELECT 1"),
    }
}
