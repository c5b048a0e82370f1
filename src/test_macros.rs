//! Declarative macros for generating CLI, execute, and output tests.
//!
//! This module provides macros to reduce boilerplate in command tests.
//! Instead of writing repetitive test functions, you can declare the test cases
//! and let the macro generate the actual test code.

// =============================================================================
// CLI Test Macros
// =============================================================================

/// Generate a test for default values when a command is invoked with minimal args.
#[macro_export]
macro_rules! cli_defaults_test {
    (
        command: $cmd:literal,
        variant: $variant:ident,
        required_args: [$($req_arg:literal),*],
        defaults: {
            $($def_field:ident : $def_expected:expr),* $(,)?
        } $(,)?
    ) => {
        #[rstest]
        fn test_defaults() {
            let args = Args::try_parse_from(["sqlpeek", $cmd, $($req_arg),*]).unwrap();
            match args.command {
                Some(crate::commands::Command::$variant(cmd)) => {
                    $(
                        assert_eq!(cmd.$def_field, $def_expected,
                            concat!("Default value mismatch for field: ", stringify!($def_field)));
                    )*
                }
                _ => panic!(concat!("Expected ", stringify!($variant), " command")),
            }
        }
    };
}

/// Generate a single CLI option test.
#[macro_export]
macro_rules! cli_option_test {
    (
        command: $cmd:literal,
        variant: $variant:ident,
        test_name: $test_name:ident,
        args: [$($arg:literal),+],
        field: $field:ident,
        expected: $expected:expr $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let args = Args::try_parse_from([
                "sqlpeek",
                $cmd,
                $($arg),+
            ]).unwrap();
            match args.command {
                Some(crate::commands::Command::$variant(cmd)) => {
                    assert_eq!(cmd.$field, $expected,
                        concat!("Field ", stringify!($field), " mismatch"));
                }
                _ => panic!(concat!("Expected ", stringify!($variant), " command")),
            }
        }
    };
}

/// Generate `--head` validation tests (zero rejected, max exceeded rejected, max accepted).
#[macro_export]
macro_rules! cli_head_tests {
    (
        command: $cmd:literal,
        required_args: [$($req_arg:literal),*] $(,)?
    ) => {
        #[rstest]
        fn test_head_zero_rejected() {
            let result = Args::try_parse_from(["sqlpeek", $cmd, $($req_arg,)* "--head", "0"]);
            assert!(result.is_err());
        }

        #[rstest]
        fn test_head_exceeds_max_rejected() {
            let result = Args::try_parse_from(["sqlpeek", $cmd, $($req_arg,)* "--head", "1001"]);
            assert!(result.is_err());
        }

        #[rstest]
        fn test_head_max_accepted() {
            let result = Args::try_parse_from(["sqlpeek", $cmd, $($req_arg,)* "--head", "1000"]);
            assert!(result.is_ok());
        }
    };
}

/// Generate a test that verifies a command requires a specific argument.
///
/// # Example
///
/// ```ignore
/// cli_required_arg_test! {
///     command: "query",
///     test_name: test_requires_sql,
///     required_arg: "<SQL>",
/// }
/// ```
#[macro_export]
macro_rules! cli_required_arg_test {
    (
        command: $cmd:literal,
        test_name: $test_name:ident,
        required_arg: $arg:literal $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let result = Args::try_parse_from(["sqlpeek", $cmd]);
            assert!(result.is_err(), concat!("Command should require ", $arg));
            assert!(
                result.unwrap_err().to_string().contains($arg),
                concat!("Error should mention ", $arg)
            );
        }
    };
}

/// Generate a test that verifies parsing fails with specific invalid args.
#[macro_export]
macro_rules! cli_error_test {
    (
        command: $cmd:literal,
        test_name: $test_name:ident,
        args: [$($arg:literal),+] $(,)?
    ) => {
        #[rstest]
        fn $test_name() {
            let result = Args::try_parse_from([
                "sqlpeek",
                $cmd,
                $($arg),+
            ]);
            assert!(result.is_err());
        }
    };
}

// =============================================================================
// Execute Test Macros
// =============================================================================

/// Generate a fixture that creates an on-disk database from a SQL fixture.
///
/// The fixture returns the temp file; the database lives as long as it does.
#[macro_export]
macro_rules! db_fixture {
    (
        fixture_name: $name:ident,
        sql: $sql:expr $(,)?
    ) => {
        #[fixture]
        fn $name() -> tempfile::NamedTempFile {
            crate::test_utils::create_db_file($sql)
        }
    };
}

/// Generate a test that executes a command against a fixture database
/// and runs assertions on the result.
#[macro_export]
macro_rules! execute_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        cmd: $cmd:expr,
        assertions: |$result:ident| $body:block $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: tempfile::NamedTempFile) {
            let $result = crate::test_utils::execute_cmd($cmd, $fixture.path())
                .expect("Command should succeed");
            $body
        }
    };
}

/// Generate a test that verifies command execution fails against a fixture database.
#[macro_export]
macro_rules! execute_error_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        cmd: $cmd:expr,
        message_contains: $needle:literal $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: tempfile::NamedTempFile) {
            let result = crate::test_utils::execute_cmd($cmd, $fixture.path());
            let err = result.err().expect("Command should fail");
            assert!(
                err.to_string().contains($needle),
                "Error {:?} should contain {:?}",
                err.to_string(),
                $needle
            );
        }
    };
}

/// Generate a test that verifies command execution against a missing file fails
/// at the connection step.
#[macro_export]
macro_rules! execute_missing_db_test {
    (
        cmd: $cmd:expr $(,)?
    ) => {
        #[rstest]
        fn test_missing_db() {
            let dir = tempfile::tempdir().expect("Failed to create temp dir");
            let result = crate::test_utils::execute_cmd($cmd, &dir.path().join("missing.sqlite"));
            let err = result.err().expect("Command should fail");
            assert!(err.to_string().starts_with("Failed to open database"));
        }
    };
}

// =============================================================================
// Output Test Macros
// =============================================================================

/// Generate a test that verifies table output matches expected string.
///
/// Works with rstest fixtures by accepting a fixture parameter.
#[macro_export]
macro_rules! output_table_test {
    // With format parameter (Json, Toon)
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        expected: $expected:expr,
        format: $format:ident $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::{Outputable, OutputFormat};
            assert_eq!($fixture.format(OutputFormat::$format), $expected);
        }
    };
    // Default table format
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        expected: $expected:expr $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::Outputable;
            assert_eq!($fixture.to_table(), $expected);
        }
    };
}

/// Generate a test that verifies JSON output is valid and contains expected fields.
///
/// # Example
/// ```ignore
/// output_json_test! {
///     test_name: test_format_json,
///     fixture: single_result,
///     fixture_type: TablesResult,
///     assertions: {
///         "tables": serde_json::json!(["Album", "Artist"]),
///     },
/// }
/// ```
#[macro_export]
macro_rules! output_json_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        assertions: { $($field:literal : $expected:expr),* $(,)? } $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::{Outputable, OutputFormat};
            let output = $fixture.format(OutputFormat::Json);
            let parsed: serde_json::Value = serde_json::from_str(&output)
                .expect("Should produce valid JSON");
            $(
                assert_eq!(parsed[$field], $expected, concat!("JSON field mismatch: ", $field));
            )*
        }
    };
}

/// Generate a test that verifies Toon output contains expected strings.
#[macro_export]
macro_rules! output_toon_test {
    (
        test_name: $test_name:ident,
        fixture: $fixture:ident,
        fixture_type: $fixture_type:ty,
        contains: [$($needle:literal),* $(,)?] $(,)?
    ) => {
        #[rstest]
        fn $test_name($fixture: $fixture_type) {
            use crate::output::{Outputable, OutputFormat};
            let output = $fixture.format(OutputFormat::Toon);
            $(
                assert!(output.contains($needle), concat!("Toon output should contain: ", $needle));
            )*
        }
    };
}
