//! CLI parsing tests for tables command using the test DSL.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use clap::Parser;
    use rstest::rstest;

    crate::cli_defaults_test! {
        command: "tables",
        variant: Tables,
        required_args: [],
        defaults: {
            pattern: None,
            regex: false,
        },
    }

    crate::cli_option_test! {
        command: "tables",
        variant: Tables,
        test_name: test_with_pattern,
        args: ["Invoice"],
        field: pattern,
        expected: Some("Invoice".to_string()),
    }

    crate::cli_option_test! {
        command: "tables",
        variant: Tables,
        test_name: test_with_regex,
        args: ["^A", "--regex"],
        field: regex,
        expected: true,
    }

    crate::cli_error_test! {
        command: "tables",
        test_name: test_rejects_second_pattern,
        args: ["Album", "Artist"],
    }
}
