//! Unit tests for argument processing

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {

    use ini_query::cli::{Command, Invocation, process_args};
    use ini_query::error::QueryError;
    use std::path::PathBuf;

    fn process(args: &[&str]) -> Result<Invocation, QueryError> {
        process_args(args.iter().copied())
    }

    #[test]
    fn no_arguments_shows_usage() {
        let invocation = process(&[]).unwrap();
        assert_eq!(invocation, Invocation::help());
    }

    #[test]
    fn root_sections_with_file() {
        let invocation = process(&["--root-sections", "--file", "app.ini"]).unwrap();
        assert_eq!(invocation.command, Some(Command::RootSections));
        assert_eq!(invocation.options.file, Some(PathBuf::from("app.ini")));
        assert!(invocation.options.pattern.is_empty());
        assert!(!invocation.options.debug);
    }

    #[test]
    fn search_section_with_pattern() {
        let invocation =
            process(&["--search-section", "--pattern", "db", "--file", "app.ini"]).unwrap();
        assert_eq!(invocation.command, Some(Command::SearchSection));
        assert_eq!(invocation.options.pattern, "db");
    }

    #[test]
    fn value_with_key_option() {
        let invocation = process(&[
            "--value", "--section", "db", "--key", "host", "--file", "app.ini",
        ])
        .unwrap();
        assert_eq!(invocation.command, Some(Command::GetValue));
        assert_eq!(invocation.options.section, "db");
        assert_eq!(invocation.options.key, "host");
    }

    #[test]
    fn value_with_trailing_key() {
        let invocation =
            process(&["--value", "--section", "db", "--file", "app.ini", "host"]).unwrap();
        assert_eq!(invocation.options.key, "host");
    }

    #[test]
    fn key_option_wins_over_trailing_key() {
        let invocation = process(&[
            "--value", "--section", "db", "--key", "port", "--file", "app.ini", "host",
        ])
        .unwrap();
        assert_eq!(invocation.options.key, "port");
    }

    #[test]
    fn last_command_wins() {
        let invocation = process(&["--value", "--root-sections", "--file", "app.ini"]).unwrap();
        assert_eq!(invocation.command, Some(Command::RootSections));

        let invocation =
            process(&["--root-sections", "--search-section", "--file", "app.ini"]).unwrap();
        assert_eq!(invocation.command, Some(Command::SearchSection));
    }

    #[test]
    fn last_option_value_wins() {
        let invocation = process(&[
            "--root-sections",
            "--file",
            "first.ini",
            "--file",
            "second.ini",
        ])
        .unwrap();
        assert_eq!(invocation.options.file, Some(PathBuf::from("second.ini")));
    }

    #[test]
    fn version_is_a_command() {
        let invocation = process(&["--version"]).unwrap();
        assert_eq!(invocation.command, Some(Command::Version));
    }

    #[test]
    fn help_short_circuits_malformed_arguments() {
        assert_eq!(process(&["-h", "--pattern"]).unwrap(), Invocation::help());
        assert_eq!(
            process(&["--bogus", "--help", "--file"]).unwrap(),
            Invocation::help()
        );
    }

    #[test]
    fn options_without_command_are_accepted() {
        let invocation = process(&["--file", "app.ini"]).unwrap();
        assert_eq!(invocation.command, None);
    }

    #[test]
    fn trailing_option_is_missing_its_value() {
        let err = process(&["--search-section", "--pattern"]).unwrap_err();
        assert_eq!(err, QueryError::missing_value("--pattern"));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn option_followed_by_recognized_token_is_missing_its_value() {
        let err = process(&["--pattern", "--file", "app.ini"]).unwrap_err();
        assert_eq!(err, QueryError::missing_value("--pattern"));

        let err = process(&["--file", "--root-sections"]).unwrap_err();
        assert_eq!(err, QueryError::missing_value("--file"));
    }

    #[test]
    fn unrecognized_hyphen_value_is_taken_verbatim() {
        let invocation = process(&[
            "--search-section",
            "--pattern",
            "-legacy",
            "--file",
            "app.ini",
        ])
        .unwrap();
        assert_eq!(invocation.options.pattern, "-legacy");
    }

    #[test]
    fn debug_accepts_boolean_literals() {
        let invocation = process(&["--debug", "true", "--file", "app.ini"]).unwrap();
        assert!(invocation.options.debug);

        let invocation = process(&["--debug", "False", "--file", "app.ini"]).unwrap();
        assert!(!invocation.options.debug);
    }

    #[test]
    fn debug_rejects_other_values() {
        let err = process(&["--debug", "maybe", "--file", "app.ini"]).unwrap_err();
        assert!(matches!(err, QueryError::InvalidValue { .. }));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn debug_without_value_is_missing_its_value() {
        let err = process(&["--debug"]).unwrap_err();
        assert_eq!(err, QueryError::missing_value("--debug"));
    }

    #[test]
    fn unknown_token_is_rejected() {
        let err = process(&["--root-sections", "--bogus"]).unwrap_err();
        assert!(matches!(err, QueryError::UnknownArgument { .. }));
        assert!(err.to_string().contains("--bogus"));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn second_bare_token_is_rejected() {
        let err = process(&["--value", "host", "port"]).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn empty_file_value_is_accepted() {
        let invocation = process(&["--root-sections", "--file="]).unwrap();
        assert_eq!(invocation.options.file, Some(PathBuf::new()));
    }

    #[test]
    fn bare_token_is_rejected_outside_value() {
        let err = process(&["--root-sections", "stray", "--file", "a.ini"]).unwrap_err();
        assert_eq!(err, QueryError::unknown_argument("stray"));
        assert_eq!(err.exit_code(), 4);

        let err = process(&["stray", "--file", "a.ini"]).unwrap_err();
        assert_eq!(err, QueryError::unknown_argument("stray"));
    }

    #[test]
    fn bare_token_before_a_later_command_is_rejected() {
        let err = process(&["--value", "host", "--root-sections", "--file", "a.ini"]).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn end_of_options_marker_is_rejected() {
        let err = process(&["--", "--root-sections"]).unwrap_err();
        assert_eq!(err, QueryError::unknown_argument("--"));
        assert_eq!(err.exit_code(), 4);
    }
}
