use clap::{ArgAction, CommandFactory, Parser};

/// Command-line arguments for ini-query
///
/// Command flags override each other so only the last one given stays set,
/// and every option keeps the last value it received.
#[derive(Parser, Debug, Clone)]
#[command(name = "ini-query")]
#[command(about = "A CLI tool for querying sections and values of INI configuration files")]
#[command(long_about = None)]
#[command(version)]
#[command(disable_version_flag = true)]
#[command(args_override_self = true)]
#[command(after_long_help = EXIT_CODES_HELP)]
pub struct Args {
    /// Print the parent sections (names without '/')
    #[arg(long, overrides_with_all = ["search_section", "value", "version"])]
    pub root_sections: bool,

    /// Print every section whose name contains --pattern
    #[arg(long, overrides_with_all = ["root_sections", "value", "version"])]
    pub search_section: bool,

    /// Print the value of a key in --section
    #[arg(long, overrides_with_all = ["root_sections", "search_section", "version"])]
    pub value: bool,

    /// Print version information and exit
    #[arg(long, overrides_with_all = ["root_sections", "search_section", "value"])]
    pub version: bool,

    /// Target initialization file to parse
    ///
    /// Kept as text so an empty `--file=` reaches the loader instead of
    /// failing path validation.
    #[arg(long, value_name = "PATH", allow_hyphen_values = true)]
    pub file: Option<String>,

    /// Text a section name must contain (plain substring, not a regex)
    #[arg(long, value_name = "SUBSTR", allow_hyphen_values = true)]
    pub pattern: Option<String>,

    /// Definite section to read from
    #[arg(long, value_name = "NAME", allow_hyphen_values = true)]
    pub section: Option<String>,

    /// Key to read with --value
    #[arg(long, value_name = "NAME", allow_hyphen_values = true)]
    pub key: Option<String>,

    /// Enable debug logging on stderr
    #[arg(
        long,
        value_name = "BOOL",
        action = ArgAction::Set,
        value_parser = parse_bool_literal,
        default_value = "false"
    )]
    pub debug: bool,

    /// Key to read with --value, when --key is not given
    #[arg(value_name = "KEY")]
    pub key_arg: Option<String>,
}

const EXIT_CODES_HELP: &str = "\
Exit codes:
  0  success
  1  the configuration file could not be found or read
  2  an argument expected a value but had none, or the value is invalid
  3  the query is invalid: missing section/key, or section/key not found
  4  invalid arguments
  5  no configuration file path was passed";

/// Accept `true` / `false` in any ASCII case
fn parse_bool_literal(value: &str) -> Result<bool, String> {
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err("expected `true` or `false`".to_owned())
    }
}

/// Full usage text, as printed for `--help` and for an empty argument list
#[must_use]
pub fn usage() -> String {
    Args::command().render_long_help().to_string()
}

/// Version line, as printed for `--version`
#[must_use]
pub fn version() -> String {
    Args::command().render_version()
}
