//! Argument processing
//!
//! Turns the raw argument list into an [`Invocation`]: the selected
//! [`Command`] plus the [`OptionMap`]. Validation happens in a single pass
//! before any query runs, and the first failure is returned as a
//! [`QueryError`] carrying its exit code.

use crate::cli::Args;
use crate::error::QueryError;
use clap::Parser as _;
use clap::error::{ContextKind, ErrorKind};
use std::error::Error as _;
use std::path::PathBuf;
use tracing::debug;

/// Name passed to clap as `argv[0]`
const PROGRAM_NAME: &str = "ini-query";

/// Tokens that consume the next argument as their value
pub const OPTION_TOKENS: [&str; 5] = ["--debug", "--file", "--key", "--pattern", "--section"];

/// The query or action selected by the command tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `-h` / `--help`
    Help,
    /// `--version`
    Version,
    /// `--root-sections`
    RootSections,
    /// `--search-section`
    SearchSection,
    /// `--value`
    GetValue,
}

impl Command {
    /// Map a command token to its command
    #[must_use]
    #[inline]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "-h" | "--help" => Some(Self::Help),
            "--version" => Some(Self::Version),
            "--root-sections" => Some(Self::RootSections),
            "--search-section" => Some(Self::SearchSection),
            "--value" => Some(Self::GetValue),
            _ => None,
        }
    }

    /// Whether the command reads the configuration file
    #[must_use]
    #[inline]
    pub const fn needs_document(self) -> bool {
        !matches!(self, Self::Help | Self::Version)
    }
}

/// Option values gathered from the command line
///
/// Unset options are empty; `file` is `None` when `--file` was never given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionMap {
    pub file: Option<PathBuf>,
    pub pattern: String,
    pub section: String,
    pub key: String,
    pub debug: bool,
}

/// A fully validated command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    pub options: OptionMap,
    pub command: Option<Command>,
}

impl Invocation {
    /// Invocation that only prints usage
    #[must_use]
    #[inline]
    pub fn help() -> Self {
        Self {
            options: OptionMap::default(),
            command: Some(Command::Help),
        }
    }
}

impl From<Args> for Invocation {
    fn from(args: Args) -> Self {
        let command = if args.root_sections {
            Some(Command::RootSections)
        } else if args.search_section {
            Some(Command::SearchSection)
        } else if args.value {
            Some(Command::GetValue)
        } else if args.version {
            Some(Command::Version)
        } else {
            None
        };

        Self {
            options: OptionMap {
                file: args.file.map(PathBuf::from),
                pattern: args.pattern.unwrap_or_default(),
                section: args.section.unwrap_or_default(),
                key: args.key.or(args.key_arg).unwrap_or_default(),
                debug: args.debug,
            },
            command,
        }
    }
}

/// Whether `token` is one of the recognized command or option tokens
#[must_use]
#[inline]
pub fn is_recognized_token(token: &str) -> bool {
    Command::from_token(token).is_some() || OPTION_TOKENS.contains(&token)
}

/// Process the argument list (without the program name)
///
/// An empty list and any `-h`/`--help` reached during validation both
/// short-circuit to [`Invocation::help`].
///
/// # Errors
///
/// Returns an error if:
/// - An option token is last, or is followed by another recognized token
/// - `--debug` gets something other than `true` or `false`
/// - A token is not recognized, including `--` and a bare key given to a
///   command other than `--value`
pub fn process_args<I, T>(args: I) -> Result<Invocation, QueryError>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let tokens: Vec<String> = args.into_iter().map(Into::into).collect();

    if tokens.is_empty() {
        debug!("No arguments given, showing usage");
        return Ok(Invocation::help());
    }

    if scan_tokens(&tokens)? {
        return Ok(Invocation::help());
    }

    let argv = std::iter::once(PROGRAM_NAME.to_owned()).chain(tokens);
    let parsed = match Args::try_parse_from(argv) {
        Ok(parsed) => parsed,
        Err(err) if err.kind() == ErrorKind::DisplayHelp => return Ok(Invocation::help()),
        Err(err) => return Err(from_clap_error(&err)),
    };

    if let Some(token) = parsed.key_arg.as_deref().filter(|_| !parsed.value) {
        return Err(QueryError::unknown_argument(token));
    }

    let invocation = Invocation::from(parsed);
    debug!("Parsed invocation: {invocation:?}");
    Ok(invocation)
}

/// Walk the tokens once, checking that every option token has a value
///
/// Returns `true` when a help token is reached first.
fn scan_tokens(tokens: &[String]) -> Result<bool, QueryError> {
    let mut iter = tokens.iter();

    while let Some(token) = iter.next() {
        if Command::from_token(token) == Some(Command::Help) {
            return Ok(true);
        }

        if token == "--" {
            return Err(QueryError::unknown_argument(token.as_str()));
        }

        if OPTION_TOKENS.contains(&token.as_str()) {
            match iter.next() {
                Some(value) if !is_recognized_token(value) => {}
                _ => return Err(QueryError::missing_value(token.as_str())),
            }
        }
    }

    Ok(false)
}

/// Translate a clap parse failure into the matching [`QueryError`]
fn from_clap_error(err: &clap::Error) -> QueryError {
    let context = |kind: ContextKind| err.get(kind).map(ToString::to_string).unwrap_or_default();
    let arg = context(ContextKind::InvalidArg);

    match err.kind() {
        ErrorKind::InvalidValue | ErrorKind::ValueValidation => {
            let value = context(ContextKind::InvalidValue);
            if value.is_empty() {
                QueryError::missing_value(arg)
            } else {
                let message = err.source().map_or_else(
                    || err.kind().as_str().unwrap_or("invalid value").to_owned(),
                    ToString::to_string,
                );
                QueryError::invalid_value(arg, value, message)
            }
        }
        _ if arg.is_empty() => QueryError::unknown_argument(err.to_string().trim()),
        _ => QueryError::unknown_argument(arg),
    }
}
