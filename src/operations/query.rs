//! Query engine
//!
//! Runs exactly one [`Command`] against a loaded [`ConfigDocument`].

use crate::cli::{self, Command, OptionMap};
use crate::config::ConfigDocument;
use crate::error::QueryError;
use std::io::{self, Write};
use tracing::debug;

/// Separator that marks a section name as nested under a parent
pub const HIERARCHY_SEPARATOR: char = '/';

/// What a command produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutput {
    /// Pre-rendered text, written as is
    Text(String),
    /// One section name per line
    Lines(Vec<String>),
    /// A single value, followed by a newline
    Value(String),
}

impl QueryOutput {
    /// Write the output to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        match self {
            Self::Text(text) => out.write_all(text.as_bytes()),
            Self::Lines(lines) => lines.iter().try_for_each(|line| writeln!(out, "{line}")),
            Self::Value(value) => writeln!(out, "{value}"),
        }
    }
}

/// Output of commands that never look at the configuration file
#[must_use]
pub fn standalone_output(command: Command) -> Option<QueryOutput> {
    match command {
        Command::Help => Some(QueryOutput::Text(cli::usage())),
        Command::Version => Some(QueryOutput::Text(cli::version())),
        Command::RootSections | Command::SearchSection | Command::GetValue => None,
    }
}

/// Sections that are not nested under another one, in document order
#[must_use]
pub fn root_sections(document: &ConfigDocument) -> Vec<String> {
    document
        .section_names()
        .filter(|name| !name.contains(HIERARCHY_SEPARATOR))
        .map(str::to_owned)
        .collect()
}

/// Sections whose full name contains `pattern`, in document order
///
/// `pattern` is plain text; an empty pattern matches every section.
#[must_use]
pub fn search_sections(document: &ConfigDocument, pattern: &str) -> Vec<String> {
    document
        .section_names()
        .filter(|name| name.contains(pattern))
        .map(str::to_owned)
        .collect()
}

/// Value of `key` in `section`
///
/// # Errors
///
/// Returns an error if:
/// - `section` or `key` is empty
/// - The section does not exist
/// - The key is defined neither in the section nor in `DEFAULT`
pub fn get_value<'doc>(
    document: &'doc ConfigDocument,
    section: &str,
    key: &str,
) -> Result<&'doc str, QueryError> {
    if section.is_empty() {
        return Err(QueryError::incomplete_query(
            "--value requires --section <NAME>",
        ));
    }
    if key.is_empty() {
        return Err(QueryError::incomplete_query(
            "--value requires a key, given as --key <NAME> or as a trailing argument",
        ));
    }

    document.get(section, key)
}

/// Run `command` with `options` against `document`
///
/// # Errors
///
/// Returns an error if a `GetValue` lookup fails (see [`get_value`])
pub fn execute(
    command: Command,
    options: &OptionMap,
    document: &ConfigDocument,
) -> Result<QueryOutput, QueryError> {
    debug!("Executing {command:?}");

    let output = match command {
        // Always `Some` for these two
        Command::Help | Command::Version => {
            standalone_output(command).unwrap_or_else(|| QueryOutput::Text(String::new()))
        }
        Command::RootSections => QueryOutput::Lines(root_sections(document)),
        Command::SearchSection => {
            QueryOutput::Lines(search_sections(document, &options.pattern))
        }
        Command::GetValue => {
            QueryOutput::Value(get_value(document, &options.section, &options.key)?.to_owned())
        }
    };

    Ok(output)
}
