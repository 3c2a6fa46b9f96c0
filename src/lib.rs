//! `ini-query` - A CLI tool for querying INI configuration files
//!
//! This library turns a command line into a validated [`cli::Invocation`],
//! loads the INI file it names and answers one read-only query: list the
//! root sections, search sections by substring, or read a single value.

pub mod cli;
pub mod config;
pub mod error;
pub mod operations;
pub mod system;

use anyhow::Result;
use cli::Invocation;
use config::load_document;
use operations::{execute, standalone_output};
use std::io::Write;
use system::System;
use tracing::warn;

/// Main entry point for the ini-query library
///
/// Query output is written to `out`; diagnostics are logged. Failures carry a
/// [`error::QueryError`] whose exit code the binary reports.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration file is missing, unreadable or not valid INI
/// - The query cannot be answered (missing input, unknown section or key)
/// - Writing to `out` fails
pub fn run<W: Write + ?Sized>(
    invocation: Invocation,
    system: &dyn System,
    out: &mut W,
) -> Result<()> {
    let Invocation { options, command } = invocation;

    if let Some(output) = command.and_then(standalone_output) {
        output.write_to(out)?;
        out.flush()?;
        return Ok(());
    }

    let document = load_document(system, options.file.as_deref())?;

    let Some(command) = command else {
        warn!("No actions to execute. Use 'ini-query --help' for a list of commands");
        return Ok(());
    };

    let output = execute(command, &options, &document)?;
    output.write_to(out)?;
    out.flush()?;

    Ok(())
}
