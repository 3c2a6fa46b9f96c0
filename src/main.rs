//! # `ini-query`
//!
//! `ini-query` reads an INI configuration file and prints sections or values
//! for use by shell scripts. Data goes to stdout, diagnostics to stderr, and
//! every failure kind has its own exit code.
//!
//! ## Usage
//!
//! ```sh
//! ini-query --root-sections --file app.ini
//! ini-query --search-section --pattern db --file app.ini
//! ini-query --value --section db --key host --file app.ini
//! ```
//!
//! See `ini-query --help` for the full list of options and exit codes.

use ini_query::cli::process_args;
use ini_query::error::QueryError;
use ini_query::system::RealSystem;
use std::io;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let argv = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned());

    let invocation = match process_args(argv) {
        Ok(invocation) => invocation,
        Err(err) => {
            init_tracing(false);
            error!("{}", err);
            std::process::exit(err.exit_code());
        }
    };

    init_tracing(invocation.options.debug);

    let system = RealSystem::new();
    let mut stdout = io::stdout().lock();

    match ini_query::run(invocation, &system, &mut stdout) {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            error!("{}", err);
            std::process::exit(
                err.downcast_ref::<QueryError>()
                    .map_or(1, QueryError::exit_code),
            );
        }
    }
}

/// Initialize the tracing subscriber on stderr so stdout only carries data
fn init_tracing(debug: bool) {
    let log_level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_target(false)
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();
}
