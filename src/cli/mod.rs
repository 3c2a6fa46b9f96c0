//! Command-line interface module
//!
//! Handles argument parsing, validation and the usage text

pub mod args;
pub mod process;

pub use args::*;
pub use process::*;
