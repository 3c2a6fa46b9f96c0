//! Error handling module
//!
//! Defines the query error type and the exit code each failure maps to

pub mod types;

pub use types::*;
