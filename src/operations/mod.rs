//! Operations module
//!
//! Query execution over a loaded configuration document

pub mod query;

pub use query::*;
