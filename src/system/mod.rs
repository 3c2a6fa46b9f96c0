//! System abstraction for filesystem operations
//!
//! Every read of the configuration file goes through the [`System`] trait so
//! the loader and the full `run` pipeline can be tested against an in-memory
//! filesystem.

use std::io;
use std::path::Path;

pub mod mock;
pub mod real;

pub use mock::MockSystem;
pub use real::RealSystem;

/// Unified trait for the filesystem operations ini-query needs
///
/// # Implementations
/// - `RealSystem`: Production implementation using `std::fs`
/// - `MockSystem`: Test implementation using in-memory storage
pub trait System: Send + Sync {
    /// Read entire file contents as a string
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path points to a regular file
    fn is_file(&self, path: &Path) -> bool;
}
