//! Configuration document module
//!
//! Loads an INI file through the `System` abstraction and exposes it as an
//! ordered, read-only [`ConfigDocument`]

pub mod document;
pub mod loader;

pub use document::{ConfigDocument, DEFAULT_SECTION};
pub use loader::load_document;
