//! Custom error types with exit codes

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for ini-query operations
#[derive(Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum QueryError {
    /// A config file path was given but nothing readable is there
    #[error("Configuration file not found: {}", .path.display())]
    ConfigNotFound { path: PathBuf },

    /// The config file exists but could not be read or parsed
    #[error("Failed to read configuration file {}: {message}", .path.display())]
    ConfigUnreadable { path: PathBuf, message: String },

    /// An option token was not followed by a value
    #[error("Missing argument: {option}")]
    MissingValue { option: String },

    /// A value-constrained option received something it does not accept
    #[error("Invalid value '{value}' for {option}: {message}")]
    InvalidValue {
        option: String,
        value: String,
        message: String,
    },

    /// The selected query lacks an input it needs
    #[error("Invalid query: {message}")]
    IncompleteQuery { message: String },

    /// Section lookup miss
    #[error("No section: '{section}'")]
    SectionNotFound { section: String },

    /// Key lookup miss
    #[error("No option '{key}' in section: '{section}'")]
    KeyNotFound { section: String, key: String },

    /// Token that is neither a command, an option nor a value
    #[error("Unrecognized argument: {token}")]
    UnknownArgument { token: String },

    /// No config file path was passed at all
    #[error("No configuration file was passed. Use --file <PATH>")]
    NoConfigFile,
}

impl QueryError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::ConfigNotFound { .. } | Self::ConfigUnreadable { .. } => 1,
            Self::MissingValue { .. } | Self::InvalidValue { .. } => 2,
            Self::IncompleteQuery { .. }
            | Self::SectionNotFound { .. }
            | Self::KeyNotFound { .. } => 3,
            Self::UnknownArgument { .. } => 4,
            Self::NoConfigFile => 5,
        }
    }

    /// Create a config-not-found error
    #[inline]
    pub fn config_not_found<P: AsRef<Path>>(path: P) -> Self {
        Self::ConfigNotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a config-unreadable error
    #[inline]
    pub fn config_unreadable<P: AsRef<Path>, S: Into<String>>(path: P, message: S) -> Self {
        Self::ConfigUnreadable {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    /// Create a missing-value error
    #[inline]
    pub fn missing_value<S: Into<String>>(option: S) -> Self {
        Self::MissingValue {
            option: option.into(),
        }
    }

    /// Create an invalid-value error
    #[inline]
    pub fn invalid_value<O, V, M>(option: O, value: V, message: M) -> Self
    where
        O: Into<String>,
        V: Into<String>,
        M: Into<String>,
    {
        Self::InvalidValue {
            option: option.into(),
            value: value.into(),
            message: message.into(),
        }
    }

    /// Create an incomplete-query error
    #[inline]
    pub fn incomplete_query<S: Into<String>>(message: S) -> Self {
        Self::IncompleteQuery {
            message: message.into(),
        }
    }

    /// Create a section-not-found error
    #[inline]
    pub fn section_not_found<S: Into<String>>(section: S) -> Self {
        Self::SectionNotFound {
            section: section.into(),
        }
    }

    /// Create a key-not-found error
    #[inline]
    pub fn key_not_found<S: Into<String>, K: Into<String>>(section: S, key: K) -> Self {
        Self::KeyNotFound {
            section: section.into(),
            key: key.into(),
        }
    }

    /// Create an unknown-argument error
    #[inline]
    pub fn unknown_argument<S: Into<String>>(token: S) -> Self {
        Self::UnknownArgument {
            token: token.into(),
        }
    }
}
