//! INI configuration loading

use crate::config::ConfigDocument;
use crate::error::QueryError;
use crate::system::System;
use std::path::Path;
use tracing::debug;

/// Load and parse the configuration file named by `--file`
///
/// # Errors
///
/// Returns an error if:
/// - No path was given, or the path is empty
/// - The path does not point to a regular file
/// - The file cannot be read or is not valid INI
#[inline]
pub fn load_document(
    system: &dyn System,
    path: Option<&Path>,
) -> Result<ConfigDocument, QueryError> {
    let Some(path) = path.filter(|p| !p.as_os_str().is_empty()) else {
        return Err(QueryError::NoConfigFile);
    };

    if !system.is_file(path) {
        debug!(
            "{} is not a regular file (exists: {})",
            path.display(),
            system.exists(path)
        );
        return Err(QueryError::config_not_found(path));
    }

    let content = system
        .read_to_string(path)
        .map_err(|e| QueryError::config_unreadable(path, e.to_string()))?;

    let document = ConfigDocument::parse(&content)
        .map_err(|e| QueryError::config_unreadable(path, e.to_string()))?;

    debug!(
        "Loaded {} with {} section(s)",
        path.display(),
        document.section_names().count()
    );

    Ok(document)
}
