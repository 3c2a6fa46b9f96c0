//! In-memory projection of a parsed INI file

use crate::error::QueryError;
use ini::{Ini, ParseOption};
use std::collections::HashMap;

/// Section whose keys act as fallbacks for every other section
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// Read-only view of a configuration file
///
/// Maps section name to its key/value pairs and remembers the order in which
/// sections first appeared. Section names are flat strings; a `/` inside a
/// name carries no meaning here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDocument {
    order: Vec<String>,
    sections: HashMap<String, HashMap<String, String>>,
    defaults: HashMap<String, String>,
}

impl ConfigDocument {
    /// Parse INI text into a document
    ///
    /// Values are taken literally: quotes are kept and backslashes are not
    /// treated as escapes.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The text is not valid INI
    #[inline]
    pub fn parse(content: &str) -> Result<Self, ini::ParseError> {
        let options = ParseOption {
            enabled_quote: false,
            enabled_escape: false,
            ..ParseOption::default()
        };
        let ini = Ini::load_from_str_opt(content, options)?;
        Ok(Self::from_ini(&ini))
    }

    /// Build a document from an already parsed [`Ini`]
    ///
    /// Properties outside any section header are ignored. A repeated section
    /// keeps its first position and merges its keys, later values winning.
    #[must_use]
    pub fn from_ini(ini: &Ini) -> Self {
        let mut document = Self::default();

        for (name, properties) in ini {
            let Some(name) = name else {
                continue;
            };

            let target = if name == DEFAULT_SECTION {
                &mut document.defaults
            } else {
                if !document.sections.contains_key(name) {
                    document.order.push(name.to_owned());
                }
                document.sections.entry(name.to_owned()).or_default()
            };

            for (key, value) in properties.iter() {
                target.insert(key.to_owned(), value.to_owned());
            }
        }

        document
    }

    /// Section names in file order, `DEFAULT` excluded
    #[inline]
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Whether a section with exactly this name exists
    #[must_use]
    #[inline]
    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Look up `key` in `section`, falling back to the `DEFAULT` section
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The section does not exist
    /// - Neither the section nor `DEFAULT` defines the key
    pub fn get(&self, section: &str, key: &str) -> Result<&str, QueryError> {
        let entries = if section == DEFAULT_SECTION {
            &self.defaults
        } else {
            self.sections
                .get(section)
                .ok_or_else(|| QueryError::section_not_found(section))?
        };

        entries
            .get(key)
            .or_else(|| self.defaults.get(key))
            .map(String::as_str)
            .ok_or_else(|| QueryError::key_not_found(section, key))
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;

    #[test]
    fn keeps_file_order_of_sections() {
        let doc =
            ConfigDocument::parse("[zeta]\na = 1\n[alpha]\nb = 2\n[mid/child]\nc = 3\n").unwrap();
        let names: Vec<&str> = doc.section_names().collect();
        assert_eq!(names, ["zeta", "alpha", "mid/child"]);
    }

    #[test]
    fn default_section_is_hidden_but_used_as_fallback() {
        let doc = ConfigDocument::parse(
            "[DEFAULT]\nretries = 3\n\n[db]\nhost = localhost\n\n[cache]\nretries = 5\n",
        )
        .unwrap();

        assert_eq!(doc.section_names().collect::<Vec<_>>(), ["db", "cache"]);
        assert!(!doc.has_section(DEFAULT_SECTION));
        assert_eq!(doc.get("db", "retries").unwrap(), "3");
        assert_eq!(doc.get("cache", "retries").unwrap(), "5");
        assert_eq!(doc.get(DEFAULT_SECTION, "retries").unwrap(), "3");
    }

    #[test]
    fn repeated_section_is_listed_once() {
        let doc = ConfigDocument::parse(
            "[db]\nhost = a\nport = 1\n\n[cache]\nttl = 60\n\n[db]\nhost = b\n",
        )
        .unwrap();

        assert_eq!(doc.section_names().collect::<Vec<_>>(), ["db", "cache"]);
        assert_eq!(doc.get("db", "host").unwrap(), "b");
        assert_eq!(doc.get("db", "port").unwrap(), "1");
    }

    #[test]
    fn lookup_misses_are_typed() {
        let doc = ConfigDocument::parse("[db]\nhost = localhost\n").unwrap();

        assert_eq!(
            doc.get("nope", "host").unwrap_err(),
            QueryError::section_not_found("nope")
        );
        assert_eq!(
            doc.get("db", "port").unwrap_err(),
            QueryError::key_not_found("db", "port")
        );
    }

    #[test]
    fn values_are_literal() {
        let doc = ConfigDocument::parse("[paths]\nroot = C:\\temp\\new\n").unwrap();
        assert_eq!(doc.get("paths", "root").unwrap(), "C:\\temp\\new");
    }

    #[test]
    fn keys_outside_sections_are_ignored() {
        let doc = ConfigDocument::parse("stray = 1\n[db]\nhost = h\n").unwrap();
        assert_eq!(doc.section_names().collect::<Vec<_>>(), ["db"]);
    }
}
