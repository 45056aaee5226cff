//! Core type definitions
//!
//! This module contains the basic data structures used throughout the
//! crate, with minimal logic - focusing on data representation.

use std::fmt;

use crate::utils::string::quote;

/// A DOT identifier that has already been through the quoting rule.
///
/// The wrapped value always starts and ends with a double quote. Two
/// identifiers are equal when their quoted text is equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(String);

impl Identifier {
    /// Quote a raw label into an identifier
    pub fn quote(raw: &str) -> Self {
        Self(quote(raw))
    }

    /// The quoted form, as it appears in DOT output
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The text between the surrounding quotes
    pub fn unquoted(&self) -> &str {
        &self.0[1..self.0.len() - 1]
    }

    /// Whether this identifier is the quoted form of `raw`
    pub fn matches(&self, raw: &str) -> bool {
        self.0 == quote(raw)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identifier {
    fn from(raw: &str) -> Self {
        Self::quote(raw)
    }
}

impl From<String> for Identifier {
    fn from(raw: String) -> Self {
        Self::quote(&raw)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
