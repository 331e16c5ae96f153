//! Colour symbols
//!
//! A symbol is an opaque token. Grid cells hold one whitespace-separated token
//! each; a sequence string contributes one symbol per character.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single colour token such as `"O"` or `"G"`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a symbol from any string-like token
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The token text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty symbol never matches as a walkable cell
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Symbol {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Self(c.to_string())
    }
}

impl PartialEq<str> for Symbol {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Symbol {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
