//! Route patterns and declaration errors.

#[cfg(test)]
#[path = "pattern_test.rs"]
mod pattern_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::path::{Location, normalize};

/// Error returned when a route declaration is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// The pattern was empty or whitespace.
    #[error("route pattern is empty")]
    Empty,
    /// The pattern carries a query string or fragment.
    #[error("route pattern `{0}` contains a query or fragment marker")]
    QueryOrFragment(String),
    /// The pattern uses parameter or wildcard syntax, which is unsupported.
    #[error("route pattern `{0}` uses parameter or wildcard syntax")]
    Dynamic(String),
    /// The same pattern and mode were declared twice.
    #[error("route `{pattern}` ({mode}) is declared more than once")]
    Duplicate { pattern: String, mode: MatchMode },
}

/// How a pattern is compared against the current path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// The current path must equal the pattern.
    #[default]
    Exact,
    /// The current path must start with the pattern at a segment boundary.
    Prefix,
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => f.pad("exact"),
            Self::Prefix => f.pad("prefix"),
        }
    }
}

/// A validated, normalised literal pattern.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Pattern {
    path: String,
    mode: MatchMode,
}

impl Pattern {
    /// Declare an exact pattern.
    ///
    /// # Errors
    ///
    /// See [`Pattern::new`].
    pub fn exact(raw: &str) -> Result<Self, RouteError> {
        Self::new(raw, MatchMode::Exact)
    }

    /// Declare a prefix pattern.
    ///
    /// # Errors
    ///
    /// See [`Pattern::new`].
    pub fn prefix(raw: &str) -> Result<Self, RouteError> {
        Self::new(raw, MatchMode::Prefix)
    }

    /// Validate and normalise `raw`. A missing leading slash is added, so
    /// `home` declares `/home`.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::Empty`] for an empty pattern,
    /// [`RouteError::QueryOrFragment`] when it contains `?` or `#`, and
    /// [`RouteError::Dynamic`] when it contains `:` or `*`.
    pub fn new(raw: &str, mode: MatchMode) -> Result<Self, RouteError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(RouteError::Empty);
        }
        if trimmed.contains(['?', '#']) {
            return Err(RouteError::QueryOrFragment(trimmed.to_owned()));
        }
        if trimmed.contains([':', '*']) {
            return Err(RouteError::Dynamic(trimmed.to_owned()));
        }
        Ok(Self {
            path: normalize(trimmed),
            mode,
        })
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Whether this pattern matches `location`.
    #[must_use]
    pub fn matches(&self, location: &Location) -> bool {
        let path = location.path();
        match self.mode {
            MatchMode::Exact => path == self.path,
            MatchMode::Prefix => {
                if self.path == "/" {
                    return true;
                }
                path.strip_prefix(self.path.as_str())
                    .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
            }
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.path, self.mode)
    }
}
