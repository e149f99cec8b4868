//! Path normalisation and the current-location context.
//!
//! Every path that reaches the matcher, whether it came from the address bar
//! or from a route declaration, goes through [`normalize`] first. Matching
//! therefore never has to care about query strings, doubled slashes, or a
//! trailing slash.

#[cfg(test)]
#[path = "path_test.rs"]
mod path_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Normalise a raw path.
///
/// Drops everything from the first `?` or `#`, roots the path, collapses
/// repeated slashes, and strips a trailing slash (except for `/` itself).
#[must_use]
pub fn normalize(raw: &str) -> String {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let mut out = String::with_capacity(end + 1);
    for segment in raw[..end].split('/').filter(|s| !s.is_empty()) {
        out.push('/');
        out.push_str(segment);
    }
    if out.is_empty() {
        out.push('/');
    }
    out
}

/// The current path, passed explicitly into route resolution.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location {
    path: String,
}

impl Location {
    /// The site root, `/`.
    #[must_use]
    pub fn root() -> Self {
        Self { path: "/".to_owned() }
    }

    /// Build a location from an address bar pathname (in-page navigation).
    #[must_use]
    pub fn from_pathname(pathname: &str) -> Self {
        Self {
            path: normalize(pathname),
        }
    }

    /// Build a location from a URL fragment (fragment navigation).
    ///
    /// Accepts the fragment with or without its leading `#`. Fragment
    /// histories append their own query (`#/home?_k=3f2a`); it is dropped.
    #[must_use]
    pub fn from_fragment(fragment: &str) -> Self {
        let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
        Self {
            path: normalize(fragment),
        }
    }

    /// The normalised path, always rooted.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.path == "/"
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.path)
    }
}
