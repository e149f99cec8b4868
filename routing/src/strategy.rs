//! Navigation strategies: where the current path lives in the address bar.

#[cfg(test)]
#[path = "strategy_test.rs"]
mod strategy_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::path::{Location, normalize};

/// How navigation state is stored in the URL.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// The path lives in the fragment (`/#/home`). Every `hashchange`
    /// triggers a full re-match.
    Fragment,
    /// The path lives in the pathname. Link clicks are intercepted, the
    /// address bar is updated with `pushState`, and the table re-evaluated
    /// in place.
    #[default]
    InPage,
}

impl Strategy {
    /// Read the current location from the address bar parts.
    #[must_use]
    pub fn location(self, pathname: &str, hash: &str) -> Location {
        match self {
            Self::Fragment => Location::from_fragment(hash),
            Self::InPage => Location::from_pathname(pathname),
        }
    }

    /// Interpret user-supplied input (a path, or a `#/path` fragment for the
    /// fragment strategy) as a location.
    #[must_use]
    pub fn parse(self, input: &str) -> Location {
        match self {
            Self::Fragment => Location::from_fragment(input),
            Self::InPage => Location::from_pathname(input),
        }
    }

    /// The `href` a link to `path` should carry.
    #[must_use]
    pub fn href(self, path: &str) -> String {
        let path = normalize(path);
        match self {
            Self::Fragment => format!("#{path}"),
            Self::InPage => path,
        }
    }

    #[must_use]
    pub fn is_fragment(self) -> bool {
        matches!(self, Self::Fragment)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fragment => f.pad("fragment"),
            Self::InPage => f.pad("in-page"),
        }
    }
}
