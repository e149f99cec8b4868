//! The three shipped router configurations.
//!
//! ARCHITECTURE
//! ============
//! A variant bundles everything that differs between the demos: the route
//! table, where the current path lives in the URL, the id of the page element
//! the app mounts into, and the document title. Everything else (views,
//! outlet, matcher) is shared.

#[cfg(test)]
#[path = "variant_test.rs"]
mod variant_test;

use std::fmt;

use leptos::tachys::view::any_view::AnyView;
use routing::{RouteError, RouteTable, Strategy};
use serde::{Deserialize, Serialize};

use crate::pages::{about, home, legacy, login};

/// A named view producer stored in a route table.
#[derive(Clone, Copy)]
pub struct PageView {
    name: &'static str,
    render: fn() -> AnyView,
}

impl PageView {
    #[must_use]
    pub const fn new(name: &'static str, render: fn() -> AnyView) -> Self {
        Self { name, render }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Produce a fresh view tree.
    pub fn render(&self) -> AnyView {
        (self.render)()
    }
}

impl fmt::Debug for PageView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PageView").field(&self.name).finish()
    }
}

/// Which demo to mount.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Fragment routing with a single `home` route.
    Hash,
    /// In-page routing, every route exact.
    Browser,
    /// In-page routing with a persistent Home shell on a prefix `/` route.
    #[default]
    Shell,
}

impl Variant {
    pub const ALL: [Self; 3] = [Self::Hash, Self::Browser, Self::Shell];

    /// Build this variant's route table.
    ///
    /// # Errors
    ///
    /// Returns a [`RouteError`] if a declaration is invalid. The shipped
    /// declarations are all valid.
    pub fn table(self) -> Result<RouteTable<PageView>, RouteError> {
        match self {
            Self::Hash => RouteTable::builder()
                .exact("home", legacy::VIEW)
                .build(),
            Self::Browser => RouteTable::builder()
                .exact("/", home::VIEW)
                .exact("/about", about::VIEW)
                .exact("/login", login::VIEW)
                .build(),
            Self::Shell => RouteTable::builder()
                .prefix("/", home::SHELL_VIEW)
                .exact("/about", about::VIEW)
                .exact("/login", login::VIEW)
                .build(),
        }
    }

    #[must_use]
    pub fn strategy(self) -> Strategy {
        match self {
            Self::Hash => Strategy::Fragment,
            Self::Browser | Self::Shell => Strategy::InPage,
        }
    }

    /// Id of the page element the app is mounted into.
    #[must_use]
    pub fn mount_id(self) -> &'static str {
        match self {
            Self::Hash => "container",
            Self::Browser | Self::Shell => "root",
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Hash => "Router (hash history)",
            Self::Browser => "Router (browser history)",
            Self::Shell => "Router (persistent shell)",
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Hash => "hash",
            Self::Browser => "browser",
            Self::Shell => "shell",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}
