//! Framework-free path-to-view resolution for the client router.
//!
//! This crate owns the route table and the rules for turning an address bar
//! into a [`Location`]. It has no DOM or Leptos dependency so the matching
//! rules can be exercised from plain unit tests and from the `pathview` CLI.
//!
//! ```
//! use routing::{Location, RouteTable};
//!
//! let table = RouteTable::builder()
//!     .prefix("/", "home")
//!     .exact("/about", "about")
//!     .build()?;
//!
//! let matched = table.resolve(&Location::from_pathname("/about"));
//! assert_eq!(matched.views().copied().collect::<Vec<_>>(), ["home", "about"]);
//! # Ok::<(), routing::RouteError>(())
//! ```

pub mod history;
pub mod path;
pub mod pattern;
pub mod strategy;
pub mod table;

pub use history::MemoryHistory;
pub use path::Location;
pub use pattern::{MatchMode, Pattern, RouteError};
pub use strategy::Strategy;
pub use table::{Matched, Route, RouteTable, RouteTableBuilder};
