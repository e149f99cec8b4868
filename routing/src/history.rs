//! In-memory session history.
//!
//! Mirrors the browser's session history closely enough to drive the route
//! table from tests and the CLI: pushing truncates any forward entries,
//! `back`/`forward` move a cursor, and navigating to the current location is
//! not recorded twice.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use crate::path::Location;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<Location>,
    index: usize,
}

impl MemoryHistory {
    /// Start a history at `initial`, as on page load.
    #[must_use]
    pub fn new(initial: Location) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
        }
    }

    /// The current location.
    #[must_use]
    pub fn current(&self) -> &Location {
        // `index` always points into `entries`, which is never empty.
        &self.entries[self.index]
    }

    /// Number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    /// Navigate to `location`. Returns `false` if it is already current.
    pub fn push(&mut self, location: Location) -> bool {
        if *self.current() == location {
            return false;
        }
        self.entries.truncate(self.index + 1);
        self.entries.push(location);
        self.index += 1;
        true
    }

    /// Replace the current entry. Returns `false` if nothing changed.
    pub fn replace(&mut self, location: Location) -> bool {
        if *self.current() == location {
            return false;
        }
        self.entries[self.index] = location;
        true
    }

    /// Step back. Returns `false` at the start of history.
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Step forward. Returns `false` at the end of history.
    pub fn forward(&mut self) -> bool {
        if !self.can_go_forward() {
            return false;
        }
        self.index += 1;
        true
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new(Location::root())
    }
}
