//! Ordered route table and resolution.
//!
//! DESIGN
//! ======
//! Resolution walks the table top to bottom and keeps every route whose
//! pattern matches. Matches are additive: a prefix route on `/` renders
//! alongside whatever exact route also matches. The table is immutable once
//! built, and [`RouteTable::resolve`] takes the current [`Location`] as an
//! argument, so the same location always yields the same [`Matched`] set.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use crate::path::Location;
use crate::pattern::{MatchMode, Pattern, RouteError};

/// A pattern paired with the view producer rendered when it matches.
#[derive(Clone, Debug)]
pub struct Route<V> {
    pattern: Pattern,
    view: V,
}

impl<V> Route<V> {
    #[must_use]
    pub fn new(pattern: Pattern, view: V) -> Self {
        Self { pattern, view }
    }

    #[must_use]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }
}

/// Statically declared, ordered routes.
#[derive(Clone, Debug)]
pub struct RouteTable<V> {
    routes: Vec<Route<V>>,
}

impl<V> RouteTable<V> {
    /// Start declaring a table.
    #[must_use]
    pub fn builder() -> RouteTableBuilder<V> {
        RouteTableBuilder {
            routes: Vec::new(),
            error: None,
        }
    }

    /// Routes in declaration order.
    #[must_use]
    pub fn routes(&self) -> &[Route<V>] {
        &self.routes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Every route matching `location`, in table order.
    #[must_use]
    pub fn resolve(&self, location: &Location) -> Matched<'_, V> {
        let indices = self
            .routes
            .iter()
            .enumerate()
            .filter(|(_, route)| route.pattern.matches(location))
            .map(|(index, _)| index)
            .collect();
        Matched {
            routes: &self.routes,
            indices,
        }
    }
}

/// An empty table; every location resolves to no views.
impl<V> Default for RouteTable<V> {
    fn default() -> Self {
        Self { routes: Vec::new() }
    }
}

/// Builder returned by [`RouteTable::builder`].
///
/// Declarations are chained; the first invalid one is remembered and
/// reported by [`RouteTableBuilder::build`].
#[derive(Debug)]
pub struct RouteTableBuilder<V> {
    routes: Vec<Route<V>>,
    error: Option<RouteError>,
}

impl<V> RouteTableBuilder<V> {
    /// Append a route that matches only `pattern` itself.
    #[must_use]
    pub fn exact(self, pattern: &str, view: V) -> Self {
        self.route(pattern, MatchMode::Exact, view)
    }

    /// Append a route that matches `pattern` and everything beneath it.
    #[must_use]
    pub fn prefix(self, pattern: &str, view: V) -> Self {
        self.route(pattern, MatchMode::Prefix, view)
    }

    /// Append a route with an explicit mode.
    #[must_use]
    pub fn route(mut self, pattern: &str, mode: MatchMode, view: V) -> Self {
        if self.error.is_some() {
            return self;
        }
        match Pattern::new(pattern, mode) {
            Ok(pattern) if self.routes.iter().any(|r| r.pattern == pattern) => {
                self.error = Some(RouteError::Duplicate {
                    pattern: pattern.path().to_owned(),
                    mode,
                });
            }
            Ok(pattern) => self.routes.push(Route::new(pattern, view)),
            Err(err) => self.error = Some(err),
        }
        self
    }

    /// Finish the table.
    ///
    /// # Errors
    ///
    /// Returns the first [`RouteError`] raised by a declaration.
    pub fn build(self) -> Result<RouteTable<V>, RouteError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(RouteTable {
                routes: self.routes,
            }),
        }
    }
}

/// The routes matched for one location, in table order.
#[derive(Debug)]
pub struct Matched<'a, V> {
    routes: &'a [Route<V>],
    indices: Vec<usize>,
}

impl<'a, V> Matched<'a, V> {
    /// Table indices of the matched routes.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Matched routes, in table order.
    pub fn routes(&self) -> impl Iterator<Item = &'a Route<V>> + '_ {
        let routes = self.routes;
        self.indices.iter().filter_map(move |&i| routes.get(i))
    }

    /// Matched view producers, in table order.
    pub fn views(&self) -> impl Iterator<Item = &'a V> + '_ {
        self.routes().map(Route::view)
    }
}

impl<V> PartialEq for Matched<'_, V> {
    fn eq(&self, other: &Self) -> bool {
        self.indices == other.indices
    }
}

impl<V> Eq for Matched<'_, V> {}
