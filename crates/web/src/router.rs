//! Static route table.
//!
//! A [`RouteTable`] is an ordered list of `(path, body)` pairs fixed at start-up.
//! Lookup compares the request-target byte for byte against each path in
//! insertion order and the first equal path wins, so a later route with a
//! duplicate path is never reachable.

use std::slice;

/// A static mapping from an exact request-target to a canned response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    path: String,
    body: String,
}

impl Route {
    pub fn new(path: impl Into<String>, body: impl Into<String>) -> Self {
        Self { path: path.into(), body: body.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Ordered, read-only collection of [`Route`]s.
///
/// There is no way to change a table once built; share it behind an `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::new()
    }

    /// Returns the body of the first route whose path equals `path`.
    pub fn lookup(&self, path: &str) -> Option<&str> {
        self.routes.iter().find(|route| route.path == path).map(Route::body)
    }

    pub fn iter(&self) -> slice::Iter<'_, Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a Route;
    type IntoIter = slice::Iter<'a, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<P, B> FromIterator<(P, B)> for RouteTable
where
    P: Into<String>,
    B: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (P, B)>>(iter: I) -> Self {
        Self { routes: iter.into_iter().map(|(path, body)| Route::new(path, body)).collect() }
    }
}

#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    routes: Vec<Route>,
}

impl RouteTableBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Appends a route; routes are matched in the order they are added.
    #[must_use]
    pub fn route(mut self, path: impl Into<String>, body: impl Into<String>) -> Self {
        self.routes.push(Route::new(path, body));
        self
    }

    pub fn build(self) -> RouteTable {
        RouteTable { routes: self.routes }
    }
}
