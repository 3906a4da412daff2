//! The shared `RouteTable`.

use rc_core::Location;
use tracing::debug;

use crate::{PairMap, Route, RouteError, RouteResult};

/// Mapping from an ordered `(origin, destination)` pair to a [`Route`].
///
/// One table is shared by every agent for the whole run.  Reads happen when
/// an agent needs a route; writes happen only when an agent explores.  The
/// runner ticks agents strictly one after another, so no locking is needed.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: PairMap<Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from routes, installing each with [`set_route`][Self::set_route].
    ///
    /// Later routes overwrite earlier ones for the same pair.
    pub fn from_routes<I>(routes: I) -> Self
    where
        I: IntoIterator<Item = Route>,
    {
        let mut table = Self::new();
        for route in routes {
            table.set_route(route);
        }
        table
    }

    /// Route from `origin` to `destination`.
    ///
    /// # Errors
    ///
    /// [`RouteError::NotFound`] if the pair has never been set.
    pub fn lookup(&self, origin: &Location, destination: &Location) -> RouteResult<&Route> {
        self.routes
            .get(&(origin.clone(), destination.clone()))
            .ok_or_else(|| RouteError::NotFound {
                origin:      origin.clone(),
                destination: destination.clone(),
            })
    }

    /// `true` if a route from `origin` to `destination` is known.
    pub fn contains(&self, origin: &Location, destination: &Location) -> bool {
        self.routes.contains_key(&(origin.clone(), destination.clone()))
    }

    /// Overwrite the entry for `origin → destination` and its reverse.
    ///
    /// The reverse entry is `route` walked backwards.
    ///
    /// # Errors
    ///
    /// [`RouteError::Endpoints`] if `route` does not start at `origin` and end
    /// at `destination`.  The table is left untouched in that case.
    pub fn set(
        &mut self,
        origin:      &Location,
        destination: &Location,
        route:       Route,
    ) -> RouteResult<()> {
        if route.origin() != origin || route.destination() != destination {
            return Err(RouteError::Endpoints {
                origin:      origin.clone(),
                destination: destination.clone(),
                route,
            });
        }
        self.set_route(route);
        Ok(())
    }

    /// Install `route` and its reversal, keyed by the route's own endpoints.
    pub fn set_route(&mut self, route: Route) {
        let origin      = route.origin().clone();
        let destination = route.destination().clone();
        debug!(%origin, %destination, %route, "route pair installed");

        let reverse = route.reversed();
        self.routes.insert((destination.clone(), origin.clone()), reverse);
        self.routes.insert((origin, destination), route);
    }

    /// Number of directed entries (each pair counts twice).
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// All entries sorted by `(origin, destination)`.
    pub fn iter(&self) -> impl Iterator<Item = (&Location, &Location, &Route)> + '_ {
        let mut entries: Vec<_> = self
            .routes
            .iter()
            .map(|((o, d), r)| (o, d, r))
            .collect();
        entries.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
        entries.into_iter()
    }
}
