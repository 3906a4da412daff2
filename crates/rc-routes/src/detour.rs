//! Alternate routes an agent can discover by exploring.

use rc_core::Location;

use crate::{PairMap, Route};

/// Declarative table of alternate routes, keyed by the blocked pair.
///
/// Inserting a detour registers it for both directions, so an agent blocked
/// on the return leg finds the reversed detour.
#[derive(Debug, Clone, Default)]
pub struct DetourTable {
    detours: PairMap<Route>,
}

impl DetourTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_routes<I>(routes: I) -> Self
    where
        I: IntoIterator<Item = Route>,
    {
        let mut table = Self::new();
        for route in routes {
            table.insert(route);
        }
        table
    }

    /// Register `route` as the detour for its endpoints (and the reverse).
    pub fn insert(&mut self, route: Route) {
        let origin      = route.origin().clone();
        let destination = route.destination().clone();
        self.detours.insert((destination.clone(), origin.clone()), route.reversed());
        self.detours.insert((origin, destination), route);
    }

    /// Detour for `origin → destination`, if one is scripted.
    pub fn get(&self, origin: &Location, destination: &Location) -> Option<&Route> {
        self.detours.get(&(origin.clone(), destination.clone()))
    }

    pub fn len(&self) -> usize {
        self.detours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detours.is_empty()
    }
}
