//! The `Route` value stored in route and detour tables.

use std::fmt;

use rc_core::Location;

use crate::{RouteError, RouteResult};

/// An ordered, non-empty list of waypoints from origin to destination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Route {
    waypoints: Vec<Location>,
}

impl Route {
    /// Build a route, rejecting an empty waypoint list.
    pub fn new(waypoints: Vec<Location>) -> RouteResult<Self> {
        if waypoints.is_empty() {
            return Err(RouteError::Empty);
        }
        Ok(Self { waypoints })
    }

    /// Parse a whitespace-separated waypoint list such as `"E X Y A"`.
    pub fn parse(s: &str) -> RouteResult<Self> {
        let waypoints = s
            .split_whitespace()
            .map(str::parse::<Location>)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(waypoints)
    }

    #[inline]
    pub fn origin(&self) -> &Location {
        &self.waypoints[0]
    }

    #[inline]
    pub fn destination(&self) -> &Location {
        &self.waypoints[self.waypoints.len() - 1]
    }

    #[inline]
    pub fn waypoints(&self) -> &[Location] {
        &self.waypoints
    }

    /// Number of waypoints, endpoints included.  Never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Index of `location` on this route, if it lies on it.
    pub fn position_of(&self, location: &Location) -> Option<usize> {
        self.waypoints.iter().position(|w| w == location)
    }

    /// The same waypoints walked in the opposite direction.
    pub fn reversed(&self) -> Route {
        let mut waypoints = self.waypoints.clone();
        waypoints.reverse();
        Route { waypoints }
    }

    pub fn into_waypoints(self) -> Vec<Location> {
        self.waypoints
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, w) in self.waypoints.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{w}")?;
        }
        f.write_str("]")
    }
}
