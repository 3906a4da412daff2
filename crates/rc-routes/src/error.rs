//! Route-table error type.

use thiserror::Error;

use rc_core::{CoreError, Location};

use crate::Route;

/// Errors produced by `rc-routes`.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("no route from {origin} to {destination}")]
    NotFound { origin: Location, destination: Location },

    #[error("a route needs at least one waypoint")]
    Empty,

    #[error("route {route} does not run from {origin} to {destination}")]
    Endpoints {
        origin:      Location,
        destination: Location,
        route:       Route,
    },

    #[error("conflicting entries for {origin} -> {destination}: {existing} vs {incoming}")]
    Conflict {
        origin:      Location,
        destination: Location,
        existing:    Route,
        incoming:    Route,
    },

    #[error("route parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RouteResult<T> = Result<T, RouteError>;
