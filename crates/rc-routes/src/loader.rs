//! CSV route and detour loaders.
//!
//! # CSV format
//!
//! One row per route.  `waypoints` is a space-separated list that must start
//! at `origin` and end at `destination`.
//!
//! ```csv
//! origin,destination,waypoints
//! E,A,E X Y A
//! A,E,A Y X E
//! E,B,E Z B
//! ```
//!
//! Each row is installed together with its reversal, so listing the reverse
//! direction is optional.  When it *is* listed it must be the exact reversal
//! of the forward row; anything else is a [`RouteError::Conflict`].
//!
//! Detour files use the same columns.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use rc_core::Location;

use crate::{DetourTable, Route, RouteError, RouteResult, RouteTable};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RouteRecord {
    origin:      String,
    destination: String,
    waypoints:   String,
}

impl RouteRecord {
    fn into_route(self) -> RouteResult<Route> {
        let origin: Location      = self.origin.parse()?;
        let destination: Location = self.destination.parse()?;
        let route = Route::parse(&self.waypoints)?;
        if route.origin() != &origin || route.destination() != &destination {
            return Err(RouteError::Endpoints { origin, destination, route });
        }
        Ok(route)
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load the initial [`RouteTable`] from a CSV file.
pub fn load_routes_csv(path: &Path) -> RouteResult<RouteTable> {
    let file = std::fs::File::open(path).map_err(RouteError::Io)?;
    load_routes_reader(file)
}

/// Like [`load_routes_csv`] but accepts any `Read` source.
pub fn load_routes_reader<R: Read>(reader: R) -> RouteResult<RouteTable> {
    let mut table = RouteTable::new();
    for route in read_routes(reader)? {
        if let Ok(existing) = table.lookup(route.origin(), route.destination()) {
            if existing != &route {
                return Err(RouteError::Conflict {
                    origin:      route.origin().clone(),
                    destination: route.destination().clone(),
                    existing:    existing.clone(),
                    incoming:    route,
                });
            }
        }
        table.set_route(route);
    }
    Ok(table)
}

/// Load a [`DetourTable`] from a CSV file.
pub fn load_detours_csv(path: &Path) -> RouteResult<DetourTable> {
    let file = std::fs::File::open(path).map_err(RouteError::Io)?;
    load_detours_reader(file)
}

/// Like [`load_detours_csv`] but accepts any `Read` source.
pub fn load_detours_reader<R: Read>(reader: R) -> RouteResult<DetourTable> {
    Ok(DetourTable::from_routes(read_routes(reader)?))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn read_routes<R: Read>(reader: R) -> RouteResult<Vec<Route>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader
        .deserialize::<RouteRecord>()
        .map(|result| {
            let record = result.map_err(|e| RouteError::Parse(e.to_string()))?;
            record.into_route()
        })
        .collect()
}
