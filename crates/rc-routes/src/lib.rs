//! `rc-routes`: the shared route table every courier reads and explores.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`route`]   | `Route`: non-empty ordered waypoint list                    |
//! | [`table`]   | `RouteTable`: `(origin, destination) → Route`, pair writes  |
//! | [`detour`]  | `DetourTable`: alternate routes discovered by exploring     |
//! | [`loader`]  | `load_routes_csv`, `load_detours_csv` and reader variants   |
//! | [`error`]   | `RouteError`, `RouteResult<T>`                              |
//!
//! # Pair invariant
//!
//! The table never holds a one-way entry.  [`RouteTable::set`] writes the
//! forward route and its reversal in one call, so `lookup(a, b)` succeeds
//! exactly when `lookup(b, a)` does.
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                     |
//! |-----------|------------------------------------------------------------|
//! | `fx-hash` | Uses `rustc_hash::FxHashMap` for the pair maps.            |
//! | `serde`   | Derives `Serialize` on `Route` (waypoints as a list).      |

pub mod detour;
pub mod error;
pub mod loader;
pub mod route;
pub mod table;


pub use detour::DetourTable;
pub use error::{RouteError, RouteResult};
pub use loader::{load_detours_csv, load_detours_reader, load_routes_csv, load_routes_reader};
pub use route::Route;
pub use table::RouteTable;

use rc_core::Location;

/// Hash map keyed by an ordered `(origin, destination)` pair.
#[cfg(feature = "fx-hash")]
pub(crate) type PairMap<V> = rustc_hash::FxHashMap<(Location, Location), V>;

#[cfg(not(feature = "fx-hash"))]
pub(crate) type PairMap<V> = std::collections::HashMap<(Location, Location), V>;
