//! Typed simulation events, one per agent state transition.

use std::fmt;

use rc_agent::Task;
use rc_core::{AgentId, Location, Tick};
use rc_routes::Route;

/// Something an agent did during one tick.
///
/// Events are buffered in [`SimContext`][crate::SimContext] in the order the
/// actions ran and handed to observers at the end of the tick.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Event {
    pub tick:  Tick,
    pub agent: AgentId,
    /// Display name of `agent`, copied so log lines need no store lookup.
    pub name:  String,
    pub kind:  EventKind,
}

/// The transition an [`Event`] records.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(tag = "type", rename_all = "snake_case"))]
pub enum EventKind {
    /// The agent fetched a route from the shared table.
    RouteQueried {
        origin:      Location,
        destination: Location,
        route:       Route,
    },

    /// The table had no entry for the task's pair.
    RouteMissing {
        origin:      Location,
        destination: Location,
    },

    /// The fetched route does not pass through the agent's location.
    OffRoute {
        at:    Location,
        route: Route,
    },

    Moved {
        from: Location,
        to:   Location,
    },

    /// A scripted fault stopped the step from `at` to `next`.
    Blocked {
        at:   Location,
        next: Location,
    },

    PickedUp {
        at: Location,
    },

    DroppedOff {
        at: Location,
    },

    /// Exploring installed `route` (and its reverse) into the shared table.
    RouteDiscovered {
        origin:      Location,
        destination: Location,
        route:       Route,
    },

    /// Exploring found no scripted detour for the pair.
    NoDetour {
        origin:      Location,
        destination: Location,
    },

    TaskAssigned {
        task: Task,
    },
}

impl EventKind {
    /// Short stable label, used as the `kind` column of output files.
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::RouteQueried { .. }    => "route_queried",
            EventKind::RouteMissing { .. }    => "route_missing",
            EventKind::OffRoute { .. }        => "off_route",
            EventKind::Moved { .. }           => "moved",
            EventKind::Blocked { .. }         => "blocked",
            EventKind::PickedUp { .. }        => "picked_up",
            EventKind::DroppedOff { .. }      => "dropped_off",
            EventKind::RouteDiscovered { .. } => "route_discovered",
            EventKind::NoDetour { .. }        => "no_detour",
            EventKind::TaskAssigned { .. }    => "task_assigned",
        }
    }

    /// Where the agent was when the event happened, if the event says.
    pub fn location(&self) -> Option<&Location> {
        match self {
            EventKind::Moved { to, .. } => Some(to),
            EventKind::OffRoute { at, .. }
            | EventKind::Blocked { at, .. }
            | EventKind::PickedUp { at }
            | EventKind::DroppedOff { at } => Some(at),
            _ => None,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::RouteQueried { origin, destination, route } => {
                write!(f, "queries route {origin} -> {destination}, gets {route}")
            }
            EventKind::RouteMissing { origin, destination } => {
                write!(f, "finds no route {origin} -> {destination}")
            }
            EventKind::OffRoute { at, route } => {
                write!(f, "is at {at}, which is not on {route}")
            }
            EventKind::Moved { from, to } => write!(f, "moves from {from} to {to}"),
            EventKind::Blocked { next, .. } => write!(f, "finds {next} is blocked"),
            EventKind::PickedUp { at } => write!(f, "picks up item at {at}"),
            EventKind::DroppedOff { at } => write!(f, "drops off item at {at}"),
            EventKind::RouteDiscovered { origin, destination, route } => {
                write!(f, "explores and discovers new path {route} for {origin} -> {destination}")
            }
            EventKind::NoDetour { origin, destination } => {
                write!(f, "explores but finds no detour for {origin} -> {destination}")
            }
            EventKind::TaskAssigned { task } => write!(f, "starts {task}"),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.tick, self.name, self.kind)
    }
}
