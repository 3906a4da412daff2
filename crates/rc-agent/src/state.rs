//! Per-agent courier state and its task transitions.

use std::collections::VecDeque;
use std::fmt;

use rc_core::{AgentId, Location};
use tracing::debug;

// ── Task ──────────────────────────────────────────────────────────────────────

/// What the agent is travelling for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TaskKind {
    /// Travel to an item and pick it up.
    Pickup,
    /// Carry the item back to the hub.
    Delivery,
}

/// The agent's active mission: travel from `origin` to `destination`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Task {
    pub kind:        TaskKind,
    pub origin:      Location,
    pub destination: Location,
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            TaskKind::Pickup   => "pickup",
            TaskKind::Delivery => "delivery",
        };
        write!(f, "{kind} {} -> {}", self.origin, self.destination)
    }
}

// ── RoutePhase ────────────────────────────────────────────────────────────────

/// Where the agent is in its route-following state machine.
///
/// ```text
/// NeedsRoute ──query──▶ Following ──step──▶ Following
///     ▲                    │  └──reached──▶ Arrived ──pickup──▶ NeedsRoute
///     └─────explore─── Blocked ◀──fault──┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoutePhase {
    #[default]
    NeedsRoute,
    Following,
    Blocked,
    Arrived,
}

impl RoutePhase {
    /// Lowercase label for logs and output rows.
    pub fn label(self) -> &'static str {
        match self {
            RoutePhase::NeedsRoute => "needs_route",
            RoutePhase::Following  => "following",
            RoutePhase::Blocked    => "blocked",
            RoutePhase::Arrived    => "arrived",
        }
    }
}

// ── AgentState ────────────────────────────────────────────────────────────────

/// One courier.
///
/// # Invariants
///
/// - `cursor < path.len()` whenever `path` is non-empty; `cursor == 0` when
///   it is empty.
/// - `path[cursor] == location` whenever `path` is non-empty.
///
/// [`path_is_consistent`][Self::path_is_consistent] checks both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentState {
    pub id:   AgentId,
    pub name: String,

    pub location: Location,
    pub carrying: bool,

    /// `None` once the agent has delivered and has nothing queued.
    pub task: Option<Task>,

    /// Cached copy of the route being followed.  Empty means "query again".
    pub path:   Vec<Location>,
    pub cursor: usize,

    pub phase: RoutePhase,

    /// Pickup targets to assign after each drop-off, in order.
    pub pending_pickups: VecDeque<Location>,
}

impl AgentState {
    /// An idle agent standing at `start`.
    pub fn new(id: AgentId, name: impl Into<String>, start: Location) -> Self {
        Self {
            id,
            name: name.into(),
            location: start,
            carrying: false,
            task: None,
            path: Vec::new(),
            cursor: 0,
            phase: RoutePhase::Arrived,
            pending_pickups: VecDeque::new(),
        }
    }

    /// Start a pickup run from the current location to `target`.
    pub fn assign_pickup(&mut self, target: Location) {
        debug!(agent = %self.name, from = %self.location, to = %target, "pickup assigned");
        self.carrying = false;
        self.task = Some(Task {
            kind:        TaskKind::Pickup,
            origin:      self.location.clone(),
            destination: target,
        });
        self.clear_path();
    }

    /// Start carrying the item from the current location back to `hub`.
    pub fn assign_delivery(&mut self, hub: Location) {
        debug!(agent = %self.name, from = %self.location, to = %hub, "delivery assigned");
        self.carrying = true;
        self.task = Some(Task {
            kind:        TaskKind::Delivery,
            origin:      self.location.clone(),
            destination: hub,
        });
        self.clear_path();
    }

    /// Complete the current delivery.
    ///
    /// Assigns the next queued pickup if there is one and returns it;
    /// otherwise the agent goes idle in the `Arrived` phase.
    pub fn finish_task(&mut self) -> Option<&Task> {
        self.carrying = false;
        self.task = None;
        self.path.clear();
        self.cursor = 0;
        self.phase = RoutePhase::Arrived;

        let next = self.pending_pickups.pop_front()?;
        self.assign_pickup(next);
        self.task.as_ref()
    }

    /// Forget the cached path so the next query goes back to the table.
    pub fn clear_path(&mut self) {
        self.path.clear();
        self.cursor = 0;
        self.phase = RoutePhase::NeedsRoute;
    }

    /// Adopt `path`, positioned at the current location.
    ///
    /// Returns `false` (and leaves the state untouched) if the current
    /// location is not on `path`.
    pub fn follow(&mut self, path: Vec<Location>) -> bool {
        let Some(cursor) = path.iter().position(|w| w == &self.location) else {
            return false;
        };
        self.path = path;
        self.cursor = cursor;
        self.phase = RoutePhase::Following;
        true
    }

    /// The waypoint after the current one, if the path continues.
    pub fn next_waypoint(&self) -> Option<&Location> {
        if self.path.is_empty() {
            return None;
        }
        self.path.get(self.cursor + 1)
    }

    /// Move one waypoint along the path.  Returns the location left behind.
    pub fn step(&mut self) -> Option<Location> {
        let next = self.next_waypoint()?.clone();
        self.cursor += 1;
        Some(std::mem::replace(&mut self.location, next))
    }

    /// `true` if the agent stands on its task destination.
    pub fn at_destination(&self) -> bool {
        self.task
            .as_ref()
            .is_some_and(|t| t.destination == self.location)
    }

    /// `true` when there is no task to work on.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.task.is_none()
    }

    /// Check the cursor invariants documented on the type.
    pub fn path_is_consistent(&self) -> bool {
        if self.path.is_empty() {
            return self.cursor == 0;
        }
        self.cursor < self.path.len() && self.path[self.cursor] == self.location
    }
}
