//! Courier actions.
//!
//! Each action mutates only the agent it is bound to, plus the shared tables
//! in [`SimContext`].  Every state transition is reported as an [`EventKind`].

use rc_agent::{AgentState, RoutePhase};
use tracing::{debug, info, warn};

use crate::{EventKind, SimContext, Status};

/// Make sure the agent has a path for its current task.
///
/// An agent already standing on its destination needs no route and succeeds
/// without a lookup.  A cached path is kept as is.  Otherwise the route for
/// `(task.origin, task.destination)` is copied out of the shared table and
/// the cursor placed at the agent's location.  A missing route, or a route
/// that does not pass through the agent, fails so the tree falls through to
/// exploring.
pub fn query_route(agent: &mut AgentState, ctx: &mut SimContext) -> Status {
    if agent.at_destination() || !agent.path.is_empty() {
        return Status::Success;
    }
    let Some(task) = agent.task.clone() else {
        return Status::Failure;
    };

    let route = match ctx.routes.lookup(&task.origin, &task.destination).cloned() {
        Ok(route) => route,
        Err(e) => {
            warn!(agent = %agent.name, error = %e, "route lookup failed");
            agent.phase = RoutePhase::Blocked;
            ctx.emit(agent, EventKind::RouteMissing {
                origin:      task.origin,
                destination: task.destination,
            });
            return Status::Failure;
        }
    };

    if !agent.follow(route.waypoints().to_vec()) {
        warn!(agent = %agent.name, at = %agent.location, %route, "route does not pass through agent");
        agent.phase = RoutePhase::Blocked;
        let at = agent.location.clone();
        ctx.emit(agent, EventKind::OffRoute { at, route });
        return Status::Failure;
    }

    debug!(agent = %agent.name, %route, cursor = agent.cursor, "route queried");
    ctx.emit(agent, EventKind::RouteQueried {
        origin:      task.origin,
        destination: task.destination,
        route,
    });
    Status::Success
}

/// Advance one waypoint along the cached path.
///
/// - Already at the task destination: `Success` without moving.
/// - A pending fault for `(agent, next waypoint, now)`: `Failure`, phase
///   `Blocked`, the agent stays put.
/// - Otherwise move; `Success` on reaching the destination, else `Running`.
pub fn follow_path(agent: &mut AgentState, ctx: &mut SimContext) -> Status {
    if agent.is_idle() {
        return Status::Failure;
    }
    if agent.at_destination() {
        agent.phase = RoutePhase::Arrived;
        return Status::Success;
    }

    let Some(next) = agent.next_waypoint().cloned() else {
        // End of a path that does not reach the destination.
        warn!(agent = %agent.name, at = %agent.location, "path ended before destination");
        agent.clear_path();
        return Status::Failure;
    };

    let now = ctx.tick();
    if ctx.faults.trip(agent.id, &next, now) {
        debug!(agent = %agent.name, at = %agent.location, %next, %now, "blocked");
        agent.phase = RoutePhase::Blocked;
        let at = agent.location.clone();
        ctx.emit(agent, EventKind::Blocked { at, next });
        return Status::Failure;
    }

    let Some(from) = agent.step() else {
        return Status::Failure;
    };
    debug!(agent = %agent.name, %from, to = %agent.location, "moved");
    let to = agent.location.clone();
    ctx.emit(agent, EventKind::Moved { from, to });

    if agent.at_destination() {
        agent.phase = RoutePhase::Arrived;
        Status::Success
    } else {
        agent.phase = RoutePhase::Following;
        Status::Running
    }
}

/// Pick the item up at the pickup destination and head for the hub.
pub fn pick_up(agent: &mut AgentState, ctx: &mut SimContext) -> Status {
    if agent.carrying || !agent.at_destination() {
        return Status::Failure;
    }
    let at = agent.location.clone();
    info!(agent = %agent.name, %at, tick = %ctx.tick(), "picked up item");
    ctx.emit(agent, EventKind::PickedUp { at });

    agent.assign_delivery(ctx.hub.clone());
    if let Some(task) = agent.task.clone() {
        ctx.emit(agent, EventKind::TaskAssigned { task });
    }
    Status::Success
}

/// Drop the item off at the hub and take the next queued pickup, if any.
pub fn drop_off(agent: &mut AgentState, ctx: &mut SimContext) -> Status {
    if !agent.carrying || !agent.at_destination() {
        return Status::Failure;
    }
    let at = agent.location.clone();
    info!(agent = %agent.name, %at, tick = %ctx.tick(), "dropped off item");
    ctx.emit(agent, EventKind::DroppedOff { at });

    if let Some(task) = agent.finish_task().cloned() {
        ctx.emit(agent, EventKind::TaskAssigned { task });
    }
    Status::Success
}

/// Look for a detour around whatever stopped the current task.
///
/// A scripted detour for `(task.origin, task.destination)` is installed into
/// the shared table together with its reverse, provided it passes through
/// the agent's location.  A detour the agent cannot join is left out of the
/// table.  Either way the cached path is cleared, so the next tick queries
/// the table again.
pub fn explore(agent: &mut AgentState, ctx: &mut SimContext) -> Status {
    let Some(task) = agent.task.clone() else {
        return Status::Failure;
    };
    debug!(agent = %agent.name, tick = %ctx.tick(), %task, "exploring");

    let discovered = ctx
        .detours
        .get(&task.origin, &task.destination)
        .cloned()
        .filter(|route| {
            let reachable = route.position_of(&agent.location).is_some();
            if !reachable {
                warn!(agent = %agent.name, at = %agent.location, %route, "detour does not pass through agent");
            }
            reachable
        })
        .and_then(|route| {
            match ctx.routes.set(&task.origin, &task.destination, route.clone()) {
                Ok(()) => Some(route),
                Err(e) => {
                    warn!(agent = %agent.name, error = %e, "detour rejected");
                    None
                }
            }
        });

    match discovered {
        Some(route) => {
            info!(agent = %agent.name, %route, "discovered detour");
            ctx.emit(agent, EventKind::RouteDiscovered {
                origin:      task.origin,
                destination: task.destination,
                route,
            });
        }
        None => {
            debug!(agent = %agent.name, %task, "no detour");
            ctx.emit(agent, EventKind::NoDetour {
                origin:      task.origin,
                destination: task.destination,
            });
        }
    }

    agent.clear_path();
    Status::Success
}
