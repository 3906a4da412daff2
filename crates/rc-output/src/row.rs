//! Plain data row types written by output backends.

use rc_agent::AgentState;
use rc_behavior::Event;
use rc_core::Tick;

/// One event, flattened for tabular output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRow {
    pub tick:     u64,
    pub agent_id: u32,
    pub agent:    String,
    /// Stable label such as `moved` or `route_discovered`.
    pub kind:     &'static str,
    /// Where the agent was, or empty if the event does not say.
    pub location: String,
    /// Human-readable description of the event.
    pub detail:   String,
}

impl From<&Event> for EventRow {
    fn from(event: &Event) -> Self {
        Self {
            tick:     event.tick.0,
            agent_id: event.agent.0,
            agent:    event.name.clone(),
            kind:     event.kind.label(),
            location: event.kind.location().map(|l| l.to_string()).unwrap_or_default(),
            detail:   event.kind.to_string(),
        }
    }
}

/// A snapshot of one agent's state at a given tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentSnapshotRow {
    pub agent_id: u32,
    pub tick:     u64,
    pub agent:    String,
    pub location: String,
    pub carrying: bool,
    /// `pickup A -> ...` style description; empty when idle.
    pub task:     String,
    pub phase:    &'static str,
    /// Cached path as space-separated waypoints; empty when none.
    pub path:     String,
    pub cursor:   u32,
}

impl AgentSnapshotRow {
    pub fn new(tick: Tick, agent: &AgentState) -> Self {
        let path: Vec<&str> = agent.path.iter().map(|l| l.as_str()).collect();
        Self {
            agent_id: agent.id.0,
            tick:     tick.0,
            agent:    agent.name.clone(),
            location: agent.location.to_string(),
            carrying: agent.carrying,
            task:     agent.task.as_ref().map(|t| t.to_string()).unwrap_or_default(),
            phase:    agent.phase.label(),
            path:     path.join(" "),
            cursor:   agent.cursor as u32,
        }
    }
}
