//! Fluent builder for `AgentStore`.
//!
//! # Usage
//!
//! ```rust
//! use rc_agent::AgentStoreBuilder;
//! use rc_core::Location;
//!
//! let store = AgentStoreBuilder::new()
//!     .agent("Agent1", Location::new("E"), [Location::new("A")])
//!     .agent("Agent2", Location::new("E"), [Location::new("B")])
//!     .build();
//!
//! assert_eq!(store.count(), 2);
//! assert!(!store.all_idle());
//! ```

use rc_core::{AgentId, Location};

use crate::{AgentState, AgentStore};

/// Fluent builder for [`AgentStore`].
///
/// Agents receive ascending `AgentId`s in the order they are added.
#[derive(Default)]
pub struct AgentStoreBuilder {
    agents: Vec<AgentState>,
}

impl AgentStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an agent starting at `start`.
    ///
    /// The first entry of `pickups` becomes its initial pickup task; the rest
    /// are queued and assigned one per completed delivery.  An empty list
    /// leaves the agent idle.
    pub fn agent<I>(mut self, name: impl Into<String>, start: Location, pickups: I) -> Self
    where
        I: IntoIterator<Item = Location>,
    {
        let id = AgentId(self.agents.len() as u32);
        let mut agent = AgentState::new(id, name, start);
        agent.pending_pickups.extend(pickups);
        if let Some(first) = agent.pending_pickups.pop_front() {
            agent.assign_pickup(first);
        }
        self.agents.push(agent);
        self
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    pub fn build(self) -> AgentStore {
        AgentStore::new(self.agents)
    }
}
