//! `AgentStore`: every courier, indexed by `AgentId`.

use rc_core::AgentId;

use crate::AgentState;

/// Dense storage for all agents.
///
/// `agents[i].id == AgentId(i)` for every agent; the builder guarantees it.
/// The runner ticks agents in this order, which makes runs deterministic.
#[derive(Debug, Clone, Default)]
pub struct AgentStore {
    agents: Vec<AgentState>,
}

impl AgentStore {
    pub(crate) fn new(agents: Vec<AgentState>) -> Self {
        Self { agents }
    }

    /// Number of agents.
    #[inline]
    pub fn count(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.agents.len() as u32).map(AgentId)
    }

    pub fn get(&self, agent: AgentId) -> Option<&AgentState> {
        self.agents.get(agent.index())
    }

    pub fn get_mut(&mut self, agent: AgentId) -> Option<&mut AgentState> {
        self.agents.get_mut(agent.index())
    }

    /// Look an agent up by display name.
    pub fn by_name(&self, name: &str) -> Option<&AgentState> {
        self.agents.iter().find(|a| a.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AgentState> {
        self.agents.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, AgentState> {
        self.agents.iter_mut()
    }

    /// `true` once every agent has gone idle.
    pub fn all_idle(&self) -> bool {
        self.agents.iter().all(AgentState::is_idle)
    }
}

impl std::ops::Index<AgentId> for AgentStore {
    type Output = AgentState;

    #[inline]
    fn index(&self, agent: AgentId) -> &AgentState {
        &self.agents[agent.index()]
    }
}

impl std::ops::IndexMut<AgentId> for AgentStore {
    #[inline]
    fn index_mut(&mut self, agent: AgentId) -> &mut AgentState {
        &mut self.agents[agent.index()]
    }
}
