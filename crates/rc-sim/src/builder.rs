//! Fluent builder for constructing a [`Sim`].

use rc_agent::AgentStore;
use rc_behavior::{courier_tree, BehaviorTree, SimContext};
use rc_core::SimConfig;
use tracing::debug;

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`]: total ticks, snapshot interval, pacing
/// - [`AgentStore`]: from [`rc_agent::AgentStoreBuilder`]
/// - [`SimContext`]: hub, route table, detours, faults
///
/// # Optional inputs (have defaults)
///
/// | Method        | Default                                 |
/// |---------------|-----------------------------------------|
/// | `.trees(v)`   | One [`courier_tree`] per agent, by name |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, agents, ctx).build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config: SimConfig,
    agents: AgentStore,
    ctx:    SimContext,
    trees:  Option<Vec<BehaviorTree>>,
}

impl SimBuilder {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, agents: AgentStore, ctx: SimContext) -> Self {
        Self { config, agents, ctx, trees: None }
    }

    /// Supply one tree per agent, indexed by `AgentId`.
    pub fn trees(mut self, trees: Vec<BehaviorTree>) -> Self {
        self.trees = Some(trees);
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        let agent_count = self.agents.count();
        if agent_count == 0 {
            return Err(SimError::Config("no agents to simulate".into()));
        }

        let trees = match self.trees {
            Some(t) => {
                if t.len() != agent_count {
                    return Err(SimError::AgentCountMismatch {
                        expected: agent_count,
                        got:      t.len(),
                        what:     "behavior trees",
                    });
                }
                t
            }
            None => self.agents.iter().map(|a| courier_tree(&a.name)).collect(),
        };

        debug!(
            agents = agent_count,
            routes = self.ctx.routes.len(),
            detours = self.ctx.detours.len(),
            faults = self.ctx.faults.len(),
            hub = %self.ctx.hub,
            "sim built"
        );

        Ok(Sim {
            config: self.config,
            agents: self.agents,
            trees,
            ctx:    self.ctx,
        })
    }
}
