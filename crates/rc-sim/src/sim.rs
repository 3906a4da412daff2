//! The `Sim` struct and its tick loop.

use rc_agent::AgentStore;
use rc_behavior::{BehaviorTree, SimContext};
use rc_core::{SimConfig, Tick};
use tracing::{debug, info, trace};

use crate::{SimObserver, SimResult};

/// The main simulation runner.
///
/// Each step advances the shared clock, then ticks every agent's tree exactly
/// once in ascending `AgentId` order against the one shared [`SimContext`].
/// Agents later in the order see table writes (discovered detours) made by
/// agents earlier in the same tick.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Global configuration (total ticks, snapshot interval, pacing).
    pub config: SimConfig,

    /// Every courier, indexed by `AgentId`.
    pub agents: AgentStore,

    /// One tree per agent, indexed by `AgentId`.
    pub trees: Vec<BehaviorTree>,

    /// Clock, route tables, faults and the event buffer.
    pub ctx: SimContext,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        info!(ticks = self.config.total_ticks, agents = self.agents.count(), "simulation start");
        while self.ctx.tick() < self.config.end_tick() {
            self.step(observer);
        }
        let final_tick = self.ctx.tick();
        observer.on_sim_end(final_tick);
        info!(%final_tick, idle = self.agents.all_idle(), "simulation end");
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer);
        }
        Ok(())
    }

    /// The last tick that was run, `Tick::ZERO` before the first.
    pub fn now(&self) -> Tick {
        self.ctx.tick()
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.ctx.clock.advance();
        observer.on_tick_start(now);

        for (agent, tree) in self.agents.iter_mut().zip(self.trees.iter_mut()) {
            let status = tree.tick(agent, &mut self.ctx);
            trace!(agent = %agent.name, %status, at = %agent.location, "ticked");
        }

        let events = self.ctx.take_events();
        debug!(tick = %now, events = events.len(), "tick complete");
        for event in &events {
            observer.on_event(event);
        }
        observer.on_tick_end(now, &events);

        if self.config.output_interval_ticks > 0
            && now.0.is_multiple_of(self.config.output_interval_ticks)
        {
            observer.on_snapshot(now, &self.agents);
        }

        if let Some(delay) = self.config.step_delay() {
            std::thread::sleep(delay);
        }
    }
}
