//! `rc-sim`: tick loop orchestrator for the rust_courier simulation.
//!
//! # Tick loop
//!
//! ```text
//! for step in 0..config.total_ticks:
//!   ① Clock     advance and publish the new tick (the first tick is T1).
//!   ② Agents    tick each agent's tree once, in ascending AgentId order.
//!               Every tree sees the shared tables as left by the agents
//!               before it this tick.
//!   ③ Events    drain the context's event buffer and hand it to the observer.
//!   ④ Snapshot  every `output_interval_ticks`.
//!   ⑤ Pacing    sleep `step_delay_ms` if configured.
//! ```
//!
//! Nothing an agent does feeds back into scheduling: every agent is ticked
//! every step, idle or not.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rc_agent::AgentStoreBuilder;
//! use rc_behavior::SimContext;
//! use rc_core::{Location, SimConfig};
//! use rc_sim::{EventLog, SimBuilder};
//!
//! let agents = AgentStoreBuilder::new()
//!     .agent("Agent1", Location::new("E"), [Location::new("A")])
//!     .build();
//! let ctx = SimContext::new(Location::new("E"), routes);
//! let mut sim = SimBuilder::new(SimConfig::with_ticks(5), agents, ctx).build()?;
//! let mut log = EventLog::new();
//! sim.run(&mut log)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{EventLog, NoopObserver, SimObserver};
pub use sim::Sim;
