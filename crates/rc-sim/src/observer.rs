//! Simulation observer trait for progress reporting and data collection.

use rc_agent::AgentStore;
use rc_behavior::Event;
use rc_core::{AgentId, Tick};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: event printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl SimObserver for Printer {
///     fn on_event(&mut self, event: &Event) {
///         println!("{event}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, after the clock has advanced
    /// and before any agent is ticked.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per event, in the order the agents produced them.
    fn on_event(&mut self, _event: &Event) {}

    /// Called at the end of each tick with every event of that tick.
    fn on_tick_end(&mut self, _tick: Tick, _events: &[Event]) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks` ticks).
    ///
    /// Provides read-only access to every agent so that output writers can
    /// record a snapshot without the sim knowing about any output format.
    fn on_snapshot(&mut self, _tick: Tick, _agents: &AgentStore) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

// ── EventLog ──────────────────────────────────────────────────────────────────

/// Records every event of the run, in order.
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    events:    Vec<Event>,
    ticks:     u64,
    snapshots: u64,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }

    /// Events produced by one agent.
    pub fn for_agent(&self, agent: AgentId) -> impl Iterator<Item = &Event> + '_ {
        self.events.iter().filter(move |e| e.agent == agent)
    }

    /// Events produced during one tick.
    pub fn at_tick(&self, tick: Tick) -> impl Iterator<Item = &Event> + '_ {
        self.events.iter().filter(move |e| e.tick == tick)
    }

    /// Number of ticks observed.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn snapshots(&self) -> u64 {
        self.snapshots
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl SimObserver for EventLog {
    fn on_event(&mut self, event: &Event) {
        self.events.push(event.clone());
    }

    fn on_tick_end(&mut self, _tick: Tick, _events: &[Event]) {
        self.ticks += 1;
    }

    fn on_snapshot(&mut self, _tick: Tick, _agents: &AgentStore) {
        self.snapshots += 1;
    }
}
