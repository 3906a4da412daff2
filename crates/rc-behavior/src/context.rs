//! Shared simulation state passed to every behavior tick.

use rc_agent::AgentState;
use rc_core::{Location, SimClock, Tick};
use rc_routes::{DetourTable, RouteTable};

use crate::{Event, EventKind, FaultTable};

/// The blackboard every agent's tree reads and writes.
///
/// One `SimContext` owns the clock and every shared table for the whole run.
/// The runner passes it by `&mut` to each agent tick in turn, so exactly one
/// tick touches it at a time.
pub struct SimContext {
    /// Simulated time, advanced by the runner before agents are ticked.
    pub clock: SimClock,

    /// The shared route table.  Written only by the explore action.
    pub routes: RouteTable,

    /// Alternate routes the explore action can discover.
    pub detours: DetourTable,

    /// Scripted one-shot blockages.
    pub faults: FaultTable,

    /// Delivery destination for every agent.
    pub hub: Location,

    /// Events produced since the runner last drained them.
    events: Vec<Event>,
}

impl SimContext {
    /// A context at `Tick::ZERO` with no detours and no faults.
    pub fn new(hub: Location, routes: RouteTable) -> Self {
        Self {
            clock: SimClock::new(),
            routes,
            detours: DetourTable::new(),
            faults: FaultTable::new(),
            hub,
            events: Vec::new(),
        }
    }

    pub fn with_detours(mut self, detours: DetourTable) -> Self {
        self.detours = detours;
        self
    }

    pub fn with_faults(mut self, faults: FaultTable) -> Self {
        self.faults = faults;
        self
    }

    /// Current simulated tick.
    #[inline]
    pub fn tick(&self) -> Tick {
        self.clock.current_tick
    }

    /// Record an event for `agent` at the current tick.
    pub fn emit(&mut self, agent: &AgentState, kind: EventKind) {
        self.events.push(Event {
            tick:  self.clock.current_tick,
            agent: agent.id,
            name:  agent.name.clone(),
            kind,
        });
    }

    /// Events buffered since the last [`take_events`][Self::take_events].
    pub fn pending_events(&self) -> &[Event] {
        &self.events
    }

    /// Hand the buffered events over, leaving the buffer empty.
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}
