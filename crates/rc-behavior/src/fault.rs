//! Declarative fault injection.
//!
//! A [`Fault`] blocks one agent from stepping onto one waypoint at one tick.
//! The follow-path action consults the table generically, so new scenarios
//! are data, not code.
//!
//! # CSV format
//!
//! ```csv
//! agent_id,waypoint,tick
//! 2,V,2
//! 0,Y,2
//! ```

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use rc_core::{AgentId, Location, Tick};

use crate::{BehaviorError, BehaviorResult};

/// One scripted blockage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fault {
    pub agent:    AgentId,
    pub waypoint: Location,
    pub tick:     Tick,
}

impl Fault {
    pub fn new(agent: AgentId, waypoint: Location, tick: Tick) -> Self {
        Self { agent, waypoint, tick }
    }
}

/// Set of pending faults.  Each fires at most once.
#[derive(Debug, Clone, Default)]
pub struct FaultTable {
    pending: HashSet<Fault>,
}

impl FaultTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_faults<I>(faults: I) -> Self
    where
        I: IntoIterator<Item = Fault>,
    {
        Self { pending: faults.into_iter().collect() }
    }

    pub fn insert(&mut self, fault: Fault) {
        self.pending.insert(fault);
    }

    /// Fire the fault for `(agent, waypoint, tick)` if one is pending.
    ///
    /// Returns `true` when the step must fail.  The fault is consumed.
    pub fn trip(&mut self, agent: AgentId, waypoint: &Location, tick: Tick) -> bool {
        self.pending.remove(&Fault::new(agent, waypoint.clone(), tick))
    }

    pub fn contains(&self, fault: &Fault) -> bool {
        self.pending.contains(fault)
    }

    /// Number of faults that have not fired yet.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct FaultRecord {
    agent_id: u32,
    waypoint: String,
    tick:     u64,
}

/// Load a [`FaultTable`] from a CSV file.
pub fn load_faults_csv(path: &Path) -> BehaviorResult<FaultTable> {
    let file = std::fs::File::open(path).map_err(BehaviorError::Io)?;
    load_faults_reader(file)
}

/// Like [`load_faults_csv`] but accepts any `Read` source.
pub fn load_faults_reader<R: Read>(reader: R) -> BehaviorResult<FaultTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut table = FaultTable::new();
    for result in csv_reader.deserialize::<FaultRecord>() {
        let row = result.map_err(|e| BehaviorError::Parse(e.to_string()))?;
        table.insert(Fault::new(AgentId(row.agent_id), row.waypoint.parse()?, Tick(row.tick)));
    }
    Ok(table)
}
