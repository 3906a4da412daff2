//! The built-in three-courier scenario, with per-table CSV overrides.

use std::io::Cursor;
use std::path::PathBuf;

use anyhow::{Context, Result};

use rc_agent::{load_roster_csv, load_roster_reader, AgentStore};
use rc_behavior::{load_faults_csv, load_faults_reader, FaultTable, SimContext};
use rc_core::Location;
use rc_routes::{
    load_detours_csv, load_detours_reader, load_routes_csv, load_routes_reader, DetourTable,
    RouteTable,
};

pub const HUB: &str = "E";

// ── Embedded tables ───────────────────────────────────────────────────────────

// Four spokes out of hub E.  Reverse directions are installed automatically.
const ROUTES_CSV: &str = "\
origin,destination,waypoints\n\
E,A,E X Y A\n\
E,B,E Z B\n\
E,C,E W V C\n\
E,D,E U T D\n\
";

const DETOURS_CSV: &str = "\
origin,destination,waypoints\n\
E,C,E W P Q C\n\
A,E,A X M N E\n\
";

// Agent3 (id 2) cannot enter V on T2; Agent1 (id 0) cannot enter Y on T2.
const FAULTS_CSV: &str = "\
agent_id,waypoint,tick\n\
2,V,2\n\
0,Y,2\n\
";

const ROSTER_CSV: &str = "\
name,start,pickups\n\
Agent1,E,A\n\
Agent2,E,B\n\
Agent3,E,C\n\
";

// ── Scenario ──────────────────────────────────────────────────────────────────

/// Optional file overrides for each table.
#[derive(Debug, Default)]
pub struct Overrides {
    pub hub:     Option<Location>,
    pub routes:  Option<PathBuf>,
    pub detours: Option<PathBuf>,
    pub faults:  Option<PathBuf>,
    pub roster:  Option<PathBuf>,
}

pub struct Scenario {
    pub hub:     Location,
    pub agents:  AgentStore,
    pub routes:  RouteTable,
    pub detours: DetourTable,
    pub faults:  FaultTable,
}

impl Scenario {
    /// Load every table from its override file, or the embedded default.
    pub fn load(overrides: &Overrides) -> Result<Self> {
        let hub = overrides.hub.clone().unwrap_or_else(|| Location::new(HUB));
        let routes = match &overrides.routes {
            Some(path) => load_routes_csv(path)
                .with_context(|| format!("loading routes from {}", path.display()))?,
            None => load_routes_reader(Cursor::new(ROUTES_CSV))?,
        };
        let detours = match &overrides.detours {
            Some(path) => load_detours_csv(path)
                .with_context(|| format!("loading detours from {}", path.display()))?,
            None => load_detours_reader(Cursor::new(DETOURS_CSV))?,
        };
        let faults = match &overrides.faults {
            Some(path) => load_faults_csv(path)
                .with_context(|| format!("loading faults from {}", path.display()))?,
            None => load_faults_reader(Cursor::new(FAULTS_CSV))?,
        };
        let agents = match &overrides.roster {
            Some(path) => load_roster_csv(path)
                .with_context(|| format!("loading roster from {}", path.display()))?,
            None => load_roster_reader(Cursor::new(ROSTER_CSV))?,
        };
        Ok(Self { hub, agents, routes, detours, faults })
    }

    /// Split into the agent store and the shared context.
    pub fn into_parts(self) -> (AgentStore, SimContext) {
        let ctx = SimContext::new(self.hub, self.routes)
            .with_detours(self.detours)
            .with_faults(self.faults);
        (self.agents, ctx)
    }
}
