//! CSV roster loader.
//!
//! # CSV format
//!
//! One row per agent, in `AgentId` order.  `pickups` is a space-separated
//! list of pickup targets; the first becomes the initial task.
//!
//! ```csv
//! name,start,pickups
//! Agent1,E,A
//! Agent2,E,B D
//! ```

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use rc_core::Location;

use crate::{AgentError, AgentResult, AgentStore, AgentStoreBuilder};

#[derive(Deserialize)]
struct RosterRecord {
    name:    String,
    start:   String,
    #[serde(default)]
    pickups: String,
}

/// Load the agent roster from a CSV file.
pub fn load_roster_csv(path: &Path) -> AgentResult<AgentStore> {
    let file = std::fs::File::open(path).map_err(AgentError::Io)?;
    load_roster_reader(file)
}

/// Like [`load_roster_csv`] but accepts any `Read` source.
pub fn load_roster_reader<R: Read>(reader: R) -> AgentResult<AgentStore> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut builder = AgentStoreBuilder::new();
    for result in csv_reader.deserialize::<RosterRecord>() {
        let row = result.map_err(|e| AgentError::Parse(e.to_string()))?;
        if row.name.is_empty() {
            return Err(AgentError::Parse(format!(
                "agent {} has an empty name",
                builder.len()
            )));
        }
        let start: Location = row.start.parse()?;
        let pickups = row
            .pickups
            .split_whitespace()
            .map(str::parse::<Location>)
            .collect::<Result<Vec<_>, _>>()?;
        builder = builder.agent(row.name, start, pickups);
    }
    Ok(builder.build())
}
