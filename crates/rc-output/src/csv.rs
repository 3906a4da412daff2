//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `events.csv`
//! - `agent_snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{AgentSnapshotRow, EventRow, OutputResult};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    events:    Writer<File>,
    snapshots: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut events = Writer::from_path(dir.join("events.csv"))?;
        events.write_record(["tick", "agent_id", "agent", "kind", "location", "detail"])?;

        let mut snapshots = Writer::from_path(dir.join("agent_snapshots.csv"))?;
        snapshots.write_record([
            "agent_id", "tick", "agent", "location", "carrying", "task", "phase", "path", "cursor",
        ])?;

        Ok(Self {
            events,
            snapshots,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_events(&mut self, rows: &[EventRow]) -> OutputResult<()> {
        for row in rows {
            self.events.write_record([
                row.tick.to_string().as_str(),
                row.agent_id.to_string().as_str(),
                row.agent.as_str(),
                row.kind,
                row.location.as_str(),
                row.detail.as_str(),
            ])?;
        }
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[AgentSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record([
                row.agent_id.to_string().as_str(),
                row.tick.to_string().as_str(),
                row.agent.as_str(),
                row.location.as_str(),
                if row.carrying { "1" } else { "0" },
                row.task.as_str(),
                row.phase,
                row.path.as_str(),
                row.cursor.to_string().as_str(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.events.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}
