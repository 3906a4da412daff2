//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use rc_agent::AgentStore;
use rc_behavior::Event;
use rc_core::Tick;
use rc_sim::SimObserver;
use tracing::warn;

use crate::row::{AgentSnapshotRow, EventRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes each tick's events and periodic agent
/// snapshots to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:        W,
    event_rows:    usize,
    snapshot_rows: usize,
    last_error:    Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            event_rows:    0,
            snapshot_rows: 0,
            last_error:    None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Event rows handed to the writer so far.
    pub fn event_rows(&self) -> usize {
        self.event_rows
    }

    /// Snapshot rows handed to the writer so far.
    pub fn snapshot_rows(&self) -> usize {
        self.snapshot_rows
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            warn!(error = %e, "output write failed");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, _tick: Tick, events: &[Event]) {
        if events.is_empty() {
            return;
        }
        let rows: Vec<EventRow> = events.iter().map(EventRow::from).collect();
        self.event_rows += rows.len();
        let result = self.writer.write_events(&rows);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore) {
        let rows: Vec<AgentSnapshotRow> = agents
            .iter()
            .map(|agent| AgentSnapshotRow::new(tick, agent))
            .collect();

        if !rows.is_empty() {
            self.snapshot_rows += rows.len();
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
