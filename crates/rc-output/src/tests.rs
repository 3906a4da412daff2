//! Integration tests for rc-output.

use rc_agent::AgentStoreBuilder;
use rc_behavior::{Event, EventKind, SimContext};
use rc_core::{AgentId, Location, SimConfig, Tick};
use rc_routes::{Route, RouteTable};

use crate::row::{AgentSnapshotRow, EventRow};

fn loc(s: &str) -> Location {
    Location::new(s)
}

fn moved(tick: u64, agent: u32, from: &str, to: &str) -> EventRow {
    EventRow::from(&Event {
        tick:  Tick(tick),
        agent: AgentId(agent),
        name:  format!("Agent{}", agent + 1),
        kind:  EventKind::Moved { from: loc(from), to: loc(to) },
    })
}

fn snap_row(agent_id: u32, tick: u64) -> AgentSnapshotRow {
    AgentSnapshotRow {
        agent_id,
        tick,
        agent:    format!("Agent{}", agent_id + 1),
        location: "E".into(),
        carrying: false,
        task:     String::new(),
        phase:    "arrived",
        path:     String::new(),
        cursor:   0,
    }
}

#[cfg(test)]
mod row_tests {
    use super::*;

    #[test]
    fn event_row_flattens_event() {
        let row = moved(1, 0, "E", "X");
        assert_eq!(row.tick, 1);
        assert_eq!(row.agent, "Agent1");
        assert_eq!(row.kind, "moved");
        assert_eq!(row.location, "X");
        assert_eq!(row.detail, "moves from E to X");
    }

    #[test]
    fn snapshot_row_describes_agent() {
        let store = AgentStoreBuilder::new()
            .agent("Agent1", loc("E"), [loc("A")])
            .build();
        let mut agent = store[AgentId(0)].clone();
        agent.follow(vec![loc("E"), loc("X"), loc("Y"), loc("A")]);
        agent.step();

        let row = AgentSnapshotRow::new(Tick(1), &agent);
        assert_eq!(row.location, "X");
        assert_eq!(row.task, "pickup E -> A");
        assert_eq!(row.phase, "following");
        assert_eq!(row.path, "E X Y A");
        assert_eq!(row.cursor, 1);
        assert!(!row.carrying);
    }
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::csv::CsvWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(path: std::path::PathBuf) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("events.csv").exists());
        assert!(dir.path().join("agent_snapshots.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        assert_eq!(
            headers(dir.path().join("events.csv")),
            ["tick", "agent_id", "agent", "kind", "location", "detail"],
        );
        assert_eq!(
            headers(dir.path().join("agent_snapshots.csv")),
            ["agent_id", "tick", "agent", "location", "carrying", "task", "phase", "path", "cursor"],
        );
    }

    #[test]
    fn csv_events_written_in_order() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_events(&[moved(1, 0, "E", "X"), moved(1, 1, "E", "Z")]).unwrap();
        w.write_events(&[moved(2, 0, "X", "Y")]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("events.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][2], "Agent1");
        assert_eq!(&rows[1][4], "Z");       // location
        assert_eq!(&rows[2][0], "2");       // tick
        assert_eq!(&rows[2][5], "moves from X to Y");
    }

    #[test]
    fn csv_snapshots_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_snapshots(&[snap_row(0, 5), snap_row(1, 5)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][0], "1");
        assert_eq!(&rows[1][4], "0");       // carrying
        assert_eq!(&rows[1][6], "arrived");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn integration_csv() {
        use rc_sim::SimBuilder;

        use crate::observer::SimOutputObserver;

        let agents = AgentStoreBuilder::new()
            .agent("Agent1", loc("E"), [loc("A")])
            .agent("Agent2", loc("E"), [loc("B")])
            .build();
        let routes = RouteTable::from_routes([
            Route::parse("E X Y A").unwrap(),
            Route::parse("E Z B").unwrap(),
        ]);
        let ctx = SimContext::new(loc("E"), routes);
        let config = SimConfig {
            total_ticks:           6,
            output_interval_ticks: 2,
            step_delay_ms:         None,
        };
        let mut sim = SimBuilder::new(config, agents, ctx).build().unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        // Snapshots at T2, T4, T6 for two agents.
        assert_eq!(obs.snapshot_rows(), 6);
        let mut rdr = csv::Reader::from_path(dir.path().join("agent_snapshots.csv")).unwrap();
        assert_eq!(rdr.records().count(), 6);

        let mut rdr = csv::Reader::from_path(dir.path().join("events.csv")).unwrap();
        let kinds: Vec<String> = rdr.records().map(|r| r.unwrap()[3].to_owned()).collect();
        assert_eq!(kinds.len(), obs.event_rows());
        assert_eq!(kinds.iter().filter(|k| *k == "dropped_off").count(), 2);
    }
}

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_event_rows() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_events(&[moved(1, 0, "E", "X"), moved(2, 0, "X", "Y")]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM events", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 2);
        let last: String = conn
            .query_row("SELECT location FROM events ORDER BY seq DESC LIMIT 1", [], |r| r.get(0))
            .unwrap();
        assert_eq!(last, "Y");
    }

    #[test]
    fn sqlite_carrying_as_integer() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        let mut row = snap_row(0, 3);
        row.carrying = true;
        w.write_snapshots(&[row]).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let carrying: i64 = conn
            .query_row("SELECT carrying FROM agent_snapshots WHERE agent_id = 0", [], |r| r.get(0))
            .unwrap();
        assert_eq!(carrying, 1);
    }

    #[test]
    fn sqlite_empty_batches_ok() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_events(&[]).unwrap();
        w.write_snapshots(&[]).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}
