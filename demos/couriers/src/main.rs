//! couriers: three agents sharing one route table out of hub E.
//!
//! Each agent runs its own behavior tree (deliver / pick up / explore).
//! Two scripted blockages on T2 force Agent1 and Agent3 to explore; the
//! detours they discover are written back to the shared table and used by
//! everyone from then on.
//!
//! Every table can be replaced from CSV (`--routes`, `--detours`, `--faults`,
//! `--roster`), and `--hub` moves the delivery hub.  `--output DIR` writes
//! `events.csv` and `agent_snapshots.csv`; `--json` prints events as JSON
//! lines.

mod scenario;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use rc_agent::AgentStore;
use rc_behavior::Event;
use rc_core::{Location, SimConfig, Tick};
use rc_output::{CsvWriter, SimOutputObserver};
use rc_sim::{SimBuilder, SimObserver};

use scenario::{Overrides, Scenario};

// ── CLI ───────────────────────────────────────────────────────────────────────

/// Shared-route courier simulation.
#[derive(Parser, Debug)]
#[command(name = "couriers", version, about)]
struct Args {
    /// Number of ticks to simulate.
    #[arg(short, long, default_value_t = 5)]
    ticks: u64,

    /// Delivery hub every item is carried back to [default: E].
    #[arg(long, value_name = "LOCATION")]
    hub: Option<Location>,

    /// Route table CSV (`origin,destination,waypoints`).
    #[arg(long, value_name = "FILE")]
    routes: Option<PathBuf>,

    /// Detour table CSV, same columns as `--routes`.
    #[arg(long, value_name = "FILE")]
    detours: Option<PathBuf>,

    /// Fault table CSV (`agent_id,waypoint,tick`).
    #[arg(long, value_name = "FILE")]
    faults: Option<PathBuf>,

    /// Roster CSV (`name,start,pickups`).
    #[arg(long, value_name = "FILE")]
    roster: Option<PathBuf>,

    /// Write events.csv and agent_snapshots.csv into this directory.
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Pause between ticks, in milliseconds.
    #[arg(long, value_name = "MS")]
    step_delay_ms: Option<u64>,

    /// Print events as JSON lines instead of text.
    #[arg(long)]
    json: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

// ── Console observer ──────────────────────────────────────────────────────────

/// Prints the event log and forwards everything to an optional file writer.
struct ConsoleObserver {
    json:       bool,
    output:     Option<SimOutputObserver<CsvWriter>>,
    events:     usize,
    last_error: Option<serde_json::Error>,
}

impl ConsoleObserver {
    fn new(json: bool, output: Option<SimOutputObserver<CsvWriter>>) -> Self {
        Self { json, output, events: 0, last_error: None }
    }
}

impl SimObserver for ConsoleObserver {
    fn on_tick_start(&mut self, tick: Tick) {
        if !self.json {
            println!("\nTime {}:", tick.0);
        }
        if let Some(out) = &mut self.output {
            out.on_tick_start(tick);
        }
    }

    fn on_event(&mut self, event: &Event) {
        self.events += 1;
        if self.json {
            match serde_json::to_string(event) {
                Ok(line) => println!("{line}"),
                Err(e) => {
                    if self.last_error.is_none() {
                        self.last_error = Some(e);
                    }
                }
            }
        } else {
            println!("{}: {}", event.name, event.kind);
        }
        if let Some(out) = &mut self.output {
            out.on_event(event);
        }
    }

    fn on_tick_end(&mut self, tick: Tick, events: &[Event]) {
        if let Some(out) = &mut self.output {
            out.on_tick_end(tick, events);
        }
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore) {
        if let Some(out) = &mut self.output {
            out.on_snapshot(tick, agents);
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        if let Some(out) = &mut self.output {
            out.on_sim_end(final_tick);
        }
    }
}

fn open_output(dir: &Path) -> Result<SimOutputObserver<CsvWriter>> {
    std::fs::create_dir_all(dir)?;
    let writer = CsvWriter::new(dir)?;
    Ok(SimOutputObserver::new(writer))
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    // 1. Scenario tables.
    let overrides = Overrides {
        hub:     args.hub.clone(),
        routes:  args.routes.clone(),
        detours: args.detours.clone(),
        faults:  args.faults.clone(),
        roster:  args.roster.clone(),
    };
    let scenario = Scenario::load(&overrides)?;
    info!(
        agents = scenario.agents.count(),
        routes = scenario.routes.len(),
        detours = scenario.detours.len(),
        faults = scenario.faults.len(),
        hub = %scenario.hub,
        "scenario loaded"
    );
    let (agents, ctx) = scenario.into_parts();

    // 2. Sim.
    let config = SimConfig {
        total_ticks:           args.ticks,
        output_interval_ticks: 1,
        step_delay_ms:         args.step_delay_ms,
    };
    let mut sim = SimBuilder::new(config, agents, ctx).build()?;

    // 3. Observers.
    let output = args.output.as_deref().map(open_output).transpose()?;
    let mut obs = ConsoleObserver::new(args.json, output);

    // 4. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.last_error.take() {
        warn!(error = %e, "failed to encode events as JSON");
    }
    if let Some(out) = &mut obs.output {
        if let Some(e) = out.take_error() {
            eprintln!("output error: {e}");
        }
    }

    // 5. Summary.
    if args.json {
        return Ok(());
    }
    println!();
    println!(
        "Simulation complete in {:.3} ms: {} ticks, {} events",
        elapsed.as_secs_f64() * 1_000.0,
        sim.now().0,
        obs.events,
    );
    if let (Some(dir), Some(out)) = (&args.output, &obs.output) {
        println!("  {}/events.csv          : {} rows", dir.display(), out.event_rows());
        println!("  {}/agent_snapshots.csv : {} rows", dir.display(), out.snapshot_rows());
    }
    println!();

    println!("{:<10} {:<8} {:<9} {:<24}", "Agent", "At", "Carrying", "Task");
    println!("{}", "-".repeat(54));
    for agent in sim.agents.iter() {
        let task = agent
            .task
            .as_ref()
            .map(|t| t.to_string())
            .unwrap_or_else(|| "idle".into());
        println!(
            "{:<10} {:<8} {:<9} {:<24}",
            agent.name,
            agent.location.as_str(),
            if agent.carrying { "yes" } else { "no" },
            task,
        );
    }

    Ok(())
}
