//! Integration tests for rc-sim.

use rc_agent::{AgentStore, AgentStoreBuilder};
use rc_behavior::{courier_tree, EventKind, Fault, FaultTable, SimContext};
use rc_core::{AgentId, Location, SimConfig, Tick};
use rc_routes::{DetourTable, Route, RouteTable};

use crate::{EventLog, NoopObserver, Sim, SimBuilder, SimError, SimObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn loc(s: &str) -> Location {
    Location::new(s)
}

fn route(s: &str) -> Route {
    Route::parse(s).unwrap()
}

fn test_config(total_ticks: u64) -> SimConfig {
    SimConfig {
        total_ticks,
        output_interval_ticks: 1,
        step_delay_ms:         None,
    }
}

fn couriers() -> AgentStore {
    AgentStoreBuilder::new()
        .agent("Agent1", loc("E"), [loc("A")])
        .agent("Agent2", loc("E"), [loc("B")])
        .agent("Agent3", loc("E"), [loc("C")])
        .build()
}

/// Hub `E`, four spokes, two scripted detours and two scripted blockages.
fn courier_context() -> SimContext {
    let routes = RouteTable::from_routes([
        route("E X Y A"),
        route("E Z B"),
        route("E W V C"),
        route("E U T D"),
    ]);
    let detours = DetourTable::from_routes([route("E W P Q C"), route("A X M N E")]);
    let faults = FaultTable::from_faults([
        Fault::new(AgentId(2), loc("V"), Tick(2)),
        Fault::new(AgentId(0), loc("Y"), Tick(2)),
    ]);
    SimContext::new(loc("E"), routes)
        .with_detours(detours)
        .with_faults(faults)
}

fn courier_sim(total_ticks: u64) -> Sim {
    SimBuilder::new(test_config(total_ticks), couriers(), courier_context())
        .build()
        .unwrap()
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_one_tree_per_agent() {
        let sim = courier_sim(5);
        assert_eq!(sim.trees.len(), 3);
        assert_eq!(sim.trees[2].root().name(), "Agent3_Root");
        assert_eq!(sim.now(), Tick::ZERO);
    }

    #[test]
    fn tree_count_mismatch_errors() {
        let result = SimBuilder::new(test_config(5), couriers(), courier_context())
            .trees(vec![courier_tree("Agent1")])
            .build();
        assert!(matches!(
            result,
            Err(SimError::AgentCountMismatch { expected: 3, got: 1, .. })
        ));
    }

    #[test]
    fn zero_ticks_rejected() {
        let result = SimBuilder::new(test_config(0), couriers(), courier_context()).build();
        assert!(matches!(result, Err(SimError::Core(_))));
    }

    #[test]
    fn empty_roster_rejected() {
        let result = SimBuilder::new(test_config(5), AgentStoreBuilder::new().build(), courier_context())
            .build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }
}

// ── Tick loop ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[derive(Default)]
    struct HookCounter {
        starts:    Vec<Tick>,
        ends:      Vec<(Tick, usize)>,
        snapshots: usize,
        events:    usize,
        end:       Option<Tick>,
    }

    impl SimObserver for HookCounter {
        fn on_tick_start(&mut self, tick: Tick) {
            self.starts.push(tick);
        }
        fn on_event(&mut self, _event: &rc_behavior::Event) {
            self.events += 1;
        }
        fn on_tick_end(&mut self, tick: Tick, events: &[rc_behavior::Event]) {
            self.ends.push((tick, events.len()));
        }
        fn on_snapshot(&mut self, _tick: Tick, _agents: &AgentStore) {
            self.snapshots += 1;
        }
        fn on_sim_end(&mut self, final_tick: Tick) {
            self.end = Some(final_tick);
        }
    }

    #[test]
    fn runs_to_end_tick_starting_at_t1() {
        let mut sim = courier_sim(5);
        let mut obs = HookCounter::default();
        sim.run(&mut obs).unwrap();

        assert_eq!(obs.starts, (1..=5).map(Tick).collect::<Vec<_>>());
        assert_eq!(obs.snapshots, 5);
        assert_eq!(obs.end, Some(Tick(5)));
        assert_eq!(obs.events, obs.ends.iter().map(|(_, n)| n).sum::<usize>());
        assert!(sim.trees.iter().all(|t| t.ticks() == 5));
    }

    #[test]
    fn snapshot_interval_respected() {
        let mut config = test_config(6);
        config.output_interval_ticks = 3;
        let mut sim = SimBuilder::new(config, couriers(), courier_context()).build().unwrap();
        let mut log = EventLog::new();
        sim.run(&mut log).unwrap();
        assert_eq!(log.ticks(), 6);
        assert_eq!(log.snapshots(), 2);
    }

    #[test]
    fn run_ticks_ignores_end_tick() {
        let mut sim = courier_sim(2);
        sim.run_ticks(4, &mut NoopObserver).unwrap();
        assert_eq!(sim.now(), Tick(4));
    }

    #[test]
    fn events_ordered_by_agent_within_tick() {
        let mut sim = courier_sim(5);
        let mut log = EventLog::new();
        sim.run(&mut log).unwrap();

        for pair in log.events().windows(2) {
            assert!(pair[0].tick <= pair[1].tick);
            if pair[0].tick == pair[1].tick {
                assert!(pair[0].agent <= pair[1].agent);
            }
        }
    }

    #[test]
    fn cursor_in_bounds_after_every_tick() {
        let mut sim = courier_sim(12);
        for _ in 0..12 {
            sim.run_ticks(1, &mut NoopObserver).unwrap();
            assert!(sim.agents.iter().all(|a| a.path_is_consistent()));
        }
    }
}

// ── Three-courier scenario ────────────────────────────────────────────────────

#[cfg(test)]
mod scenario_tests {
    use super::*;

    fn labels(log: &EventLog, agent: u32, tick: u64) -> Vec<&'static str> {
        log.at_tick(Tick(tick))
            .filter(|e| e.agent == AgentId(agent))
            .map(|e| e.kind.label())
            .collect()
    }

    #[test]
    fn first_five_ticks() {
        let mut sim = courier_sim(5);
        let mut log = EventLog::new();
        sim.run(&mut log).unwrap();

        // Agent1: blocked at X on T2, detour found, picks up at A on T3.
        assert_eq!(labels(&log, 0, 2), ["blocked", "route_discovered"]);
        assert_eq!(labels(&log, 0, 3), ["route_queried", "moved", "picked_up", "task_assigned"]);

        // Agent2: unobstructed round trip, back at E on T4.
        assert_eq!(labels(&log, 1, 2), ["moved", "picked_up", "task_assigned"]);
        assert_eq!(labels(&log, 1, 4), ["moved", "dropped_off"]);
        assert!(labels(&log, 1, 5).is_empty());

        // Agent3: blocked at W on T2, reaches C via P and Q on T5.
        assert_eq!(labels(&log, 2, 2), ["blocked", "route_discovered"]);
        assert_eq!(labels(&log, 2, 5), ["moved", "picked_up", "task_assigned"]);

        let a3 = &sim.agents[AgentId(2)];
        assert_eq!(a3.location, loc("C"));
        assert!(a3.carrying);
    }

    #[test]
    fn blockage_installs_detour_pair() {
        let mut sim = courier_sim(2);
        sim.run(&mut NoopObserver).unwrap();

        let routes = &sim.ctx.routes;
        assert_eq!(routes.lookup(&loc("E"), &loc("C")).unwrap(), &route("E W P Q C"));
        assert_eq!(routes.lookup(&loc("C"), &loc("E")).unwrap(), &route("C Q P W E"));
        assert_eq!(routes.lookup(&loc("E"), &loc("A")).unwrap(), &route("E N M X A"));
        assert_eq!(routes.lookup(&loc("A"), &loc("E")).unwrap(), &route("A X M N E"));
        assert!(sim.ctx.faults.is_empty());

        // Every table entry has its reverse.
        for (origin, destination, r) in routes.iter() {
            assert_eq!(routes.lookup(destination, origin).unwrap(), &r.reversed());
        }
    }

    #[test]
    fn every_item_delivered_back_to_hub() {
        let mut sim = courier_sim(10);
        let mut log = EventLog::new();
        sim.run(&mut log).unwrap();

        assert!(sim.agents.all_idle());
        for agent in sim.agents.iter() {
            assert_eq!(agent.location, loc("E"));
            assert!(!agent.carrying);
        }
        let drops: Vec<_> = log
            .events()
            .iter()
            .filter(|e| matches!(e.kind, EventKind::DroppedOff { .. }))
            .map(|e| (e.agent, e.tick))
            .collect();
        assert_eq!(drops, [(AgentId(1), Tick(4)), (AgentId(0), Tick(7)), (AgentId(2), Tick(9))]);

        // Nothing happens once everyone is idle.
        assert!(log.at_tick(Tick(10)).next().is_none());
    }

    #[test]
    fn pickups_happen_at_task_origin() {
        let mut sim = courier_sim(10);
        let mut log = EventLog::new();
        sim.run(&mut log).unwrap();

        for (id, target) in [(0, "A"), (1, "B"), (2, "C")] {
            let pickups: Vec<_> = log
                .for_agent(AgentId(id))
                .filter_map(|e| match &e.kind {
                    EventKind::PickedUp { at } => Some(at.clone()),
                    _ => None,
                })
                .collect();
            assert_eq!(pickups, [loc(target)]);
        }
    }
}
