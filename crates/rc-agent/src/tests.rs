//! Unit tests for rc-agent.

#[cfg(test)]
mod state {
    use rc_core::{AgentId, Location};

    use crate::{AgentState, RoutePhase, TaskKind};

    fn loc(s: &str) -> Location {
        Location::new(s)
    }

    fn path(s: &str) -> Vec<Location> {
        s.split_whitespace().map(Location::new).collect()
    }

    fn courier() -> AgentState {
        let mut agent = AgentState::new(AgentId(0), "Agent1", loc("E"));
        agent.assign_pickup(loc("A"));
        agent
    }

    #[test]
    fn new_agent_is_idle() {
        let agent = AgentState::new(AgentId(3), "Agent4", loc("E"));
        assert!(agent.is_idle());
        assert!(!agent.carrying);
        assert_eq!(agent.phase, RoutePhase::Arrived);
        assert!(agent.path_is_consistent());
    }

    #[test]
    fn assign_pickup_sets_task_from_current_location() {
        let agent = courier();
        let task = agent.task.as_ref().unwrap();
        assert_eq!(task.kind, TaskKind::Pickup);
        assert_eq!(task.origin, loc("E"));
        assert_eq!(task.destination, loc("A"));
        assert!(!agent.carrying);
        assert_eq!(agent.phase, RoutePhase::NeedsRoute);
        assert_eq!(task.to_string(), "pickup E -> A");
    }

    #[test]
    fn assign_delivery_clears_path_and_carries() {
        let mut agent = courier();
        assert!(agent.follow(path("E X Y A")));
        agent.location = loc("A");
        agent.cursor = 3;
        agent.assign_delivery(loc("E"));

        let task = agent.task.as_ref().unwrap();
        assert_eq!(task.kind, TaskKind::Delivery);
        assert_eq!(task.origin, loc("A"));
        assert_eq!(task.destination, loc("E"));
        assert!(agent.carrying);
        assert!(agent.path.is_empty());
        assert_eq!(agent.cursor, 0);
        assert_eq!(agent.phase, RoutePhase::NeedsRoute);
    }

    #[test]
    fn follow_positions_cursor_at_current_location() {
        let mut agent = courier();
        agent.location = loc("X");
        assert!(agent.follow(path("E N M X A")));
        assert_eq!(agent.cursor, 3);
        assert_eq!(agent.phase, RoutePhase::Following);
        assert_eq!(agent.next_waypoint(), Some(&loc("A")));
        assert!(agent.path_is_consistent());
    }

    #[test]
    fn follow_rejects_path_not_through_location() {
        let mut agent = courier();
        assert!(!agent.follow(path("A Y X")));
        assert!(agent.path.is_empty());
        assert_eq!(agent.phase, RoutePhase::NeedsRoute);
    }

    #[test]
    fn step_walks_to_the_end() {
        let mut agent = courier();
        agent.follow(path("E X Y A"));
        assert_eq!(agent.step(), Some(loc("E")));
        assert_eq!(agent.step(), Some(loc("X")));
        assert_eq!(agent.step(), Some(loc("Y")));
        assert_eq!(agent.location, loc("A"));
        assert!(agent.at_destination());
        assert_eq!(agent.step(), None);
        assert!(agent.path_is_consistent());
    }

    #[test]
    fn finish_task_goes_idle_without_queue() {
        let mut agent = courier();
        agent.assign_delivery(loc("E"));
        assert!(agent.finish_task().is_none());
        assert!(agent.is_idle());
        assert!(!agent.carrying);
        assert_eq!(agent.phase, RoutePhase::Arrived);
    }

    #[test]
    fn finish_task_assigns_next_queued_pickup() {
        let mut agent = courier();
        agent.pending_pickups.push_back(loc("D"));
        agent.assign_delivery(loc("E"));
        let next = agent.finish_task().cloned().unwrap();
        assert_eq!(next.kind, TaskKind::Pickup);
        assert_eq!(next.destination, loc("D"));
        assert!(agent.pending_pickups.is_empty());
        assert_eq!(agent.phase, RoutePhase::NeedsRoute);
    }

    #[test]
    fn inconsistent_cursor_detected() {
        let mut agent = courier();
        agent.follow(path("E X Y A"));
        agent.cursor = 2;
        assert!(!agent.path_is_consistent());
        agent.cursor = 9;
        assert!(!agent.path_is_consistent());
    }
}

#[cfg(test)]
mod store {
    use rc_core::{AgentId, Location};

    use crate::AgentStoreBuilder;

    #[test]
    fn builder_assigns_sequential_ids() {
        let store = AgentStoreBuilder::new()
            .agent("Agent1", Location::new("E"), [Location::new("A")])
            .agent("Agent2", Location::new("E"), [Location::new("B")])
            .agent("Agent3", Location::new("E"), [Location::new("C")])
            .build();
        assert_eq!(store.count(), 3);
        let ids: Vec<_> = store.iter().map(|a| a.id).collect();
        assert_eq!(ids, [AgentId(0), AgentId(1), AgentId(2)]);
        assert_eq!(store.agent_ids().collect::<Vec<_>>(), ids);
        assert_eq!(store[AgentId(1)].name, "Agent2");
    }

    #[test]
    fn extra_pickups_are_queued() {
        let store = AgentStoreBuilder::new()
            .agent("Agent1", Location::new("E"), [Location::new("A"), Location::new("D")])
            .build();
        let agent = &store[AgentId(0)];
        assert_eq!(agent.task.as_ref().unwrap().destination, Location::new("A"));
        assert_eq!(agent.pending_pickups, [Location::new("D")]);
    }

    #[test]
    fn agent_without_pickups_is_idle() {
        let store = AgentStoreBuilder::new()
            .agent("Spare", Location::new("E"), Vec::<Location>::new())
            .build();
        assert!(store.all_idle());
    }

    #[test]
    fn lookup_helpers() {
        let mut store = AgentStoreBuilder::new()
            .agent("Agent1", Location::new("E"), [Location::new("A")])
            .build();
        assert!(store.by_name("Agent1").is_some());
        assert!(store.by_name("Agent9").is_none());
        assert!(store.get(AgentId(1)).is_none());
        store.get_mut(AgentId(0)).unwrap().carrying = true;
        assert!(store[AgentId(0)].carrying);
    }
}

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use rc_core::{AgentId, Location};

    use crate::{load_roster_reader, AgentError};

    #[test]
    fn loads_roster_in_order() {
        let csv = "name,start,pickups\nAgent1,E,A\nAgent2,E,B D\n";
        let store = load_roster_reader(Cursor::new(csv)).unwrap();
        assert_eq!(store.count(), 2);
        assert_eq!(store[AgentId(1)].name, "Agent2");
        assert_eq!(store[AgentId(1)].pending_pickups, [Location::new("D")]);
    }

    #[test]
    fn empty_pickups_column_means_idle() {
        let csv = "name,start,pickups\nSpare,E,\n";
        let store = load_roster_reader(Cursor::new(csv)).unwrap();
        assert!(store[AgentId(0)].is_idle());
    }

    #[test]
    fn bad_start_location_rejected() {
        let csv = "name,start,pickups\nAgent1,,A\n";
        let err = load_roster_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, AgentError::Core(_)));
    }

    #[test]
    fn empty_name_rejected() {
        let csv = "name,start,pickups\n,E,A\n";
        let err = load_roster_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, AgentError::Parse(_)));
    }
}
