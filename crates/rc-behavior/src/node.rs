//! Behavior-tree node kinds and the per-agent tree wrapper.

use rc_agent::AgentState;
use tracing::trace;

use crate::{actions, SimContext, Status};

// ── Leaves ────────────────────────────────────────────────────────────────────

/// Guards evaluated against the agent's own state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    CarryingItem,
    NotCarryingItem,
    HasTask,
}

impl Condition {
    pub fn evaluate(self, agent: &AgentState) -> bool {
        match self {
            Condition::CarryingItem    => agent.carrying,
            Condition::NotCarryingItem => !agent.carrying,
            Condition::HasTask         => agent.task.is_some(),
        }
    }
}

/// Courier actions.  See [`crate::actions`] for what each one does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    QueryRoute,
    FollowPath,
    PickUp,
    DropOff,
    Explore,
}

impl Action {
    pub fn run(self, agent: &mut AgentState, ctx: &mut SimContext) -> Status {
        match self {
            Action::QueryRoute => actions::query_route(agent, ctx),
            Action::FollowPath => actions::follow_path(agent, ctx),
            Action::PickUp     => actions::pick_up(agent, ctx),
            Action::DropOff    => actions::drop_off(agent, ctx),
            Action::Explore    => actions::explore(agent, ctx),
        }
    }
}

// ── Composites ────────────────────────────────────────────────────────────────

/// Named, ordered children of a sequence or selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composite {
    pub name:     String,
    pub children: Vec<Node>,
}

// ── Node ──────────────────────────────────────────────────────────────────────

/// The closed set of node kinds.
///
/// - `Sequence` succeeds when every child succeeds and stops at the first
///   child that fails or is still running.
/// - `Selector` tries children in order and stops at the first one that
///   succeeds or is still running; it fails only if every child fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Condition(Condition),
    Action(Action),
    Sequence(Composite),
    Selector(Composite),
}

impl Node {
    pub fn sequence(name: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Sequence(Composite { name: name.into(), children })
    }

    pub fn selector(name: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Selector(Composite { name: name.into(), children })
    }

    /// Tick this node (and, for composites, its children) once.
    pub fn tick(&self, agent: &mut AgentState, ctx: &mut SimContext) -> Status {
        match self {
            Node::Condition(cond) => Status::from(cond.evaluate(agent)),
            Node::Action(action)  => action.run(agent, ctx),

            Node::Sequence(seq) => {
                for child in &seq.children {
                    let status = child.tick(agent, ctx);
                    if status != Status::Success {
                        trace!(node = %seq.name, %status, "sequence stopped");
                        return status;
                    }
                }
                Status::Success
            }

            Node::Selector(sel) => {
                for child in &sel.children {
                    let status = child.tick(agent, ctx);
                    if status != Status::Failure {
                        trace!(node = %sel.name, %status, "selector settled");
                        return status;
                    }
                }
                Status::Failure
            }
        }
    }

    /// Composite name, or the `Debug` form of a leaf.
    pub fn name(&self) -> String {
        match self {
            Node::Condition(c) => format!("{c:?}"),
            Node::Action(a)    => format!("{a:?}"),
            Node::Sequence(c) | Node::Selector(c) => c.name.clone(),
        }
    }

    /// Children of a composite; empty for leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Sequence(c) | Node::Selector(c) => &c.children,
            _ => &[],
        }
    }
}

impl From<Condition> for Node {
    fn from(c: Condition) -> Self {
        Node::Condition(c)
    }
}

impl From<Action> for Node {
    fn from(a: Action) -> Self {
        Node::Action(a)
    }
}

// ── BehaviorTree ──────────────────────────────────────────────────────────────

/// One agent's tree plus a little bookkeeping for logging and tests.
#[derive(Debug, Clone)]
pub struct BehaviorTree {
    root:        Node,
    ticks:       u64,
    last_status: Option<Status>,
}

impl BehaviorTree {
    pub fn new(root: Node) -> Self {
        Self { root, ticks: 0, last_status: None }
    }

    /// Tick the root once on behalf of `agent`.
    pub fn tick(&mut self, agent: &mut AgentState, ctx: &mut SimContext) -> Status {
        let status = self.root.tick(agent, ctx);
        self.ticks += 1;
        self.last_status = Some(status);
        status
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// How many times the tree has been ticked.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn last_status(&self) -> Option<Status> {
        self.last_status
    }
}
