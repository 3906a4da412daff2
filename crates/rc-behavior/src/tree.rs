//! The courier tree every agent runs.

use crate::{Action, BehaviorTree, Condition, Node};

/// Build the deliver / pickup / explore tree for the agent called `name`.
///
/// ```text
/// Selector {name}_Root
/// ├── Sequence {name}_Deliver : CarryingItem, HasTask, QueryRoute, FollowPath, DropOff
/// ├── Sequence {name}_PickUp  : NotCarryingItem, HasTask, QueryRoute, FollowPath, PickUp
/// └── Sequence {name}_Explore : HasTask, Explore
/// ```
///
/// The carrying guards are mutually exclusive, so at most one of the first
/// two branches gets past its guard.  Explore is reached only when that
/// branch fails this tick (blocked step, missing route).  An agent with no
/// task fails every branch and the tick is a no-op.
pub fn courier_tree(name: &str) -> BehaviorTree {
    let deliver = Node::sequence(
        format!("{name}_Deliver"),
        vec![
            Condition::CarryingItem.into(),
            Condition::HasTask.into(),
            Action::QueryRoute.into(),
            Action::FollowPath.into(),
            Action::DropOff.into(),
        ],
    );

    let pickup = Node::sequence(
        format!("{name}_PickUp"),
        vec![
            Condition::NotCarryingItem.into(),
            Condition::HasTask.into(),
            Action::QueryRoute.into(),
            Action::FollowPath.into(),
            Action::PickUp.into(),
        ],
    );

    let explore = Node::sequence(
        format!("{name}_Explore"),
        vec![Condition::HasTask.into(), Action::Explore.into()],
    );

    BehaviorTree::new(Node::selector(format!("{name}_Root"), vec![deliver, pickup, explore]))
}
