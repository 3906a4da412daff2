//! `rc-behavior`: per-agent behavior trees and the shared simulation context.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`status`]  | `Status` (`Success`, `Failure`, `Running`)                      |
//! | [`node`]    | `Node`, `Composite`, `Condition`, `Action`, `BehaviorTree`      |
//! | [`tree`]    | `courier_tree`: the deliver / pickup / explore selector         |
//! | [`actions`] | The courier actions ticked by `Node::Action`                    |
//! | [`context`] | `SimContext`: clock, route tables, faults, event buffer         |
//! | [`fault`]   | `Fault`, `FaultTable`, CSV loader                               |
//! | [`event`]   | `Event`, `EventKind`                                            |
//! | [`error`]   | `BehaviorError`, `BehaviorResult<T>`                            |
//!
//! # Tick contract
//!
//! Every node kind is ticked through [`Node::tick`] with the agent it is
//! bound to and a `&mut SimContext`, and answers with a [`Status`].
//! Composites are reactive: each tick starts again from their first child,
//! so guards are re-checked every tick.

pub mod actions;
pub mod context;
pub mod error;
pub mod event;
pub mod fault;
pub mod node;
pub mod status;
pub mod tree;


pub use context::SimContext;
pub use error::{BehaviorError, BehaviorResult};
pub use event::{Event, EventKind};
pub use fault::{load_faults_csv, load_faults_reader, Fault, FaultTable};
pub use node::{Action, BehaviorTree, Composite, Condition, Node};
pub use status::Status;
pub use tree::courier_tree;
