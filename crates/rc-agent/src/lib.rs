//! `rc-agent`: courier agent state and storage.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`state`]   | `AgentState`, `Task`, `TaskKind`, `RoutePhase`            |
//! | [`store`]   | `AgentStore`: agents indexed by `AgentId`                 |
//! | [`builder`] | `AgentStoreBuilder` (fluent construction)                 |
//! | [`loader`]  | `load_roster_csv`, `load_roster_reader`                   |
//! | [`error`]   | `AgentError`, `AgentResult<T>`                            |
//!
//! Agent state is only ever mutated by the behavior-tree actions bound to
//! that agent; the transitions here (`assign_pickup`, `assign_delivery`,
//! `finish_task`, `step`) have no failure modes.

pub mod builder;
pub mod error;
pub mod loader;
pub mod state;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::AgentStoreBuilder;
pub use error::{AgentError, AgentResult};
pub use loader::{load_roster_csv, load_roster_reader};
pub use state::{AgentState, RoutePhase, Task, TaskKind};
pub use store::AgentStore;
