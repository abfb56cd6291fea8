//! Commandex Core - command grouping kernel
//!
//! This crate provides the synchronous, deterministic building blocks of the
//! commands explorer and command palette:
//! - Command and goal models
//! - An in-memory command store that publishes add/update/remove events
//! - The goal registry with a well-known default goal
//! - The grouping engine that partitions commands into goal buckets
//! - A cancellable one-shot delayed task used to debounce view refreshes
//! - Explorer and palette presenters talking to views through capability traits
//! - Exec-agent process output event handlers
//!
//! Nothing in here owns a timer or a thread: callers pass `Instant`s in and
//! the engine crate drives the clock.

pub mod delayed_task;
pub mod errors;
pub mod events;
pub mod exec_agent;
pub mod grouping;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod presenters;
pub mod registry;
pub mod render;

pub use delayed_task::{DelayedTask, DEFAULT_REFRESH_DELAY};
pub use errors::{CommandexError, ExError, ExErrorKind, Result};
pub use events::{EventBus, SubscriptionId};
pub use exec_agent::{
    ExecAgentEvent, ExecAgentEventHandler, ProcessStdErrEventDto, ProcessStdOutEventDto,
};
pub use grouping::{group, group_non_empty, group_with_registry, GoalBucket, GroupedCommands};
pub use model::{ApplicableContext, Command, CommandEvent, Goal, GOAL_ATTRIBUTE_NAME};
pub use ops::CommandStore;
pub use presenters::{CommandPalette, CommandsExplorer};
pub use registry::{GoalRegistry, DEFAULT_GOAL_ID};
pub use render::{render_grouped, TextView};
