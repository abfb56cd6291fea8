//! Commandex Engine - orchestration layer
//!
//! Owns the command store, goal registry and presenters behind a single
//! `Workbench`, logs every user operation at the boundary, loads
//! configuration, and drives debounced refreshes from a tokio task.

pub mod config;
pub mod runtime;
pub mod workbench;

pub use config::CommandexConfig;
pub use runtime::{spawn, WorkbenchHandle};
pub use workbench::{Collaborators, Workbench, WorkbenchCommand, WorkbenchOutcome};

/// Engine operations report the canonical structured error
pub type EngineResult<T> = std::result::Result<T, commandex_core::ExError>;
