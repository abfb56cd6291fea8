//! Presenters and the capability traits they talk through
//!
//! Presenters own their view and service collaborators as trait objects.
//! Store and registry are passed in per call so the engine keeps sole
//! ownership of them.

pub mod collaborators;
pub mod explorer;
pub mod palette;

pub use collaborators::{
    CommandActions, CommandExecutor, CommandPaletteView, CommandsExplorerView, DisplayMode,
    Notification, NotificationManager, NotificationStatus, PartDescriptor, PartStackType,
    TracingNotificationManager, WorkspaceAgent,
};
pub use explorer::CommandsExplorer;
pub use palette::CommandPalette;
