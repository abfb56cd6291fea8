pub mod applicable_context;
pub mod command;
pub mod event;
pub mod goal;

pub use applicable_context::ApplicableContext;
pub use command::{Command, GOAL_ATTRIBUTE_NAME};
pub use event::CommandEvent;
pub use goal::Goal;
