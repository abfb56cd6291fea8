pub mod command_ops;
pub mod store;

pub use command_ops::unique_name;
pub use store::CommandStore;
