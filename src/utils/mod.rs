pub mod command;
pub mod path;

pub use command::CommandExecutor;
pub use path::PathResolver;
