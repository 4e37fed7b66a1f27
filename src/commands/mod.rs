mod attach;
mod detach;
mod inspect;
mod plugins;

pub use attach::{handle_attach_command, AttachOptions};
pub use detach::handle_detach_command;
pub use inspect::handle_inspect_command;
pub use plugins::handle_plugins_command;
