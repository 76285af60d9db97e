//! The command surface and the loop feeding it.

mod command;
mod dispatcher;
mod supervisor;


pub use command::Command;
pub use dispatcher::CommandDispatcher;
pub use supervisor::Supervisor;
