//! Domain entities - Core business objects with no external dependencies

pub mod command;
pub mod message;
pub mod plugin;

pub use command::{CommandFuture, CommandHandler, CommandSpec};
pub use message::{Content, Message, SentMessage};
pub use plugin::PluginDescriptor;
