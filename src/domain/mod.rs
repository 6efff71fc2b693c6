//! Domain layer - Core business logic with no external dependencies
//!
//! This layer contains:
//! - Entities: Core business objects (Message, CommandSpec, PluginDescriptor)
//! - Traits: Abstractions for infrastructure (ChatAdapter)

pub mod entities;
pub mod traits;
