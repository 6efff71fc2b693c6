//! Application layer - Use cases and business logic
//!
//! This layer contains:
//! - Errors: Domain-specific errors
//! - Context: The per-invocation capability object handed to command handlers
//! - Messaging: Message parsing
//! - Services: Command registration and dispatch

pub mod context;
pub mod errors;
pub mod messaging;
pub mod services;
