//! Domain traits - Abstractions for infrastructure implementations

pub mod adapter;

pub use adapter::{AdapterInfo, ChatAdapter};
