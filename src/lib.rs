//! saku-bot - a small chat-bot host built around a plugin/command contract
//! and a file-backed configuration store.
//!
//! Layers:
//! - [`domain`]: entities and transport abstractions
//! - [`application`]: errors, invocation context, parsing, dispatch
//! - [`infrastructure`]: config file, storage worker, console adapter
//! - [`plugins`]: built-in example plugins (ping, weather, lyrics, sticker)

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod plugins;
