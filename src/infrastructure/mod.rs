//! Infrastructure layer - External concerns
//!
//! This layer contains:
//! - Config: Configuration loading
//! - Storage: JSON document persistence
//! - Adapters: Platform integrations (console; others live with the host)

pub mod adapters;
pub mod config;
pub mod storage;
