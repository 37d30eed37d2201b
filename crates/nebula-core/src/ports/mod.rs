//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod assistant;
mod auth;
mod kv;

pub use assistant::{SUMMARY_FAILED, SUMMARY_UNAVAILABLE, WritingAssistant};
pub use auth::AuthGate;
pub use kv::{KeyValueStore, KvError};
