//! # Nebula Infrastructure
//!
//! Concrete implementations of the ports defined in `nebula-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No network dependencies, storage adapters only
//! - `assistant` - Gemini-backed writing assistant via reqwest

pub mod kv;

#[cfg(feature = "assistant")]
pub mod assistant;

// Re-exports - Storage
pub use kv::{FileKeyValueStore, InMemoryKeyValueStore};

// Re-exports - Assistant
#[cfg(feature = "assistant")]
pub use assistant::{GeminiAssistant, GeminiConfig};
