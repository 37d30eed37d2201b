//! Key-value store implementations - files on disk and in-memory.

mod file;
mod memory;

pub use file::FileKeyValueStore;
pub use memory::InMemoryKeyValueStore;
