//! Application state - the store, gate and assistant every command works with.

use std::sync::Arc;

use anyhow::Context;

use nebula_core::ports::{AuthGate, KeyValueStore, WritingAssistant};
use nebula_core::services::{PostStore, SessionAuth};
use nebula_infra::{FileKeyValueStore, GeminiAssistant, InMemoryKeyValueStore};

use crate::config::AppConfig;

/// Shared application state.
pub struct AppState {
    pub store: PostStore<Arc<dyn KeyValueStore>>,
    pub auth: Arc<dyn AuthGate>,
    pub assistant: Arc<dyn WritingAssistant>,
}

impl AppState {
    /// Build the state from configuration, seeding the post slot if needed.
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let posts: Arc<dyn KeyValueStore> = Arc::new(FileKeyValueStore::new(&config.data_dir));
        let session: Arc<dyn KeyValueStore> =
            Arc::new(FileKeyValueStore::new(&config.session_dir));

        let store = PostStore::open_with_key(posts, config.posts_key.clone())
            .with_context(|| format!("opening post store in {}", config.data_dir.display()))?;

        tracing::debug!(
            data_dir = %config.data_dir.display(),
            session_dir = %config.session_dir.display(),
            "Application state initialized"
        );

        Ok(Self {
            store,
            auth: Arc::new(SessionAuth::new(session, config.admin_password.clone())),
            assistant: Arc::new(GeminiAssistant::new(config.gemini.clone())),
        })
    }

    /// Throwaway state with seeded in-memory slots.
    pub fn in_memory(
        admin_password: &str,
        assistant: Arc<dyn WritingAssistant>,
    ) -> anyhow::Result<Self> {
        let posts: Arc<dyn KeyValueStore> = Arc::new(InMemoryKeyValueStore::new());
        let session: Arc<dyn KeyValueStore> = Arc::new(InMemoryKeyValueStore::new());

        Ok(Self {
            store: PostStore::open(posts)?,
            auth: Arc::new(SessionAuth::new(session, admin_password)),
            assistant,
        })
    }
}
