//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use nebula_core::services::{DEFAULT_ADMIN_PASSWORD, POSTS_KEY};
use nebula_infra::GeminiConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the durable post slot.
    pub data_dir: PathBuf,
    /// Directory holding the session flag. Cleared with the OS temp dir.
    pub session_dir: PathBuf,
    pub posts_key: String,
    pub admin_password: String,
    pub gemini: GeminiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let data_dir = env::var("NEBULA_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::default_data_dir());

        let session_dir = env::var("NEBULA_SESSION_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| env::temp_dir().join("nebula-session"));

        let admin_password = env::var("NEBULA_ADMIN_PASSWORD")
            .ok()
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| {
                tracing::warn!("Using default admin password. Set NEBULA_ADMIN_PASSWORD.");
                DEFAULT_ADMIN_PASSWORD.to_string()
            });

        Self {
            data_dir,
            session_dir,
            posts_key: env::var("NEBULA_POSTS_KEY").unwrap_or_else(|_| POSTS_KEY.to_string()),
            admin_password,
            gemini: GeminiConfig::from_env(),
        }
    }

    /// `$XDG_DATA_HOME/nebula` or the platform equivalent, else `./.nebula`.
    fn default_data_dir() -> PathBuf {
        dirs::data_dir()
            .map(|d| d.join("nebula"))
            .unwrap_or_else(|| PathBuf::from(".nebula"))
    }
}
