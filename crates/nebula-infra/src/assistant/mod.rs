//! Writing assistant implementations.

mod gemini;

pub use gemini::{GeminiAssistant, GeminiConfig};
