//! Services - domain logic written against the ports.

pub mod editor;
mod post_store;
mod session;

#[cfg(test)]
pub(crate) mod testing;

pub use editor::{AssistAction, assist, publish};
pub use post_store::{POSTS_KEY, PostStore};
pub use session::{DEFAULT_ADMIN_PASSWORD, SESSION_KEY, SessionAuth, require_admin};
