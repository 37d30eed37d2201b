//! # Nebula Shared
//!
//! View models handed to renderers. They are plain serializable data, so a
//! terminal renderer and a JSON consumer see exactly the same thing.

pub mod dto;

pub use dto::{ListingView, PostCard, PostDetail, YearGroupView};
