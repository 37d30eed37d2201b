//! Domain entities and pure transformations over them.

pub mod listing;
mod post;
mod seed;

pub use listing::{Listing, ListingEvent, ListingState, POSTS_PER_PAGE, YearGroup};
pub use post::{
    DEFAULT_AUTHOR, DEFAULT_COVER_IMAGE, Post, PostDraft, derive_id, now_millis, parse_tags,
    slugify,
};
pub use seed::seed_posts;
