//! Data Transfer Objects - what the listing and detail views display.

use chrono::TimeZone;
use serde::{Deserialize, Serialize};

use nebula_core::domain::{Listing, Post};

/// A post as shown on a listing card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostCard {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub cover_image: String,
    pub author: String,
    pub tags: Vec<String>,
    /// Short month name, e.g. `Jul`.
    pub month: String,
    pub day: u32,
    /// `YYYY-MM-DD`.
    pub date: String,
}

impl PostCard {
    pub fn from_post<Tz: TimeZone>(post: &Post, tz: &Tz) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        let created = post.created_at_in(tz);
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            summary: post.summary.clone(),
            cover_image: post.cover_image.clone(),
            author: post.author.clone(),
            tags: post.tags.clone(),
            month: created.format("%b").to_string(),
            day: chrono::Datelike::day(&created),
            date: created.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Cards of one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearGroupView {
    pub year: i32,
    pub posts: Vec<PostCard>,
}

/// One page of the home listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingView {
    pub search: String,
    pub page: usize,
    pub total_pages: usize,
    pub total_matches: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub years: Vec<YearGroupView>,
}

impl ListingView {
    pub fn from_listing<Tz: TimeZone>(listing: &Listing, tz: &Tz) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            search: listing.search.clone(),
            page: listing.page,
            total_pages: listing.total_pages,
            total_matches: listing.total_matches,
            has_previous: listing.page > 1 && listing.page <= listing.total_pages,
            has_next: listing.page >= 1 && listing.page < listing.total_pages,
            years: listing
                .groups
                .iter()
                .map(|g| YearGroupView {
                    year: g.year,
                    posts: g.posts.iter().map(|p| PostCard::from_post(p, tz)).collect(),
                })
                .collect(),
        }
    }
}

/// A full post for the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDetail {
    pub id: String,
    pub title: String,
    pub author: String,
    pub tags: Vec<String>,
    pub cover_image: String,
    /// Long date, e.g. `July 1, 2024`.
    pub published: String,
    /// Markdown source.
    pub content: String,
}

impl PostDetail {
    pub fn from_post<Tz: TimeZone>(post: &Post, tz: &Tz) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            author: post.author.clone(),
            tags: post.tags.clone(),
            cover_image: post.cover_image.clone(),
            published: post.created_at_in(tz).format("%B %-d, %Y").to_string(),
            content: post.content.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use nebula_core::domain::listing::project_in;

    const JUL_2024: i64 = 1_719_835_200_000; // 2024-07-01T12:00:00Z

    fn post(id: &str, created_at: i64) -> Post {
        Post {
            id: id.to_string(),
            title: format!("Title {id}"),
            content: "# Body".to_string(),
            summary: "sum".to_string(),
            cover_image: "img".to_string(),
            created_at,
            updated_at: created_at,
            author: "Neo".to_string(),
            tags: vec!["CSS".to_string()],
        }
    }

    #[test]
    fn test_card_dates() {
        let card = PostCard::from_post(&post("a", JUL_2024), &Utc);

        assert_eq!(card.month, "Jul");
        assert_eq!(card.day, 1);
        assert_eq!(card.date, "2024-07-01");
    }

    #[test]
    fn test_listing_view_navigation_flags() {
        let posts: Vec<Post> = (0..7).map(|i| post(&format!("p{i}"), JUL_2024 - i)).collect();

        let first = ListingView::from_listing(&project_in(&posts, "", 1, 5, &Utc), &Utc);
        let second = ListingView::from_listing(&project_in(&posts, "", 2, 5, &Utc), &Utc);

        assert!(!first.has_previous && first.has_next);
        assert!(second.has_previous && !second.has_next);
        assert_eq!(second.years[0].posts.len(), 2);
    }

    #[test]
    fn test_detail_long_date() {
        let detail = PostDetail::from_post(&post("a", JUL_2024), &Utc);

        assert_eq!(detail.published, "July 1, 2024");
        assert_eq!(detail.content, "# Body");
    }
}
