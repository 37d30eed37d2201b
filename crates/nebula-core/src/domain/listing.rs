//! Listing projection - filter, paginate and group posts for the home page.
//!
//! Everything here is a pure function of its inputs. The caller owns the view
//! state; [`ListingState`] models the transitions that keep it consistent.

use std::collections::BTreeMap;

use chrono::{Local, TimeZone};
use serde::Serialize;

use super::post::Post;

/// Posts shown per page on the home listing.
pub const POSTS_PER_PAGE: usize = 5;

/// Posts of one calendar year, in listing order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearGroup {
    pub year: i32,
    pub posts: Vec<Post>,
}

/// What a listing view displays for one (search, page) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing {
    pub search: String,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    /// Posts matching the search across all pages.
    pub total_matches: usize,
    /// Year groups of the current page, newest year first.
    pub groups: Vec<YearGroup>,
}

impl Listing {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Posts of the current page in display order.
    pub fn posts(&self) -> impl Iterator<Item = &Post> {
        self.groups.iter().flat_map(|g| g.posts.iter())
    }
}

/// Keep posts whose title, summary or any tag contains `term`, ignoring case.
///
/// An empty term keeps everything.
pub fn filter_posts<'a>(posts: &'a [Post], term: &str) -> Vec<&'a Post> {
    if term.is_empty() {
        return posts.iter().collect();
    }
    let needle = term.to_lowercase();
    posts.iter().filter(|p| p.matches_lowercase(&needle)).collect()
}

/// Admin list filter: title or summary only, ignoring case.
pub fn filter_admin_posts<'a>(posts: &'a [Post], term: &str) -> Vec<&'a Post> {
    let needle = term.to_lowercase();
    posts
        .iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&needle) || p.summary.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Number of pages needed for `count` items.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Slice out a 1-based page. Out-of-range pages (including 0) are empty.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let Some(start) = page.checked_sub(1).and_then(|p| p.checked_mul(page_size)) else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Partition posts by the calendar year of `created_at` in `tz`.
///
/// Order within a year is preserved; years come out newest first.
pub fn group_by_year<Tz: TimeZone>(posts: &[&Post], tz: &Tz) -> Vec<YearGroup> {
    let mut years: BTreeMap<i32, Vec<Post>> = BTreeMap::new();
    for post in posts {
        years
            .entry(post.created_year(tz))
            .or_default()
            .push((*post).clone());
    }
    years
        .into_iter()
        .rev()
        .map(|(year, posts)| YearGroup { year, posts })
        .collect()
}

/// Run the full pipeline with years taken in local time.
pub fn project(posts: &[Post], search: &str, page: usize, page_size: usize) -> Listing {
    project_in(posts, search, page, page_size, &Local)
}

/// Run the full pipeline with years taken in `tz`.
pub fn project_in<Tz: TimeZone>(
    posts: &[Post],
    search: &str,
    page: usize,
    page_size: usize,
    tz: &Tz,
) -> Listing {
    let filtered = filter_posts(posts, search);
    let slice = paginate(&filtered, page, page_size);

    Listing {
        search: search.to_string(),
        page,
        page_size,
        total_pages: total_pages(filtered.len(), page_size),
        total_matches: filtered.len(),
        groups: group_by_year(slice, tz),
    }
}

/// View state of the home listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingState {
    pub search: String,
    pub page: usize,
}

impl Default for ListingState {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 1,
        }
    }
}

/// Inputs that move the listing view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingEvent {
    SearchChanged(String),
    PageRequested(usize),
    NextPage,
    PreviousPage,
    /// The underlying collection was reloaded (for example after a delete).
    CollectionChanged,
}

impl ListingState {
    /// Apply an event. `total_pages` is the page count for the state's
    /// current search over the current collection.
    ///
    /// A search change always lands on page 1. Page moves outside
    /// `[1, total_pages]` are ignored. A collection change pulls the page
    /// back into range.
    pub fn reduce(self, event: ListingEvent, total_pages: usize) -> Self {
        let in_range = |page: usize| page >= 1 && page <= total_pages;
        match event {
            ListingEvent::SearchChanged(search) => Self { search, page: 1 },
            ListingEvent::PageRequested(page) if in_range(page) => Self { page, ..self },
            ListingEvent::NextPage if in_range(self.page + 1) => Self {
                page: self.page + 1,
                ..self
            },
            ListingEvent::PreviousPage if self.page > 1 && in_range(self.page - 1) => Self {
                page: self.page - 1,
                ..self
            },
            ListingEvent::CollectionChanged => Self {
                page: self.page.clamp(1, total_pages.max(1)),
                ..self
            },
            _ => self,
        }
    }

    /// Project `posts` for this state with the standard page size.
    pub fn project(&self, posts: &[Post]) -> Listing {
        project(posts, &self.search, self.page, POSTS_PER_PAGE)
    }

    /// Page count for this state's search over `posts`.
    pub fn total_pages(&self, posts: &[Post]) -> usize {
        total_pages(filter_posts(posts, &self.search).len(), POSTS_PER_PAGE)
    }
}
