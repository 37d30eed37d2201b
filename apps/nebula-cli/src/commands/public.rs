//! Public views: listing, post detail and interactive browsing.

use chrono::Local;

use nebula_core::DomainError;
use nebula_core::domain::listing::project;
use nebula_core::domain::{ListingEvent, ListingState, POSTS_PER_PAGE, Post};
use nebula_shared::{ListingView, PostDetail};

use super::Terminal;
use crate::error::AppResult;
use crate::render;
use crate::state::AppState;

const BROWSE_HELP: &str = "[n]ext  [p]rev  /term search  g N page  o ID open  q quit";

/// GET-style listing of one page.
pub fn list(state: &AppState, term: &mut Terminal<'_>, search: &str, page: usize) -> AppResult<()> {
    let posts = state.store.list_posts();
    let listing = project(&posts, search, page, POSTS_PER_PAGE);
    let view = ListingView::from_listing(&listing, &Local);

    if term.json {
        term.print_json(&view)
    } else {
        term.print(&render::listing(&view))
    }
}

pub fn show(state: &AppState, term: &mut Terminal<'_>, id: &str) -> AppResult<()> {
    let post = find(state, id)?;
    let detail = PostDetail::from_post(&post, &Local);

    if term.json {
        term.print_json(&detail)
    } else {
        term.print(&render::detail(&detail))
    }
}

/// Interactive pager driven by the listing reducer.
///
/// The collection is reloaded before every render, so posts removed
/// elsewhere never leave the pager on a page that no longer exists.
pub fn browse(state: &AppState, term: &mut Terminal<'_>, search: String) -> AppResult<()> {
    let mut view_state = ListingState::default().reduce(ListingEvent::SearchChanged(search), 0);

    loop {
        let posts = state.store.list_posts();
        let total_pages = view_state.total_pages(&posts);
        view_state = view_state.reduce(ListingEvent::CollectionChanged, total_pages);

        let listing = view_state.project(&posts);
        term.print(&render::listing(&ListingView::from_listing(&listing, &Local)))?;

        let line = term.prompt(&format!("{BROWSE_HELP}\n> "))?;
        let event = match line.as_str() {
            "" | "q" | "quit" => break,
            "n" => ListingEvent::NextPage,
            "p" => ListingEvent::PreviousPage,
            _ => {
                if let Some(search) = line.strip_prefix('/') {
                    ListingEvent::SearchChanged(search.trim().to_string())
                } else if let Some(page) = line.strip_prefix("g ") {
                    match page.trim().parse() {
                        Ok(page) => ListingEvent::PageRequested(page),
                        Err(_) => {
                            term.println(&format!("Not a page number: {}", page.trim()))?;
                            continue;
                        }
                    }
                } else if let Some(id) = line.strip_prefix("o ") {
                    match find_in(&posts, id.trim()) {
                        Some(post) => {
                            term.print(&render::detail(&PostDetail::from_post(post, &Local)))?
                        }
                        None => term.println(&format!("Post not found: {}", id.trim()))?,
                    }
                    continue;
                } else {
                    term.println(&format!("Unknown input: {line}"))?;
                    continue;
                }
            }
        };

        view_state = view_state.reduce(event, listing.total_pages);
    }

    Ok(())
}

fn find(state: &AppState, id: &str) -> AppResult<Post> {
    state.store.get_post(id).ok_or_else(|| {
        DomainError::NotFound {
            entity_type: "Post",
            id: id.to_string(),
        }
        .into()
    })
}

fn find_in<'a>(posts: &'a [Post], id: &str) -> Option<&'a Post> {
    posts.iter().find(|p| p.id == id)
}
