//! Terminal rendering of the shared view models.

use std::fmt;

use nebula_core::domain::Post;
use nebula_shared::{ListingView, PostDetail};

const RULE_WIDTH: usize = 60;

/// Render one listing page: year headings, cards, then the pager line.
pub fn listing(view: &ListingView) -> String {
    ListingText(view).to_string()
}

/// Render a post page with its markdown body as-is.
pub fn detail(post: &PostDetail) -> String {
    DetailText(post).to_string()
}

/// Render the admin table: id, date and title per line.
pub fn admin_table(posts: &[&Post]) -> String {
    AdminTable(posts).to_string()
}

struct ListingText<'a>(&'a ListingView);

impl fmt::Display for ListingText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;

        if !view.search.is_empty() {
            let plural = if view.total_matches == 1 { "" } else { "es" };
            writeln!(f, "Search \"{}\": {} match{}\n", view.search, view.total_matches, plural)?;
        }

        if view.years.is_empty() {
            if view.total_matches > 0 {
                writeln!(f, "Page {} is empty.", view.page)?;
            } else if !view.search.is_empty() {
                writeln!(f, "No posts found for \"{}\"", view.search)?;
            } else {
                writeln!(f, "No posts yet.")?;
            }
        }

        for group in &view.years {
            writeln!(f, "── {} {}", group.year, "─".repeat(RULE_WIDTH - 8))?;
            for card in &group.posts {
                writeln!(f, "  {} {:>2}  {}", card.month, card.day, card.title)?;
                if !card.summary.is_empty() {
                    writeln!(f, "          {}", card.summary)?;
                }
                let mut meta = card.author.clone();
                if !card.tags.is_empty() {
                    let tags: Vec<String> = card.tags.iter().map(|t| format!("#{t}")).collect();
                    meta = format!("{} · {}", tags.join(" "), meta);
                }
                writeln!(f, "          {}  [{}]", meta, card.id)?;
            }
            writeln!(f)?;
        }

        if view.total_pages > 1 {
            writeln!(f, "Page {} of {}", view.page, view.total_pages)?;
        }
        Ok(())
    }
}

struct DetailText<'a>(&'a PostDetail);

impl fmt::Display for DetailText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let post = self.0;
        writeln!(f, "{}", post.title)?;
        writeln!(f, "{}", "═".repeat(RULE_WIDTH))?;
        writeln!(f, "{} · {}", post.author, post.published)?;
        if !post.tags.is_empty() {
            writeln!(f, "Tags: {}", post.tags.join(", "))?;
        }
        writeln!(f, "Cover: {}", post.cover_image)?;
        writeln!(f)?;
        writeln!(f, "{}", post.content.trim_end())
    }
}

struct AdminTable<'a>(&'a [&'a Post]);

impl fmt::Display for AdminTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No posts.");
        }

        let width = self.0.iter().map(|p| p.id.chars().count()).max().unwrap_or(0);
        for post in self.0 {
            let date = post.created_at_in(&chrono::Local).format("%Y-%m-%d");
            writeln!(f, "{:<width$}  {}  {}", post.id, date, post.title)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nebula_shared::{PostCard, YearGroupView};

    fn card(id: &str, tags: &[&str]) -> PostCard {
        PostCard {
            id: id.to_string(),
            title: format!("Title {id}"),
            summary: "A summary".to_string(),
            cover_image: String::new(),
            author: "Neo".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            month: "Jul".to_string(),
            day: 1,
            date: "2024-07-01".to_string(),
        }
    }

    fn view(search: &str, years: Vec<YearGroupView>) -> ListingView {
        ListingView {
            search: search.to_string(),
            page: 1,
            total_pages: 2,
            total_matches: 6,
            has_previous: false,
            has_next: true,
            years,
        }
    }

    #[test]
    fn test_listing_shows_years_cards_and_pager() {
        let out = listing(&view(
            "",
            vec![
                YearGroupView {
                    year: 2024,
                    posts: vec![card("a", &["CSS", "Design"])],
                },
                YearGroupView {
                    year: 2023,
                    posts: vec![card("b", &[])],
                },
            ],
        ));

        assert!(out.find("── 2024").unwrap() < out.find("── 2023").unwrap());
        assert!(out.contains("Jul  1  Title a"));
        assert!(out.contains("#CSS #Design · Neo  [a]"));
        assert!(out.contains("Neo  [b]"));
        assert!(out.ends_with("Page 1 of 2\n"));
    }

    #[test]
    fn test_listing_empty_search() {
        let mut v = view("zzz", vec![]);
        v.total_matches = 0;
        v.total_pages = 0;

        let out = listing(&v);

        assert!(out.contains("No posts found for \"zzz\""));
        assert!(!out.contains("Page"));
    }

    #[test]
    fn test_listing_page_past_the_end_of_a_search() {
        let mut v = view("rust", vec![]);
        v.page = 9;
        v.total_pages = 1;
        v.total_matches = 3;

        let out = listing(&v);

        assert!(out.contains("Search \"rust\": 3 matches"));
        assert!(out.contains("Page 9 is empty."));
        assert!(!out.contains("No posts found"));
    }

    #[test]
    fn test_admin_table_aligns_ids() {
        let mut short = nebula_core::domain::seed_posts(0).remove(0);
        short.id = "a".to_string();
        let long = nebula_core::domain::seed_posts(0).remove(1);

        let out = admin_table(&[&short, &long]);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].find("  19"), lines[1].find("  19"));
        assert_eq!(admin_table(&[]), "No posts.\n");
    }

    #[test]
    fn test_detail() {
        let out = detail(&PostDetail {
            id: "a".to_string(),
            title: "Hello".to_string(),
            author: "Neo".to_string(),
            tags: vec!["x".to_string(), "y".to_string()],
            cover_image: "img".to_string(),
            published: "July 1, 2024".to_string(),
            content: "# Body\n\n".to_string(),
        });

        assert!(out.starts_with("Hello\n"));
        assert!(out.contains("Neo · July 1, 2024"));
        assert!(out.contains("Tags: x, y"));
        assert!(out.ends_with("# Body\n"));
    }
}
