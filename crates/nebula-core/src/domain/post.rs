use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Cover image used when a stored post has none.
pub const DEFAULT_COVER_IMAGE: &str = "https://picsum.photos/800/400";

/// Author recorded when a post does not name one.
pub const DEFAULT_AUTHOR: &str = "Admin";

/// Slug used when a title has no `[a-z0-9]` characters at all.
const FALLBACK_SLUG: &str = "post";

fn default_cover_image() -> String {
    DEFAULT_COVER_IMAGE.to_string()
}

fn default_author() -> String {
    DEFAULT_AUTHOR.to_string()
}

/// Current wall-clock time in epoch milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Post entity - a single blog entry with markdown content.
///
/// Serialized with camelCase keys, the layout the post slot has always used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    /// Markdown source.
    pub content: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default = "default_cover_image")]
    pub cover_image: String,
    /// Epoch millis, set once.
    pub created_at: i64,
    /// Epoch millis, refreshed on every save.
    pub updated_at: i64,
    #[serde(default = "default_author")]
    pub author: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Post {
    /// Check the fields required at save time.
    pub fn validate(&self) -> Result<(), DomainError> {
        require_fields(&self.title, &self.content)
    }

    /// Calendar year of `created_at` in the given timezone.
    pub fn created_year<Tz: TimeZone>(&self, tz: &Tz) -> i32 {
        self.created_at_in(tz).year()
    }

    /// `created_at` as a date-time in the given timezone.
    ///
    /// Timestamps outside chrono's range saturate to its bounds.
    pub fn created_at_in<Tz: TimeZone>(&self, tz: &Tz) -> DateTime<Tz> {
        DateTime::from_timestamp_millis(self.created_at)
            .unwrap_or(if self.created_at < 0 {
                DateTime::<Utc>::MIN_UTC
            } else {
                DateTime::<Utc>::MAX_UTC
            })
            .with_timezone(tz)
    }

    /// Case-insensitive substring match against title, summary and tags.
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.summary.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

fn require_fields(title: &str, content: &str) -> Result<(), DomainError> {
    let missing: Vec<&str> = [("title", title), ("content", content)]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

    match missing.as_slice() {
        [] => Ok(()),
        [one] => Err(DomainError::Validation(format!("{one} is required"))),
        many => Err(DomainError::Validation(format!(
            "{} are required",
            many.join(" and ")
        ))),
    }
}

/// Lowercase the title and collapse everything outside `[a-z0-9]` into `-`.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_matches('-').to_string()
}

/// Derive a post id from its title and creation time.
///
/// The suffix is the last four digits of the epoch millis.
pub fn derive_id(title: &str, created_at: i64) -> String {
    let slug = slugify(title);
    let slug = if slug.is_empty() { FALLBACK_SLUG } else { &slug };
    let millis = created_at.unsigned_abs().to_string();
    let suffix = &millis[millis.len().saturating_sub(4)..];
    format!("{slug}-{suffix}")
}

/// Split a comma-separated tag field, keeping order and duplicates.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// The editable fields of a post, as the editor collects them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub summary: String,
    /// `None` picks a random placeholder image on create.
    pub cover_image: Option<String>,
    /// Comma-separated tags.
    pub tags: String,
}

impl PostDraft {
    /// Prefill a draft from an existing post.
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
            summary: post.summary.clone(),
            cover_image: Some(post.cover_image.clone()),
            tags: post.tags.join(", "),
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        require_fields(&self.title, &self.content)
    }

    /// Turn the draft into a brand-new post created at `now`.
    pub fn create(self, now: i64) -> Result<Post, DomainError> {
        self.validate()?;
        let cover_image = self
            .cover_image
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| format!("{DEFAULT_COVER_IMAGE}?random={now}"));

        Ok(Post {
            id: derive_id(&self.title, now),
            tags: parse_tags(&self.tags),
            title: self.title,
            content: self.content,
            summary: self.summary,
            cover_image,
            created_at: now,
            updated_at: now,
            author: DEFAULT_AUTHOR.to_string(),
        })
    }

    /// Apply the draft to an existing post.
    ///
    /// Id, creation time and author are kept; `updated_at` becomes `now`.
    pub fn revise(self, existing: &Post, now: i64) -> Result<Post, DomainError> {
        self.validate()?;
        let cover_image = self
            .cover_image
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| existing.cover_image.clone());

        Ok(Post {
            id: existing.id.clone(),
            tags: parse_tags(&self.tags),
            title: self.title,
            content: self.content,
            summary: self.summary,
            cover_image,
            created_at: existing.created_at,
            updated_at: now,
            author: existing.author.clone(),
        })
    }
}
