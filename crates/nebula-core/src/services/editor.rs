//! Editor flows - assistant helpers applied to drafts, and publishing drafts.

use crate::domain::{Post, PostDraft};
use crate::error::{DomainError, StoreError};
use crate::ports::{KeyValueStore, WritingAssistant};
use crate::services::PostStore;

/// One of the editor's assistant buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistAction {
    Summary,
    Title,
    Improve,
}

/// Run an assistant helper against the draft's content and apply the result.
///
/// An empty title suggestion leaves the title alone; the other results are
/// taken as they come.
pub async fn assist(draft: &mut PostDraft, assistant: &dyn WritingAssistant, action: AssistAction) {
    match action {
        AssistAction::Summary => draft.summary = assistant.summarize(&draft.content).await,
        AssistAction::Title => {
            let title = assistant.suggest_title(&draft.content).await;
            if !title.is_empty() {
                draft.title = title;
            }
        }
        AssistAction::Improve => draft.content = assistant.improve(&draft.content).await,
    }
}

/// Save a draft as a new post, or as a revision of the post `editing`.
///
/// New posts whose derived id is already taken get a numeric suffix so an
/// unrelated post is never overwritten.
pub fn publish<K: KeyValueStore>(
    store: &PostStore<K>,
    draft: PostDraft,
    editing: Option<&str>,
    now: i64,
) -> Result<Post, StoreError> {
    let post = match editing {
        Some(id) => {
            let existing = store.get_post(id).ok_or_else(|| DomainError::NotFound {
                entity_type: "Post",
                id: id.to_string(),
            })?;
            draft.revise(&existing, now)?
        }
        None => {
            let mut post = draft.create(now)?;
            let base = post.id.clone();
            let mut n = 2;
            while store.contains(&post.id) {
                post.id = format!("{base}-{n}");
                n += 1;
            }
            post
        }
    };

    store.save_post(post)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::services::testing::{CannedAssistant, MemoryKv};

    fn draft() -> PostDraft {
        PostDraft {
            title: "Old title".to_string(),
            content: "Some content".to_string(),
            summary: String::new(),
            cover_image: None,
            tags: "a, b".to_string(),
        }
    }

    fn empty_store() -> PostStore<Arc<MemoryKv>> {
        let kv = Arc::new(MemoryKv::default());
        kv.set(crate::services::POSTS_KEY, "[]").unwrap();
        PostStore::new(kv)
    }

    #[tokio::test]
    async fn test_assist_applies_results() {
        let assistant = CannedAssistant("From the machine");
        let mut d = draft();

        assist(&mut d, &assistant, AssistAction::Summary).await;
        assist(&mut d, &assistant, AssistAction::Title).await;
        assist(&mut d, &assistant, AssistAction::Improve).await;

        assert_eq!(d.summary, "From the machine");
        assert_eq!(d.title, "From the machine");
        assert_eq!(d.content, "From the machine");
    }

    #[tokio::test]
    async fn test_empty_title_suggestion_is_ignored() {
        let mut d = draft();

        assist(&mut d, &CannedAssistant(""), AssistAction::Title).await;

        assert_eq!(d.title, "Old title");
    }

    #[test]
    fn test_publish_new_then_edit() {
        let store = empty_store();

        let created = publish(&store, draft(), None, 1_000_001_234).unwrap();
        assert_eq!(created.id, "old-title-1234");

        let mut edit = PostDraft::from_post(&created);
        edit.title = "New title".to_string();
        let edited = publish(&store, edit, Some(&created.id), 2_000_000_000).unwrap();

        assert_eq!(edited.id, created.id);
        assert_eq!(edited.created_at, 1_000_001_234);
        assert_eq!(edited.updated_at, 2_000_000_000);
        assert_eq!(store.list_posts().len(), 1);
    }

    #[test]
    fn test_publish_avoids_id_collision() {
        let store = empty_store();

        let first = publish(&store, draft(), None, 1_234).unwrap();
        let second = publish(&store, draft(), None, 11_234).unwrap();
        let third = publish(&store, draft(), None, 21_234).unwrap();

        assert_eq!(first.id, "old-title-1234");
        assert_eq!(second.id, "old-title-1234-2");
        assert_eq!(third.id, "old-title-1234-3");
        assert_eq!(store.list_posts().len(), 3);
    }

    #[test]
    fn test_publish_unknown_post() {
        let store = empty_store();

        let err = publish(&store, draft(), Some("ghost"), 1).unwrap_err();

        assert!(matches!(err, StoreError::Domain(DomainError::NotFound { .. })));
    }

    #[test]
    fn test_publish_invalid_draft_saves_nothing() {
        let store = empty_store();
        let mut d = draft();
        d.content.clear();

        assert!(publish(&store, d, None, 1).is_err());
        assert!(store.list_posts().is_empty());
    }
}
