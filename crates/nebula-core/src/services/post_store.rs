//! Post store - the canonical post collection kept in one key-value slot.

use crate::domain::{Post, now_millis, seed_posts};
use crate::error::StoreError;
use crate::ports::KeyValueStore;

/// Slot the post collection lives in.
pub const POSTS_KEY: &str = "nebula_blog_posts";

/// Post collection stored as a JSON array under a single key.
///
/// Every operation reads the whole collection, modifies it and writes the
/// whole collection back. A single writer is assumed.
pub struct PostStore<K> {
    kv: K,
    key: String,
}

impl<K: KeyValueStore> PostStore<K> {
    /// Wrap a backend without touching it.
    pub fn new(kv: K) -> Self {
        Self::with_key(kv, POSTS_KEY)
    }

    pub fn with_key(kv: K, key: impl Into<String>) -> Self {
        Self {
            kv,
            key: key.into(),
        }
    }

    /// Wrap a backend and seed it if the post slot has never been written.
    pub fn open(kv: K) -> Result<Self, StoreError> {
        Self::open_with_key(kv, POSTS_KEY)
    }

    pub fn open_with_key(kv: K, key: impl Into<String>) -> Result<Self, StoreError> {
        let store = Self::with_key(kv, key);
        store.ensure_seeded()?;
        Ok(store)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Write the seed set if the slot key is absent. Returns whether it did.
    pub fn ensure_seeded(&self) -> Result<bool, StoreError> {
        self.ensure_seeded_at(now_millis())
    }

    /// [`Self::ensure_seeded`] with seed dates relative to `now`.
    pub fn ensure_seeded_at(&self, now: i64) -> Result<bool, StoreError> {
        if self.kv.contains(&self.key)? {
            return Ok(false);
        }

        let seed = seed_posts(now);
        self.persist(&seed)?;
        tracing::info!(key = %self.key, count = seed.len(), "Seeded post store");
        Ok(true)
    }

    /// All posts, newest first.
    ///
    /// Unreadable or corrupt data is logged and reads as empty; the stored
    /// value is not modified.
    pub fn list_posts(&self) -> Vec<Post> {
        match self.load() {
            Ok(mut posts) => {
                posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                posts
            }
            Err(e) => {
                tracing::error!(key = %self.key, error = %e, "Failed to load posts");
                Vec::new()
            }
        }
    }

    pub fn get_post(&self, id: &str) -> Option<Post> {
        self.list_posts().into_iter().find(|p| p.id == id)
    }

    /// Insert or replace a post by id.
    ///
    /// A known id is replaced in place and keeps its stored `created_at`;
    /// a new id goes to the front. Returns the post as stored.
    pub fn save_post(&self, mut post: Post) -> Result<Post, StoreError> {
        post.validate()?;
        let mut posts = self.load()?;

        match posts.iter().position(|p| p.id == post.id) {
            Some(index) => {
                let created_at = posts[index].created_at;
                if post.created_at != created_at {
                    tracing::debug!(id = %post.id, "Keeping original creation time");
                    post.created_at = created_at;
                }
                posts[index] = post.clone();
            }
            None => posts.insert(0, post.clone()),
        }

        self.persist(&posts)?;
        tracing::debug!(id = %post.id, total = posts.len(), "Post saved");
        Ok(post)
    }

    /// Remove every post with `id`. Unknown ids are a no-op.
    pub fn delete_post(&self, id: &str) -> Result<(), StoreError> {
        let mut posts = self.load()?;
        let before = posts.len();
        posts.retain(|p| p.id != id);

        if posts.len() == before {
            tracing::debug!(id = %id, "Delete of unknown post ignored");
            return Ok(());
        }

        self.persist(&posts)?;
        tracing::debug!(id = %id, total = posts.len(), "Post deleted");
        Ok(())
    }

    /// Whether a post with `id` is stored.
    pub fn contains(&self, id: &str) -> bool {
        self.get_post(id).is_some()
    }

    /// Stored collection in storage order. An absent slot reads as empty.
    fn load(&self) -> Result<Vec<Post>, StoreError> {
        match self.kv.get(&self.key)? {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt(e.to_string())),
        }
    }

    fn persist(&self, posts: &[Post]) -> Result<(), StoreError> {
        let raw =
            serde_json::to_string(posts).map_err(|e| StoreError::Serialization(e.to_string()))?;
        self.kv.set(&self.key, &raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use super::*;
    use crate::domain::PostDraft;
    use crate::ports::KvError;
    use crate::services::testing::MemoryKv;

    const NOW: i64 = 1_719_835_200_000;

    fn post(id: &str, created_at: i64) -> Post {
        Post {
            id: id.to_string(),
            title: format!("Title {id}"),
            content: "body".to_string(),
            summary: String::new(),
            cover_image: String::new(),
            created_at,
            updated_at: created_at,
            author: "Admin".to_string(),
            tags: Vec::new(),
        }
    }

    fn store_with(posts: &[Post]) -> (PostStore<Arc<MemoryKv>>, Arc<MemoryKv>) {
        let kv = Arc::new(MemoryKv::default());
        kv.set(POSTS_KEY, &serde_json::to_string(posts).unwrap())
            .unwrap();
        (PostStore::new(kv.clone()), kv)
    }

    fn stored_ids(kv: &MemoryKv) -> Vec<String> {
        let raw = kv.get(POSTS_KEY).unwrap().unwrap();
        let posts: Vec<Post> = serde_json::from_str(&raw).unwrap();
        posts.into_iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_open_seeds_empty_slot() {
        let kv = Arc::new(MemoryKv::default());

        let store = PostStore::open(kv.clone()).unwrap();
        let posts = store.list_posts();

        assert_eq!(posts.len(), 8);
        assert_eq!(posts[0].id, "welcome-to-nebula");
        assert_eq!(stored_ids(&kv).len(), 8);
    }

    #[test]
    fn test_seeding_happens_once() {
        let kv = Arc::new(MemoryKv::default());
        let store = PostStore::new(kv.clone());

        assert!(store.ensure_seeded_at(NOW).unwrap());
        store.delete_post("welcome-to-nebula").unwrap();
        assert!(!store.ensure_seeded_at(NOW).unwrap());
        assert_eq!(store.list_posts().len(), 7);

        let empty: Vec<Post> = Vec::new();
        kv.set(POSTS_KEY, &serde_json::to_string(&empty).unwrap())
            .unwrap();
        assert!(!store.ensure_seeded_at(NOW).unwrap());
        assert!(store.list_posts().is_empty());
    }

    #[test]
    fn test_list_is_sorted_newest_first() {
        let (store, _) = store_with(&[post("a", 10), post("b", 30), post("c", 20)]);
        store.save_post(post("d", 5)).unwrap();
        store.save_post(post("e", 25)).unwrap();

        let posts = store.list_posts();

        assert!(posts.windows(2).all(|w| w[0].created_at >= w[1].created_at));
        assert_eq!(posts[0].id, "b");
    }

    #[test]
    fn test_save_new_post_goes_first() {
        let (store, kv) = store_with(&[post("a", 3), post("b", 2), post("c", 1)]);

        store.save_post(post("new", 0)).unwrap();

        assert_eq!(stored_ids(&kv), vec!["new", "a", "b", "c"]);
    }

    #[test]
    fn test_save_existing_post_replaces_in_place() {
        let (store, kv) = store_with(&[post("a", NOW), post("b", NOW - 1), post("c", NOW - 2)]);
        let existing = store.get_post("b").unwrap();
        let mut draft = PostDraft::from_post(&existing);
        draft.title = "Edited".to_string();
        let edited = draft.revise(&existing, NOW + 1_000).unwrap();

        store.save_post(edited).unwrap();

        assert_eq!(stored_ids(&kv), vec!["a", "b", "c"]);
        let saved = store.get_post("b").unwrap();
        assert_eq!(saved.title, "Edited");
        assert_eq!(saved.created_at, NOW - 1);
        assert_eq!(saved.updated_at, NOW + 1_000);
    }

    #[test]
    fn test_save_keeps_stored_creation_time() {
        let (store, _) = store_with(&[post("a", 100)]);

        let saved = store.save_post(post("a", 999)).unwrap();

        assert_eq!(saved.created_at, 100);
        assert_eq!(store.get_post("a").unwrap().created_at, 100);
    }

    #[test]
    fn test_save_round_trip() {
        let (store, _) = store_with(&[post("a", 1)]);
        let mut p = post("fresh", 50);
        p.summary = "summary".to_string();
        p.tags = vec!["x".to_string(), "x".to_string()];

        store.save_post(p.clone()).unwrap();

        assert_eq!(store.get_post("fresh"), Some(p));
    }

    #[test]
    fn test_save_is_idempotent() {
        let (store, _) = store_with(&[post("a", 1)]);
        let p = post("b", 2);

        store.save_post(p.clone()).unwrap();
        let once = store.list_posts();
        store.save_post(p).unwrap();

        assert_eq!(store.list_posts(), once);
    }

    #[test]
    fn test_save_rejects_missing_fields() {
        let (store, kv) = store_with(&[post("a", 1)]);
        let mut p = post("b", 2);
        p.title = "  ".to_string();

        let err = store.save_post(p).unwrap_err();

        assert!(matches!(err, StoreError::Domain(_)));
        assert_eq!(stored_ids(&kv), vec!["a"]);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let (store, kv) = store_with(&[post("a", 2), post("b", 1)]);

        store.delete_post("a").unwrap();
        let once = stored_ids(&kv);
        store.delete_post("a").unwrap();

        assert_eq!(stored_ids(&kv), once);
        assert_eq!(once, vec!["b"]);
        assert!(store.delete_post("missing").is_ok());
    }

    #[test]
    fn test_ids_stay_unique() {
        let (store, kv) = store_with(&[]);
        for round in 0..3 {
            for id in ["a", "b", "c", "a"] {
                store.save_post(post(id, round)).unwrap();
            }
            store.delete_post("b").unwrap();
        }

        let ids = stored_ids(&kv);
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(ids.len(), unique.len());
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn test_get_unknown_post() {
        let (store, _) = store_with(&[post("a", 1)]);
        assert!(store.get_post("nope").is_none());
        assert!(!store.contains("nope"));
    }

    #[test]
    fn test_corrupt_slot_reads_empty_and_is_left_alone() {
        let kv = Arc::new(MemoryKv::default());
        kv.set(POSTS_KEY, "{not json").unwrap();

        let store = PostStore::open(kv.clone()).unwrap();

        assert!(store.list_posts().is_empty());
        assert!(store.get_post("welcome-to-nebula").is_none());
        assert!(matches!(
            store.save_post(post("a", 1)),
            Err(StoreError::Corrupt(_))
        ));
        assert!(matches!(store.delete_post("a"), Err(StoreError::Corrupt(_))));
        assert_eq!(kv.get(POSTS_KEY).unwrap().as_deref(), Some("{not json"));
    }

    struct BrokenKv;

    impl KeyValueStore for BrokenKv {
        fn get(&self, _key: &str) -> Result<Option<String>, KvError> {
            Err(KvError::Io("disk on fire".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), KvError> {
            Err(KvError::Io("disk on fire".to_string()))
        }

        fn delete(&self, _key: &str) -> Result<(), KvError> {
            Err(KvError::Io("disk on fire".to_string()))
        }
    }

    #[test]
    fn test_backend_failure_does_not_escape_reads() {
        let store = PostStore::new(BrokenKv);

        assert!(store.list_posts().is_empty());
        assert!(matches!(store.ensure_seeded(), Err(StoreError::Backend(_))));
        assert!(matches!(
            store.save_post(post("a", 1)),
            Err(StoreError::Backend(_))
        ));
    }

    #[test]
    fn test_custom_key() {
        let kv = Arc::new(MemoryKv::default());
        let store = PostStore::open_with_key(kv.clone(), "other_posts").unwrap();

        assert_eq!(store.key(), "other_posts");
        assert!(kv.get(POSTS_KEY).unwrap().is_none());
        assert!(kv.get("other_posts").unwrap().is_some());
    }
}
