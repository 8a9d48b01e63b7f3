use crate::models::{CommentId, Post, PostId};
use std::{
    collections::BTreeMap,
    sync::{Mutex, MutexGuard, PoisonError},
};

const SHARE_LINK_BASE: &str = "https://postflow.com/post/";

/// The public link for a post. Depends only on the ID.
pub fn share_link(id: PostId) -> String {
    format!("{SHARE_LINK_BASE}{id}")
}

struct Inner {
    posts: BTreeMap<PostId, Post>,
    next_id: PostId,
}

/// In-memory registry of posts and their comments.
///
/// Every operation takes the one store-wide lock for its whole duration,
/// so reads and mutations are totally ordered. Operations on an unknown
/// post return `None` and leave the store untouched.
pub struct PostStore {
    inner: Mutex<Inner>,
}

impl Default for PostStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PostStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                posts: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // No operation can panic halfway through a write, so a poisoned
        // guard still holds consistent data.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn with_post<T>(&self, id: PostId, f: impl FnOnce(&mut Post) -> T) -> Option<T> {
        self.lock().posts.get_mut(&id).map(f)
    }

    pub fn create_post(&self, content: impl Into<String>) -> PostId {
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.posts.insert(id, Post::new(id, content.into()));
        id
    }

    /// Returns the new comment's ID.
    pub fn add_comment(&self, id: PostId, content: impl Into<String>) -> Option<CommentId> {
        let content = content.into();
        self.with_post(id, |post| post.push_comment(content))
    }

    /// Returns the updated like count.
    pub fn like_post(&self, id: PostId) -> Option<u64> {
        self.with_post(id, |post| {
            post.likes += 1;
            post.likes
        })
    }

    /// Returns the updated dislike count.
    pub fn dislike_post(&self, id: PostId) -> Option<u64> {
        self.with_post(id, |post| {
            post.dislikes += 1;
            post.dislikes
        })
    }

    pub fn share_post(&self, id: PostId) -> Option<String> {
        self.with_post(id, |post| {
            let link = share_link(post.id);
            post.share_link = Some(link.clone());
            link
        })
    }

    pub fn get_post(&self, id: PostId) -> Option<Post> {
        self.lock().posts.get(&id).cloned()
    }

    /// Snapshot of every post, in creation order.
    pub fn list_posts(&self) -> Vec<Post> {
        self.lock().posts.values().cloned().collect()
    }

    pub fn post_count(&self) -> usize {
        self.lock().posts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{collections::HashSet, sync::Arc, thread};

    #[test]
    fn post_ids_start_at_one_without_gaps() {
        let store = PostStore::new();
        let ids: Vec<_> = (0..5).map(|i| store.create_post(format!("p{i}"))).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn new_post_has_empty_state() {
        let store = PostStore::new();
        let id = store.create_post("");
        let post = store.get_post(id).unwrap();
        assert_eq!(post.content, "");
        assert!(post.comments.is_empty());
        assert_eq!((post.likes, post.dislikes), (0, 0));
        assert_eq!(post.share_link, None);
    }

    #[test]
    fn nth_comment_gets_id_n() {
        let store = PostStore::new();
        let a = store.create_post("a");
        let b = store.create_post("b");
        assert_eq!(store.add_comment(a, "first"), Some(1));
        assert_eq!(store.add_comment(a, "second"), Some(2));
        assert_eq!(store.add_comment(b, "other"), Some(1));

        let post = store.get_post(a).unwrap();
        let ids: Vec<_> = post.comments.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(post.comments[0].content, "first");
    }

    #[test]
    fn likes_and_dislikes_count_independently() {
        let store = PostStore::new();
        let id = store.create_post("x");
        for _ in 0..3 {
            store.like_post(id);
        }
        assert_eq!(store.dislike_post(id), Some(1));
        assert_eq!(store.like_post(id), Some(4));

        let post = store.get_post(id).unwrap();
        assert_eq!((post.likes, post.dislikes), (4, 1));
    }

    #[test]
    fn dislikes_alone_leave_likes_untouched() {
        let store = PostStore::new();
        let id = store.create_post("meh");
        for k in 1..=5 {
            assert_eq!(store.dislike_post(id), Some(k));
        }

        let post = store.get_post(id).unwrap();
        assert_eq!((post.likes, post.dislikes), (0, 5));
    }

    #[test]
    fn share_is_idempotent_and_stored() {
        let store = PostStore::new();
        let id = store.create_post("x");
        let first = store.share_post(id).unwrap();
        let second = store.share_post(id).unwrap();
        assert_eq!(first, "https://postflow.com/post/1");
        assert_eq!(first, second);
        assert_eq!(store.get_post(id).unwrap().share_link, Some(first));
    }

    #[test]
    fn unknown_post_is_reported_and_not_created() {
        let store = PostStore::new();
        store.create_post("only");

        assert_eq!(store.add_comment(42, "ghost"), None);
        assert_eq!(store.like_post(42), None);
        assert_eq!(store.dislike_post(42), None);
        assert_eq!(store.share_post(42), None);
        assert_eq!(store.get_post(42), None);

        let posts = store.list_posts();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, 1);
    }

    #[test]
    fn listing_follows_creation_order() {
        let store = PostStore::new();
        assert_eq!(store.post_count(), 0);
        for i in 0..20 {
            store.create_post(i.to_string());
        }
        let ids: Vec<_> = store.list_posts().iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=20).collect::<Vec<_>>());
    }

    #[test]
    fn concurrent_creates_get_unique_ids() {
        let store = Arc::new(PostStore::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    (0..25)
                        .map(|_| store.create_post("c"))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let ids: HashSet<_> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        assert_eq!(ids, (1..=200).collect::<HashSet<_>>());
        assert_eq!(store.post_count(), 200);
    }

    #[test]
    fn concurrent_likes_are_not_lost() {
        let store = Arc::new(PostStore::new());
        let id = store.create_post("hot");
        thread::scope(|s| {
            for _ in 0..10 {
                s.spawn(|| {
                    for _ in 0..100 {
                        store.like_post(id);
                    }
                });
            }
        });
        assert_eq!(store.get_post(id).unwrap().likes, 1000);
    }
}
