//! In-memory post store.
//!
//! Posts live in a single insertion-ordered `Vec` behind one lock. Every
//! operation holds the lock for its whole find/modify sequence, so
//! concurrent requests cannot interleave a lookup with a splice.
//! No persistence - data is lost on restart.

use crate::models::{seed_posts, Post};
use tokio::sync::RwLock;
use tracing::debug;

/// Thread-safe in-memory store
#[derive(Debug, Default)]
pub struct PostStore {
    /// Posts in insertion order
    posts: RwLock<Vec<Post>>,
}

impl PostStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given posts, in order
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }

    /// Create a store holding the startup seed posts
    pub fn seeded() -> Self {
        Self::with_posts(seed_posts())
    }

    /// All posts in insertion order
    pub async fn list(&self) -> Vec<Post> {
        self.posts.read().await.clone()
    }

    /// Number of stored posts
    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.posts.read().await.is_empty()
    }

    /// Find a post by id
    pub async fn find_by_id(&self, id: &str) -> Option<Post> {
        self.posts.read().await.iter().find(|p| p.id == id).cloned()
    }

    pub async fn contains(&self, id: &str) -> bool {
        self.posts.read().await.iter().any(|p| p.id == id)
    }

    /// Append a post at the end. The caller guarantees the id is fresh.
    pub async fn append(&self, post: Post) {
        let mut posts = self.posts.write().await;
        posts.push(post);
        debug!(count = posts.len(), "Appended post");
    }

    /// Overwrite the post with `id` in place, keeping its position.
    ///
    /// Returns the record that was replaced.
    pub async fn replace(&self, id: &str, post: Post) -> Result<Post, StoreError> {
        let mut posts = self.posts.write().await;
        let slot = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        Ok(std::mem::replace(slot, post))
    }

    /// Replace the post with `id` by `f(current)` under a single write lock.
    ///
    /// Returns the new record.
    pub async fn update_with<F>(&self, id: &str, f: F) -> Result<Post, StoreError>
    where
        F: FnOnce(&Post) -> Post,
    {
        let mut posts = self.posts.write().await;
        let slot = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        *slot = f(&*slot);
        Ok(slot.clone())
    }

    /// Remove the post with `id` and return it
    pub async fn remove(&self, id: &str) -> Result<Post, StoreError> {
        let mut posts = self.posts.write().await;
        let index = posts
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let removed = posts.remove(index);
        debug!(count = posts.len(), "Removed post");
        Ok(removed)
    }
}

/// Store errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("post not found: {0}")]
    NotFound(String),
}
