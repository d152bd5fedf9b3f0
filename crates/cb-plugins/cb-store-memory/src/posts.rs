//! In-memory post store.
//!
//! Posts are appended to an insertion-ordered vector and never physically
//! removed, so positions are stable and an id-to-position map gives O(1)
//! lookup. The search subset is a value snapshot taken at refresh time,
//! not a live view: entity mutations after a refresh stay invisible until
//! the next refresh.

use cb_core::error::{OpResult, StoreError};
use cb_core::models::{Post, PostId, DEFAULT_THREAD};
use cb_core::traits::PostRepo;
use cb_core::validate::{self, DELETED_MESSAGE};
use std::collections::HashMap;

/// Owns every post in the system plus the subset of the last search.
#[derive(Debug)]
pub struct MemoryPostStore {
    /// All posts in insertion order. Tombstoned posts stay in place.
    posts: Vec<Post>,
    /// Id-to-position map. Positions never move because posts are never
    /// physically removed.
    index: HashMap<PostId, usize>,
    /// Snapshot from the most recent search refresh.
    subset: Vec<Post>,
    /// Next id to hand out. Advances only when a create succeeds.
    next_id: PostId,
}

impl Default for MemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self {
            posts: Vec::new(),
            index: HashMap::new(),
            subset: Vec::new(),
            next_id: 1,
        }
    }

    fn get(&self, id: PostId) -> Option<&Post> {
        self.index.get(&id).map(|&pos| &self.posts[pos])
    }

    fn get_mut(&mut self, id: PostId) -> Option<&mut Post> {
        let pos = *self.index.get(&id)?;
        Some(&mut self.posts[pos])
    }

    /// Resolves the caller-supplied thread label: absent or blank becomes
    /// the default, anything else is stored trimmed.
    fn resolve_thread(thread: Option<&str>) -> String {
        match thread.map(str::trim) {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => DEFAULT_THREAD.to_string(),
        }
    }
}

impl PostRepo for MemoryPostStore {
    fn create_post(
        &mut self,
        author: &str,
        thread: Option<&str>,
        title: &str,
        body: &str,
    ) -> OpResult<Post> {
        let errors = validate::validate_post(title, body);
        if !errors.is_empty() {
            return Err(StoreError::Validation(errors));
        }

        let id = self.next_id;
        self.next_id += 1;

        let post = Post::new(
            id,
            Self::resolve_thread(thread),
            author.to_string(),
            title.to_string(),
            body.to_string(),
        );
        self.index.insert(id, self.posts.len());
        self.posts.push(post.clone());
        log::debug!("created post {} in thread '{}'", id, post.thread);
        Ok(post)
    }

    fn post_by_id(&self, id: PostId) -> Option<Post> {
        self.get(id).cloned()
    }

    fn posts_by_author(&self, author: &str) -> Vec<Post> {
        self.posts
            .iter()
            .filter(|p| p.author == author)
            .cloned()
            .collect()
    }

    fn all_posts(&self) -> Vec<Post> {
        self.posts.clone()
    }

    fn subset_posts(&self) -> Vec<Post> {
        self.subset.clone()
    }

    fn update_post(&mut self, id: PostId, new_title: &str, new_body: &str) -> OpResult<Post> {
        let post = self.get_mut(id).ok_or(StoreError::PostNotFound)?;
        if post.deleted {
            return Err(StoreError::EditDeletedPost);
        }

        let errors = validate::validate_post(new_title, new_body);
        if !errors.is_empty() {
            return Err(StoreError::Validation(errors));
        }

        post.apply_update(new_title.to_string(), new_body.to_string());
        Ok(post.clone())
    }

    fn delete_post(&mut self, id: PostId, confirm: bool) -> OpResult<bool> {
        // The confirm gate comes first, even for unknown ids.
        if !confirm {
            return Err(StoreError::DeletionNotConfirmed);
        }

        let post = self.get_mut(id).ok_or(StoreError::PostNotFound)?;
        // No already-deleted guard: re-deleting re-applies the tombstone.
        post.tombstone(DELETED_MESSAGE);
        log::debug!("tombstoned post {}", id);
        Ok(true)
    }

    fn mark_post_read(&mut self, id: PostId, viewer: Option<&str>) -> OpResult<bool> {
        let post = self.get_mut(id).ok_or(StoreError::PostNotFound)?;
        if let Some(viewer) = viewer {
            post.mark_read(viewer);
        }
        Ok(true)
    }

    fn refresh_subset_by_search(&mut self, keyword: &str, thread_filter: Option<&str>) {
        self.subset.clear();

        let kw = keyword.trim().to_lowercase();
        let thread = thread_filter.map(str::trim).filter(|t| !t.is_empty());

        for post in &self.posts {
            // Exact, case-sensitive label match; tombstoned posts stay
            // eligible and match on their tombstone text.
            if let Some(thread) = thread {
                if post.thread != thread {
                    continue;
                }
            }

            if kw.is_empty()
                || post.title.to_lowercase().contains(&kw)
                || post.body.to_lowercase().contains(&kw)
            {
                self.subset.push(post.clone());
            }
        }
    }

    fn count_unread_posts(&self, viewer: Option<&str>) -> usize {
        self.posts.iter().filter(|p| p.is_unread_by(viewer)).count()
    }
}
