//! In-memory reply store.
//!
//! Same storage scheme as the post store (insertion-ordered vector plus an
//! id-to-position map), but the deletion semantics differ: a deleted reply
//! is excluded from every listing, count, and search result. The record is
//! kept behind with its flag set, and only `reply_by_id` ever shows it.

use cb_core::error::{OpResult, StoreError};
use cb_core::models::{PostId, Reply, ReplyId};
use cb_core::traits::ReplyRepo;
use cb_core::validate;
use std::collections::HashMap;

/// Owns every reply in the system plus the subset of the last search.
/// Reply ids are one global sequence, independent of post ids.
#[derive(Debug)]
pub struct MemoryReplyStore {
    /// All reply records in insertion order, deleted ones included.
    replies: Vec<Reply>,
    /// Id-to-position map; positions are stable.
    index: HashMap<ReplyId, usize>,
    /// Snapshot from the most recent search refresh. Never holds deleted
    /// replies.
    subset: Vec<Reply>,
    /// Next id to hand out. Advances only when a create succeeds.
    next_id: ReplyId,
}

impl Default for MemoryReplyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryReplyStore {
    pub fn new() -> Self {
        Self {
            replies: Vec::new(),
            index: HashMap::new(),
            subset: Vec::new(),
            next_id: 1,
        }
    }

    fn get(&self, id: ReplyId) -> Option<&Reply> {
        self.index.get(&id).map(|&pos| &self.replies[pos])
    }

    /// Lookup for edit paths: deleted replies are treated the same as
    /// missing ones.
    fn get_live_mut(&mut self, id: ReplyId) -> Option<&mut Reply> {
        let pos = *self.index.get(&id)?;
        let reply = &mut self.replies[pos];
        if reply.deleted {
            return None;
        }
        Some(reply)
    }
}

impl ReplyRepo for MemoryReplyStore {
    fn create_reply(&mut self, post_id: PostId, author: &str, body: &str) -> OpResult<Reply> {
        // Post existence is the caller's obligation, typically checked
        // against a PostRepo before calling in.
        let errors = validate::validate_reply(body);
        if !errors.is_empty() {
            return Err(StoreError::Validation(errors));
        }

        let id = self.next_id;
        self.next_id += 1;

        let reply = Reply::new(id, post_id, author.to_string(), body.to_string());
        self.index.insert(id, self.replies.len());
        self.replies.push(reply.clone());
        log::debug!("created reply {} on post {}", id, post_id);
        Ok(reply)
    }

    fn reply_by_id(&self, id: ReplyId) -> Option<Reply> {
        self.get(id).cloned()
    }

    fn all_replies(&self) -> Vec<Reply> {
        self.replies.clone()
    }

    fn subset_replies(&self) -> Vec<Reply> {
        self.subset.clone()
    }

    fn replies_for_post(&self, post_id: PostId) -> Vec<Reply> {
        self.replies
            .iter()
            .filter(|r| !r.deleted && r.post_id == post_id)
            .cloned()
            .collect()
    }

    fn unread_replies_for_post(&self, post_id: PostId, viewer: Option<&str>) -> Vec<Reply> {
        self.replies
            .iter()
            .filter(|r| !r.deleted && r.post_id == post_id && r.is_unread_by(viewer))
            .cloned()
            .collect()
    }

    fn update_reply(&mut self, id: ReplyId, new_body: &str) -> OpResult<Reply> {
        let reply = self.get_live_mut(id).ok_or(StoreError::ReplyNotFound)?;

        let errors = validate::validate_reply(new_body);
        if !errors.is_empty() {
            return Err(StoreError::Validation(errors));
        }

        reply.apply_update(new_body.to_string());
        Ok(reply.clone())
    }

    fn delete_reply(&mut self, id: ReplyId, confirm: bool) -> OpResult<bool> {
        // The confirm gate comes first, even for unknown ids.
        if !confirm {
            return Err(StoreError::DeletionNotConfirmed);
        }

        let reply = self.get_live_mut(id).ok_or(StoreError::ReplyNotFound)?;
        reply.mark_deleted();
        log::debug!("hid reply {}", id);
        Ok(true)
    }

    fn mark_reply_read(&mut self, id: ReplyId, viewer: Option<&str>) -> OpResult<bool> {
        let reply = self.get_live_mut(id).ok_or(StoreError::ReplyNotFound)?;
        if let Some(viewer) = viewer {
            reply.mark_read(viewer);
        }
        Ok(true)
    }

    fn refresh_subset_by_search(&mut self, keyword: &str, post_filter: Option<PostId>) {
        self.subset.clear();

        let kw = keyword.trim().to_lowercase();

        for reply in &self.replies {
            if reply.deleted {
                continue;
            }

            if let Some(post_id) = post_filter {
                if reply.post_id != post_id {
                    continue;
                }
            }

            if kw.is_empty() || reply.body.to_lowercase().contains(&kw) {
                self.subset.push(reply.clone());
            }
        }
    }

    fn count_replies_for_post(&self, post_id: PostId) -> usize {
        self.replies
            .iter()
            .filter(|r| !r.deleted && r.post_id == post_id)
            .count()
    }

    fn count_unread_replies_for_post(&self, post_id: PostId, viewer: Option<&str>) -> usize {
        self.replies
            .iter()
            .filter(|r| !r.deleted && r.post_id == post_id && r.is_unread_by(viewer))
            .count()
    }
}
