//! # Domain Models
//!
//! The core entities of Corkboard: posts and the replies attached to them.
//! Identifiers are plain integers, assigned once by the owning store,
//! monotonically increasing and never reused.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Identifier for a post, issued by the post store.
pub type PostId = u64;

/// Identifier for a reply. Replies share one global sequence, independent
/// of the post sequence.
pub type ReplyId = u64;

/// Thread label applied when the caller does not supply one.
pub const DEFAULT_THREAD: &str = "General";

/// A student-created post with a title and body.
///
/// Posts belong to a thread, which here is just a string label (defaults to
/// "General"). Deleting a post does not delete its replies: the post stays
/// enumerable with its content replaced by a fixed tombstone message, so the
/// replies keep their context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    /// Thread label, already defaulted by the store if the caller gave none.
    pub thread: String,
    /// Opaque author identifier supplied by an external identity layer.
    pub author: String,
    pub title: String,
    pub body: String,
    /// When true the post is tombstoned: still present, content replaced.
    pub deleted: bool,
    /// Viewers who have read this post. Absence means unread.
    pub read_by: HashSet<String>,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Constructs a post. Intended to be called by the post store with
    /// already-validated content and an already-resolved thread label.
    pub fn new(id: PostId, thread: String, author: String, title: String, body: String) -> Self {
        Self {
            id,
            thread,
            author,
            title,
            body,
            deleted: false,
            read_by: HashSet::new(),
            created_at: Utc::now(),
        }
    }

    /// Records that a viewer has read this post. Idempotent.
    pub fn mark_read(&mut self, viewer: &str) {
        self.read_by.insert(viewer.to_string());
    }

    /// True if the given viewer has not read this post. An absent viewer
    /// sees everything as unread.
    pub fn is_unread_by(&self, viewer: Option<&str>) -> bool {
        match viewer {
            Some(v) => !self.read_by.contains(v),
            None => true,
        }
    }

    /// Replaces title and body. The store enforces that tombstoned posts
    /// never reach this method.
    pub fn apply_update(&mut self, new_title: String, new_body: String) {
        self.title = new_title;
        self.body = new_body;
    }

    /// Tombstones the post: both title and body become the deletion notice
    /// and no further content edits are accepted by the store.
    pub fn tombstone(&mut self, message: &str) {
        self.deleted = true;
        self.title = message.to_string();
        self.body = message.to_string();
    }
}

/// A reply to a specific post.
///
/// Replies track per-viewer read state like posts do, but their deletion
/// semantics differ: a deleted reply is excluded from every listing, count,
/// and search result rather than shown with a tombstone. The record itself
/// is retained in the store, flag set, for auditing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub id: ReplyId,
    /// The post this reply belongs to. Not validated against the post
    /// store; cross-entity consistency is the caller's responsibility.
    pub post_id: PostId,
    pub author: String,
    pub body: String,
    /// When true the reply is hidden from all listings.
    pub deleted: bool,
    pub read_by: HashSet<String>,
    pub created_at: DateTime<Utc>,
}

impl Reply {
    /// Constructs a reply. Intended to be called by the reply store with an
    /// already-validated body.
    pub fn new(id: ReplyId, post_id: PostId, author: String, body: String) -> Self {
        Self {
            id,
            post_id,
            author,
            body,
            deleted: false,
            read_by: HashSet::new(),
            created_at: Utc::now(),
        }
    }

    pub fn mark_read(&mut self, viewer: &str) {
        self.read_by.insert(viewer.to_string());
    }

    pub fn is_unread_by(&self, viewer: Option<&str>) -> bool {
        match viewer {
            Some(v) => !self.read_by.contains(v),
            None => true,
        }
    }

    /// Replaces the body. The store enforces validation and rejects edits
    /// to deleted replies before calling this.
    pub fn apply_update(&mut self, new_body: String) {
        self.body = new_body;
    }

    /// Flags the reply as deleted. The store filters flagged replies out of
    /// every result set; the record stays behind for auditing.
    pub fn mark_deleted(&mut self) {
        self.deleted = true;
    }
}
