//! # Store Ports
//!
//! The repository contracts implemented by storage plugins. The console (or
//! any future GUI controller) programs against these traits and receives
//! concrete store instances from the composition point in the binary.
//!
//! All operations are synchronous, in-memory computations with no suspension
//! points. Every returned entity is a value copy, never a view into store
//! internals, so callers cannot observe later mutations through aliasing.

use crate::error::OpResult;
use crate::models::{Post, PostId, Reply, ReplyId};

/// Storage contract for posts.
///
/// Posts are tombstoned on delete: they stay enumerable with their content
/// replaced, so attached replies keep their context.
pub trait PostRepo {
    /// Creates a post with validation. A `None` or blank thread label
    /// defaults to "General"; a non-blank one is stored trimmed. Ids are
    /// consumed only on success.
    fn create_post(
        &mut self,
        author: &str,
        thread: Option<&str>,
        title: &str,
        body: &str,
    ) -> OpResult<Post>;

    /// Looks up a post by id. Tombstoned posts are still returned.
    fn post_by_id(&self, id: PostId) -> Option<Post>;

    /// All posts by the given author, in insertion order.
    fn posts_by_author(&self, author: &str) -> Vec<Post>;

    /// Every post in insertion order, tombstoned ones included.
    fn all_posts(&self) -> Vec<Post>;

    /// The subset captured by the most recent search refresh.
    fn subset_posts(&self) -> Vec<Post>;

    /// Replaces title and body with validation. Fails for unknown ids and
    /// for tombstoned posts.
    fn update_post(&mut self, id: PostId, new_title: &str, new_body: &str) -> OpResult<Post>;

    /// Tombstones a post. `confirm` must be true, for any id including
    /// unknown ones. Deleting an already-deleted post succeeds again.
    fn delete_post(&mut self, id: PostId, confirm: bool) -> OpResult<bool>;

    /// Adds the viewer to the post's read set. Idempotent; an absent viewer
    /// is a no-op that still succeeds.
    fn mark_post_read(&mut self, id: PostId, viewer: Option<&str>) -> OpResult<bool>;

    /// Recomputes the search subset from scratch. The keyword matches
    /// case-insensitively against title or body (blank matches everything);
    /// the thread filter is an exact, trimmed, case-sensitive label match.
    /// Tombstoned posts remain eligible via their tombstone text.
    fn refresh_subset_by_search(&mut self, keyword: &str, thread_filter: Option<&str>);

    /// How many posts the viewer has not read. An absent viewer counts
    /// every post as unread.
    fn count_unread_posts(&self, viewer: Option<&str>) -> usize;
}

/// Storage contract for replies.
///
/// Deletes are hard-hides: a deleted reply drops out of every listing,
/// count, and search result. The record is retained internally with its
/// flag set, and [`ReplyRepo::reply_by_id`] is the one window onto it.
pub trait ReplyRepo {
    /// Creates a reply with body validation. The post id is not checked
    /// against any post store; that is the caller's obligation.
    fn create_reply(&mut self, post_id: PostId, author: &str, body: &str) -> OpResult<Reply>;

    /// Looks up a reply by id, deleted ones included.
    fn reply_by_id(&self, id: ReplyId) -> Option<Reply>;

    /// Every reply record in insertion order, deleted ones included.
    fn all_replies(&self) -> Vec<Reply>;

    /// The subset captured by the most recent search refresh.
    fn subset_replies(&self) -> Vec<Reply>;

    /// Non-deleted replies for the given post, in insertion order.
    fn replies_for_post(&self, post_id: PostId) -> Vec<Reply>;

    /// Non-deleted replies for the post that the viewer has not read.
    fn unread_replies_for_post(&self, post_id: PostId, viewer: Option<&str>) -> Vec<Reply>;

    /// Replaces the body with validation. A deleted reply is treated the
    /// same as a missing one.
    fn update_reply(&mut self, id: ReplyId, new_body: &str) -> OpResult<Reply>;

    /// Hides a reply. `confirm` must be true, for any id including unknown
    /// ones. A deleted reply is treated the same as a missing one.
    fn delete_reply(&mut self, id: ReplyId, confirm: bool) -> OpResult<bool>;

    /// Adds the viewer to the reply's read set. Fails for unknown or
    /// deleted replies; an absent viewer is a no-op that still succeeds.
    fn mark_reply_read(&mut self, id: ReplyId, viewer: Option<&str>) -> OpResult<bool>;

    /// Recomputes the search subset from scratch. The keyword matches
    /// case-insensitively against the body only; the post filter is an
    /// exact id match. Deleted replies never appear.
    fn refresh_subset_by_search(&mut self, keyword: &str, post_filter: Option<PostId>);

    /// Number of non-deleted replies for the post.
    fn count_replies_for_post(&self, post_id: PostId) -> usize;

    /// Number of non-deleted replies for the post the viewer has not read.
    fn count_unread_replies_for_post(&self, post_id: PostId, viewer: Option<&str>) -> usize;
}
