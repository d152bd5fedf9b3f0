//! Behavioral tests for the post store: creation, validation contracts,
//! identity assignment, read tracking, and tombstone deletion.

use cb_core::error::StoreError;
use cb_core::models::DEFAULT_THREAD;
use cb_core::traits::PostRepo;
use cb_core::validate::{
    DELETED_MESSAGE, ERR_BODY_EMPTY, ERR_TITLE_EMPTY, ERR_TITLE_TOO_LONG, TITLE_MAX,
};
use cb_store_memory::MemoryPostStore;

const AMY: &str = "amycaballero";
const BOB: &str = "bob92";

#[test]
fn create_assigns_strictly_increasing_ids() {
    let mut store = MemoryPostStore::new();
    let mut last_id = 0;
    for n in 0..5 {
        let post = store
            .create_post(AMY, None, &format!("Post {n}"), "Some body text.")
            .expect("valid post");
        assert!(post.id > last_id, "ids must strictly increase");
        last_id = post.id;
    }
}

#[test]
fn blank_title_reports_only_the_empty_message() {
    let mut store = MemoryPostStore::new();

    // Even a blank longer than the length limit reports only "empty":
    // the blank check short-circuits the length check.
    let long_blank = " ".repeat(TITLE_MAX + 50);
    let err = store
        .create_post(AMY, None, &long_blank, "A perfectly fine body.")
        .expect_err("blank title must fail");
    assert_eq!(err.messages(), vec![ERR_TITLE_EMPTY.to_string()]);
}

#[test]
fn simultaneous_violations_are_reported_together_title_first() {
    let mut store = MemoryPostStore::new();
    let err = store
        .create_post(AMY, None, "", "   ")
        .expect_err("both blank must fail");
    assert_eq!(
        err.messages(),
        vec![ERR_TITLE_EMPTY.to_string(), ERR_BODY_EMPTY.to_string()]
    );
}

#[test]
fn failed_create_performs_no_mutation() {
    let mut store = MemoryPostStore::new();
    store.create_post(AMY, None, "First", "Body.").expect("valid");

    let too_long = "t".repeat(TITLE_MAX + 1);
    let err = store
        .create_post(AMY, None, &too_long, "Body.")
        .expect_err("over-long title must fail");
    assert_eq!(err.messages(), vec![ERR_TITLE_TOO_LONG.to_string()]);

    // Collection unchanged and no id consumed by the failure.
    assert_eq!(store.all_posts().len(), 1);
    let next = store.create_post(AMY, None, "Second", "Body.").expect("valid");
    assert_eq!(next.id, 2);
}

#[test]
fn update_round_trips_through_lookup() {
    let mut store = MemoryPostStore::new();
    let post = store
        .create_post(BOB, Some("Homework"), "Original title", "Original body.")
        .expect("valid");

    store
        .update_post(post.id, "New title", "New body.")
        .expect("update succeeds");

    let fetched = store.post_by_id(post.id).expect("post exists");
    assert_eq!(fetched.title, "New title");
    assert_eq!(fetched.body, "New body.");
    assert_eq!(fetched.thread, "Homework");
}

#[test]
fn update_failures_keep_the_stored_content() {
    let mut store = MemoryPostStore::new();
    let post = store
        .create_post(BOB, None, "Original", "Body.")
        .expect("valid");

    assert_eq!(
        store.update_post(post.id, "", "Body."),
        Err(StoreError::Validation(vec![ERR_TITLE_EMPTY.to_string()]))
    );
    assert_eq!(store.post_by_id(post.id).expect("exists").title, "Original");

    assert_eq!(
        store.update_post(999, "Title", "Body."),
        Err(StoreError::PostNotFound)
    );
}

#[test]
fn mark_read_is_idempotent_for_unread_counts() {
    let mut store = MemoryPostStore::new();
    let p1 = store.create_post(AMY, None, "One", "Body.").expect("valid");
    store.create_post(BOB, None, "Two", "Body.").expect("valid");

    assert_eq!(store.count_unread_posts(Some(BOB)), 2);
    store.mark_post_read(p1.id, Some(BOB)).expect("mark read");
    assert_eq!(store.count_unread_posts(Some(BOB)), 1);
    store.mark_post_read(p1.id, Some(BOB)).expect("mark read again");
    assert_eq!(store.count_unread_posts(Some(BOB)), 1);
}

#[test]
fn absent_viewer_counts_everything_and_marking_is_a_noop() {
    let mut store = MemoryPostStore::new();
    let post = store.create_post(AMY, None, "One", "Body.").expect("valid");
    store.mark_post_read(post.id, Some(AMY)).expect("mark read");

    // No viewer: every post counts as unread.
    assert_eq!(store.count_unread_posts(None), 1);

    // Marking with no viewer succeeds without changing any read set.
    assert_eq!(store.mark_post_read(post.id, None), Ok(true));
    assert_eq!(store.post_by_id(post.id).expect("exists").read_by.len(), 1);

    assert_eq!(store.mark_post_read(999, Some(AMY)), Err(StoreError::PostNotFound));
}

#[test]
fn deletion_tombstones_and_blocks_edits() {
    let mut store = MemoryPostStore::new();
    let post = store
        .create_post(AMY, None, "Soon gone", "This will be deleted.")
        .expect("valid");

    assert_eq!(store.delete_post(post.id, true), Ok(true));

    let tombstoned = store.post_by_id(post.id).expect("still enumerable");
    assert!(tombstoned.deleted);
    assert_eq!(tombstoned.title, DELETED_MESSAGE);
    assert_eq!(tombstoned.body, DELETED_MESSAGE);

    assert_eq!(
        store.update_post(post.id, "Resurrected", "Nope."),
        Err(StoreError::EditDeletedPost)
    );

    // No already-deleted guard: deleting again still succeeds.
    assert_eq!(store.delete_post(post.id, true), Ok(true));
}

#[test]
fn unconfirmed_deletion_always_fails_with_no_state_change() {
    let mut store = MemoryPostStore::new();
    let post = store.create_post(AMY, None, "Keep me", "Body.").expect("valid");

    assert_eq!(store.delete_post(post.id, false), Err(StoreError::DeletionNotConfirmed));
    // Unknown ids hit the confirm gate first too.
    assert_eq!(store.delete_post(999, false), Err(StoreError::DeletionNotConfirmed));

    let kept = store.post_by_id(post.id).expect("exists");
    assert!(!kept.deleted);
    assert_eq!(kept.title, "Keep me");
}

#[test]
fn thread_defaults_to_general_when_absent_or_blank() {
    let mut store = MemoryPostStore::new();
    let none = store.create_post(AMY, None, "T", "B").expect("valid");
    let blank = store.create_post(AMY, Some("   "), "T", "B").expect("valid");
    assert_eq!(none.thread, DEFAULT_THREAD);
    assert_eq!(blank.thread, DEFAULT_THREAD);
}

#[test]
fn author_listing_preserves_insertion_order() {
    let mut store = MemoryPostStore::new();
    store.create_post(AMY, None, "First", "B").expect("valid");
    store.create_post(BOB, None, "Interleaved", "B").expect("valid");
    store.create_post(AMY, None, "Second", "B").expect("valid");

    let titles: Vec<_> = store
        .posts_by_author(AMY)
        .into_iter()
        .map(|p| p.title)
        .collect();
    assert_eq!(titles, vec!["First".to_string(), "Second".to_string()]);
    assert!(store.posts_by_author("nobody").is_empty());
}

#[test]
fn tombstoned_posts_remain_in_full_listings() {
    let mut store = MemoryPostStore::new();
    let a = store.create_post(AMY, None, "A", "B").expect("valid");
    store.create_post(BOB, None, "B", "B").expect("valid");
    store.delete_post(a.id, true).expect("delete");

    let all = store.all_posts();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, a.id);
    assert!(all[0].deleted);
}
