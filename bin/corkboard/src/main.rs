//! # Corkboard Console
//!
//! A standalone console exerciser for the discussion-board data layer. It is
//! the composition point that owns both stores and walks the full surface:
//! CRUD for posts and replies, the validation messages, thread defaulting,
//! refresh-based search subsets, read/unread tracking, and the two deletion
//! behaviors (post tombstoning vs. reply hiding). Any future driver (CLI,
//! GUI controller) replaces this file and keeps the stores.

use cb_core::error::OpResult;
use cb_core::models::{Post, Reply};
use cb_core::traits::{PostRepo, ReplyRepo};
use cb_store_memory::{MemoryPostStore, MemoryReplyStore};

/// Prints an operation outcome: the described value on success, the full
/// ordered message list on failure.
fn print_result<T>(label: &str, result: &OpResult<T>, describe: impl Fn(&T) -> String) {
    match result {
        Ok(value) => println!("{label}: OK -> {}", describe(value)),
        Err(err) => {
            println!("{label}: FAILED");
            for message in err.messages() {
                println!("    - {message}");
            }
        }
    }
}

fn describe_post(p: &Post) -> String {
    format!(
        "Post{{id={}, thread='{}', author='{}', deleted={}, title='{}'}}",
        p.id, p.thread, p.author, p.deleted, p.title
    )
}

fn describe_reply(r: &Reply) -> String {
    format!(
        "Reply{{id={}, post_id={}, author='{}', body='{}'}}",
        r.id, r.post_id, r.author, r.body
    )
}

fn describe_flag(flag: &bool) -> String {
    flag.to_string()
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    println!("*** Corkboard discussion console ***\n");

    // The one composition point: stores are constructed here and handed to
    // whatever needs them, never reached through globals.
    let mut posts = MemoryPostStore::new();
    let mut replies = MemoryReplyStore::new();

    let amy = "amycaballero";
    let bob = "bob92";

    println!("1) Create posts:\n");

    // No thread selected: defaults to "General".
    let p1 = posts.create_post(
        amy,
        None,
        "Team Project Meeting",
        "Can we meet Friday at 4pm to split up the user stories?",
    );
    print_result("Create p1", &p1, describe_post);

    let p2 = posts.create_post(
        bob,
        Some("Homework"),
        "Question about input validation",
        "Do we validate on every input field?",
    );
    print_result("Create p2", &p2, describe_post);

    // Blank title: shows the exact validation message.
    let bad = posts.create_post(amy, Some("General"), "   ", "Body is fine but title is blank.");
    print_result("Create bad post", &bad, describe_post);

    // Blank title and blank body together: two messages, title first.
    let worse = posts.create_post(amy, None, "", "");
    print_result("Create worse post", &worse, describe_post);

    let p1 = p1.expect("p1 was valid");
    let p2 = p2.expect("p2 was valid");

    println!("\n2) Listings and unread counts:\n");
    for post in posts.all_posts() {
        println!("  {}", describe_post(&post));
    }
    println!("Unread posts for {amy}: {}", posts.count_unread_posts(Some(amy)));
    print_result("Mark p1 read", &posts.mark_post_read(p1.id, Some(amy)), describe_flag);
    println!(
        "Unread posts for {amy} after reading p1: {}",
        posts.count_unread_posts(Some(amy))
    );

    println!("\n3) Update posts:\n");
    let updated = posts.update_post(p1.id, "Team Project Meeting (moved)", "Now Friday at 5pm.");
    print_result("Update p1", &updated, describe_post);
    print_result("Update unknown post", &posts.update_post(999, "T", "B"), describe_post);

    println!("\n4) Replies:\n");
    let r1 = replies.create_reply(p1.id, bob, "5pm works for me.");
    print_result("Create r1", &r1, describe_reply);
    let r2 = replies.create_reply(p1.id, amy, "Great, booking a room.");
    print_result("Create r2", &r2, describe_reply);
    print_result("Create blank reply", &replies.create_reply(p1.id, bob, "  "), describe_reply);

    let r1 = r1.expect("r1 was valid");
    let r2 = r2.expect("r2 was valid");
    println!("Replies on p1: {}", replies.count_replies_for_post(p1.id));
    println!(
        "Unread replies on p1 for {bob}: {}",
        replies.count_unread_replies_for_post(p1.id, Some(bob))
    );
    print_result("Mark r2 read", &replies.mark_reply_read(r2.id, Some(bob)), describe_flag);
    println!(
        "Unread replies on p1 for {bob} after reading r2: {}",
        replies.count_unread_replies_for_post(p1.id, Some(bob))
    );

    println!("\n5) Search subsets (refresh-based):\n");
    posts.refresh_subset_by_search("validation", None);
    println!("Posts matching 'validation':");
    for post in posts.subset_posts() {
        println!("  {}", describe_post(&post));
    }
    posts.refresh_subset_by_search("", Some("Homework"));
    println!("Posts in thread 'Homework':");
    for post in posts.subset_posts() {
        println!("  {}", describe_post(&post));
    }
    replies.refresh_subset_by_search("works", Some(p1.id));
    println!("Replies on p1 matching 'works':");
    for reply in replies.subset_replies() {
        println!("  {}", describe_reply(&reply));
    }

    println!("\n6) Deletion semantics:\n");
    // Unconfirmed deletions always fail and change nothing.
    print_result("Delete p2 unconfirmed", &posts.delete_post(p2.id, false), describe_flag);
    print_result("Delete r1 unconfirmed", &replies.delete_reply(r1.id, false), describe_flag);

    // A deleted post stays visible with the tombstone text; replies remain.
    print_result("Delete p1 confirmed", &posts.delete_post(p1.id, true), describe_flag);
    if let Some(tombstoned) = posts.post_by_id(p1.id) {
        println!("p1 after deletion: {}", describe_post(&tombstoned));
    }
    println!(
        "Replies still attached to p1: {}",
        replies.count_replies_for_post(p1.id)
    );
    print_result(
        "Edit deleted p1",
        &posts.update_post(p1.id, "New title", "New body"),
        describe_post,
    );

    // A deleted reply disappears from listings instead.
    print_result("Delete r1 confirmed", &replies.delete_reply(r1.id, true), describe_flag);
    println!(
        "Replies on p1 after deleting r1: {}",
        replies.count_replies_for_post(p1.id)
    );

    println!("\n7) Final state dump:\n");
    println!("{}", serde_json::to_string_pretty(&posts.all_posts())?);
    println!("{}", serde_json::to_string_pretty(&replies.all_replies())?);

    log::info!("console run complete");
    Ok(())
}
