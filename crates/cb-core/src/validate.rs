//! # Input Validation
//!
//! Validation rules and error messages for post and reply content. All rules
//! live here so every caller (console today, any GUI controller tomorrow)
//! reports identical messages. The functions are pure and hold no state.
//!
//! Rules:
//! - Post title: not blank; at most 150 characters.
//! - Post/reply body: not blank; at most 5000 characters.
//! - All printable characters including line breaks are allowed, so only
//!   blank/length checks apply.

/// Maximum title length in characters.
pub const TITLE_MAX: usize = 150;

/// Maximum body length in characters, for posts and replies alike.
pub const BODY_MAX: usize = 5000;

/// Placeholder shown for both title and body after a post is deleted.
pub const DELETED_MESSAGE: &str = "This post was deleted.";

// Error messages are part of the observable contract; treat them as stable.
pub const ERR_TITLE_EMPTY: &str = "The title cannot be empty.";
pub const ERR_TITLE_TOO_LONG: &str =
    "The title is too long. It must be 150 characters or less.";
pub const ERR_BODY_EMPTY: &str = "The body cannot be empty.";
pub const ERR_BODY_TOO_LONG: &str =
    "The body is too long. It must be 5000 characters or less.";

/// Validates a post title. Returns the violations in order; empty if valid.
///
/// A blank title short-circuits: the length check is not performed, so the
/// result never contains more than one title message.
pub fn validate_title(title: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if title.trim().is_empty() {
        errors.push(ERR_TITLE_EMPTY.to_string());
        return errors;
    }

    if title.chars().count() > TITLE_MAX {
        errors.push(ERR_TITLE_TOO_LONG.to_string());
    }

    errors
}

/// Validates a post or reply body. Returns the violations in order; empty
/// if valid. Blank short-circuits the length check.
pub fn validate_body(body: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if body.trim().is_empty() {
        errors.push(ERR_BODY_EMPTY.to_string());
        return errors;
    }

    if body.chars().count() > BODY_MAX {
        errors.push(ERR_BODY_TOO_LONG.to_string());
    }

    errors
}

/// Validates an entire post: title violations first, then body violations.
pub fn validate_post(title: &str, body: &str) -> Vec<String> {
    let mut errors = validate_title(title);
    errors.extend(validate_body(body));
    errors
}

/// Validates a reply, which has no title concept.
pub fn validate_reply(body: &str) -> Vec<String> {
    validate_body(body)
}
