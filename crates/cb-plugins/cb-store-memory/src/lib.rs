//! # cb-store-memory
//!
//! In-memory implementation of the `cb-core` store ports. One store instance
//! per entity kind; each exclusively owns its collection, its id counter,
//! and its search subset. Designed for a single caller at a time: a
//! multi-caller deployment wraps each store in its own mutex held for the
//! full operation.

mod posts;
mod replies;

pub use posts::MemoryPostStore;
pub use replies::MemoryReplyStore;
