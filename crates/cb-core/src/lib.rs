//! corkboard/crates/cb-core/src/lib.rs
//!
//! The central domain logic and interface definitions for Corkboard:
//! models, validation rules, error types, and the store ports.

pub mod error;
pub mod models;
pub mod traits;
pub mod validate;

// Re-exporting for easier access in other crates
pub use error::*;
pub use models::*;
pub use traits::*;
