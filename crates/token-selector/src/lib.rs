//! Token directory.
//!
//! A curated list of priority tokens with known futures markets, plus
//! free-text search against the token catalog.

pub mod priority;
pub mod selector;

pub use priority::{priority_tokens, PRIORITY_TOKENS};
pub use selector::TokenDirectory;
