//! Procedural sentence generation for Knobelbecher.
//!
//! A [`SentenceGenerator`] composes randomly chosen items from eight fixed
//! word-category tables according to a fixed structural template, with
//! probabilistic branching and a recursion depth cap. Tables are validated
//! non-empty at construction, so generation itself cannot fail.

pub mod error;
pub mod generator;
pub mod tables;

pub use error::{ProseError, ProseResult};
pub use generator::SentenceGenerator;
pub use tables::WordTables;
