//! Shared leaf types for the ortho spellcheck engine.
//!
//! - [`span`] -- word spans and misspelled ranges (UTF-16 offset pairs)
//! - [`character`] -- UTF-16 code-unit classification for word segmentation
//! - [`enums`] -- backend variant identifiers

pub mod character;
pub mod enums;
pub mod span;
