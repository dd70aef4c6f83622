//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, ratings, timestamps, errors, events)
//! - `question` - Question entity, roles, visibility rule, seed catalogue
//! - `listing` - Pure filter/sort utility for the "all questions" view
//! - `rotation` - Per-role circular cursor over visible questions

pub mod foundation;
pub mod listing;
pub mod question;
pub mod rotation;
