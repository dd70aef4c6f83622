//! Starter Deck - conversation starters for mentors and learners.
//!
//! A shared deck of questions that both roles browse, rate, add, edit and
//! delete. Ratings decide whether a question stays in its role's rotation;
//! the list view filters and sorts the whole deck.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
