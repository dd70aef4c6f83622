//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - In-memory repository for tests and throwaway runs
//! - `sqlite` - Embedded SQLite persistence
//! - `events` - In-process event bus and change feed
//! - `http` - axum routes for the UI layer

pub mod events;
pub mod http;
pub mod memory;
pub mod sqlite;

pub use events::{ChangeFeed, ChangeLogger, EventDispatcher, InMemoryEventBus};
pub use memory::InMemoryQuestionRepository;
pub use sqlite::SqliteQuestionRepository;
