//! Event bus adapters.
//!
//! - `EventDispatcher` - In-process fan-out to subscribed handlers
//! - `InMemoryEventBus` - Dispatcher that also records history, for tests
//! - `ChangeFeed` - Broadcast channel behind the streaming changes endpoint
//! - `ChangeLogger` - Structured log line per change

mod change_feed;
mod dispatcher;
mod in_memory;

pub use change_feed::{ChangeFeed, ChangeLogger, DEFAULT_FEED_CAPACITY};
pub use dispatcher::EventDispatcher;
pub use in_memory::InMemoryEventBus;
