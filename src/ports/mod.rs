//! Ports - the seams between the application layer and infrastructure.
//!
//! - `QuestionRepository` - persistence of the deck
//! - `EventPublisher` / `EventSubscriber` - change notifications

mod event_publisher;
mod event_subscriber;
mod question_repository;

pub use event_publisher::EventPublisher;
pub use event_subscriber::{EventBus, EventHandler, EventSubscriber};
pub use question_repository::{duplicate_question, question_not_found, QuestionRepository};
