//! Question command and query handlers.

mod add_question;
mod delete_question;
mod edit_question;
mod get_question;
mod list_questions;
mod rate_question;
mod seed_defaults;

pub use add_question::{AddQuestionCommand, AddQuestionHandler, AddQuestionResult};
pub use delete_question::{DeleteQuestionCommand, DeleteQuestionHandler, DeleteQuestionResult};
pub use edit_question::{EditQuestionCommand, EditQuestionHandler, EditQuestionResult};
pub use get_question::{GetQuestionHandler, GetQuestionQuery};
pub use list_questions::{ListQuestionsHandler, ListQuestionsQuery, QuestionList};
pub use rate_question::{RateQuestionCommand, RateQuestionHandler, RateQuestionResult};
pub use seed_defaults::{SeedDefaultsCommand, SeedDefaultsHandler, SeedOutcome, DEFAULT_DECK};
