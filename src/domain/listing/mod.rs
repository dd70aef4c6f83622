//! Listing module - the filter/sort utility behind the "all questions" view.
//!
//! Pure and stateless: the view is recomputed from the full collection on
//! every request rather than maintained incrementally.

mod query;

pub use query::{QuestionQuery, RoleFilter, SortOrder, VisibilityFilter};
