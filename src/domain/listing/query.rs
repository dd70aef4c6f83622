//! Filter/sort query over the full question collection.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::question::{Question, Role, Visibility};

/// Role selector for the list view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleFilter {
    #[default]
    All,
    Mentor,
    Learner,
}

impl RoleFilter {
    pub fn matches(&self, role: Role) -> bool {
        match self {
            RoleFilter::All => true,
            RoleFilter::Mentor => role == Role::Mentor,
            RoleFilter::Learner => role == Role::Learner,
        }
    }
}

impl From<Role> for RoleFilter {
    fn from(role: Role) -> Self {
        match role {
            Role::Mentor => RoleFilter::Mentor,
            Role::Learner => RoleFilter::Learner,
        }
    }
}

/// Visibility selector for the list view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisibilityFilter {
    #[default]
    All,
    Visible,
    Excluded,
}

impl VisibilityFilter {
    pub fn matches(&self, visibility: Visibility) -> bool {
        match self {
            VisibilityFilter::All => true,
            VisibilityFilter::Visible => visibility == Visibility::Visible,
            VisibilityFilter::Excluded => visibility == Visibility::Excluded,
        }
    }
}

/// Sort key for the list view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    DateDescending,
    DateAscending,
    RatingDescending,
    RatingAscending,
}

impl SortOrder {
    fn compare(&self, a: &Question, b: &Question) -> Ordering {
        match self {
            SortOrder::DateDescending => b.date_added().cmp(a.date_added()),
            SortOrder::DateAscending => a.date_added().cmp(b.date_added()),
            SortOrder::RatingDescending => b.average_rating().total_cmp(&a.average_rating()),
            SortOrder::RatingAscending => a.average_rating().total_cmp(&b.average_rating()),
        }
    }
}

/// The three independent selectors of the list view.
///
/// Filtering is the AND of the role and visibility predicates. Sorting is
/// stable, so ties keep the order of the input collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionQuery {
    #[serde(default)]
    pub role: RoleFilter,
    #[serde(default)]
    pub visibility: VisibilityFilter,
    #[serde(default)]
    pub sort: SortOrder,
}

impl QuestionQuery {
    pub fn new(role: RoleFilter, visibility: VisibilityFilter, sort: SortOrder) -> Self {
        Self {
            role,
            visibility,
            sort,
        }
    }

    /// Whether a single question passes both predicates.
    pub fn matches(&self, question: &Question) -> bool {
        self.role.matches(question.role()) && self.visibility.matches(question.visibility())
    }

    /// Produces the filtered, sorted view of `questions`.
    pub fn apply<'a>(&self, questions: impl IntoIterator<Item = &'a Question>) -> Vec<&'a Question> {
        let mut selected: Vec<&Question> =
            questions.into_iter().filter(|q| self.matches(q)).collect();
        selected.sort_by(|a, b| self.sort.compare(a, b));
        selected
    }

    /// Owned variant of [`QuestionQuery::apply`].
    pub fn apply_owned(&self, questions: Vec<Question>) -> Vec<Question> {
        let mut selected: Vec<Question> =
            questions.into_iter().filter(|q| self.matches(q)).collect();
        selected.sort_by(|a, b| self.sort.compare(a, b));
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{QuestionId, Rating, Timestamp};

    fn question(id: i64, role: Role, ratings: &[f64], offset_secs: i64) -> Question {
        Question::reconstitute(
            QuestionId::new(id),
            role,
            format!("question {}", id),
            ratings.iter().map(|r| Rating::new(*r).unwrap()).collect(),
            Timestamp::from_datetime(
                chrono::DateTime::parse_from_rfc3339("2025-04-14T09:00:00Z")
                    .unwrap()
                    .with_timezone(&chrono::Utc),
            )
            .plus_secs(offset_secs),
            false,
        )
    }

    fn ids(questions: &[&Question]) -> Vec<i64> {
        questions.iter().map(|q| q.id().value()).collect()
    }

    fn deck() -> Vec<Question> {
        vec![
            question(1000, Role::Mentor, &[3.0], 0),
            question(1001, Role::Mentor, &[3.0, 1.0, 1.0, 1.0], 10),
            question(2000, Role::Learner, &[5.0], 20),
            question(2001, Role::Learner, &[], 30),
            question(1002, Role::Mentor, &[2.0], 40),
        ]
    }

    #[test]
    fn default_query_is_all_all_date_descending() {
        let q = QuestionQuery::default();
        assert_eq!(q.role, RoleFilter::All);
        assert_eq!(q.visibility, VisibilityFilter::All);
        assert_eq!(q.sort, SortOrder::DateDescending);
    }

    #[test]
    fn default_query_returns_everything_newest_first() {
        let deck = deck();
        let result = QuestionQuery::default().apply(&deck);
        assert_eq!(ids(&result), vec![1002, 2001, 2000, 1001, 1000]);
    }

    #[test]
    fn mentor_visible_filters_role_and_threshold() {
        let deck = deck();
        let query = QuestionQuery::new(
            RoleFilter::Mentor,
            VisibilityFilter::Visible,
            SortOrder::DateAscending,
        );
        assert_eq!(ids(&query.apply(&deck)), vec![1000, 1002]);
    }

    #[test]
    fn excluded_includes_unrated_questions() {
        let deck = deck();
        let query = QuestionQuery::new(
            RoleFilter::All,
            VisibilityFilter::Excluded,
            SortOrder::DateAscending,
        );
        assert_eq!(ids(&query.apply(&deck)), vec![1001, 2001]);
    }

    #[test]
    fn rating_descending_orders_by_average() {
        let deck = deck();
        let query =
            QuestionQuery::new(RoleFilter::All, VisibilityFilter::All, SortOrder::RatingDescending);
        assert_eq!(ids(&query.apply(&deck)), vec![2000, 1000, 1002, 1001, 2001]);
    }

    #[test]
    fn rating_ties_keep_collection_order_in_both_directions() {
        let deck = vec![
            question(1, Role::Mentor, &[3.0], 0),
            question(2, Role::Mentor, &[3.0], 0),
            question(3, Role::Mentor, &[3.0], 0),
        ];
        for sort in [
            SortOrder::RatingAscending,
            SortOrder::RatingDescending,
            SortOrder::DateAscending,
            SortOrder::DateDescending,
        ] {
            let query = QuestionQuery::new(RoleFilter::All, VisibilityFilter::All, sort);
            assert_eq!(ids(&query.apply(&deck)), vec![1, 2, 3]);
        }
    }

    #[test]
    fn apply_owned_matches_borrowed_apply() {
        let deck = deck();
        let query =
            QuestionQuery::new(RoleFilter::Learner, VisibilityFilter::All, SortOrder::RatingAscending);
        let borrowed = ids(&query.apply(&deck));
        let owned: Vec<i64> = query.apply_owned(deck).iter().map(|q| q.id().value()).collect();
        assert_eq!(borrowed, owned);
        assert_eq!(owned, vec![2001, 2000]);
    }

    #[test]
    fn query_deserializes_from_snake_case() {
        let query: QuestionQuery = serde_json::from_str(
            r#"{"role": "learner", "visibility": "excluded", "sort": "rating_ascending"}"#,
        )
        .unwrap();
        assert_eq!(query.role, RoleFilter::Learner);
        assert_eq!(query.visibility, VisibilityFilter::Excluded);
        assert_eq!(query.sort, SortOrder::RatingAscending);
    }

    #[test]
    fn query_fields_default_when_missing() {
        let query: QuestionQuery = serde_json::from_str(r#"{"sort": "date_ascending"}"#).unwrap();
        assert_eq!(query.role, RoleFilter::All);
        assert_eq!(query.sort, SortOrder::DateAscending);
    }
}
