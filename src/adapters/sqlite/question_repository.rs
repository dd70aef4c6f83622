//! SQLite implementation of QuestionRepository.
//!
//! Writes are staged inside a single open transaction (the unit of work)
//! and made durable by `save()`. Reads go through that transaction while it
//! is open so they observe staged changes, and through the pool otherwise.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, Sqlite, SqlitePool, Transaction};
use tokio::sync::{Mutex, MutexGuard};

use crate::domain::foundation::{DomainError, ErrorCode, QuestionId, Rating, Timestamp};
use crate::domain::question::{Question, Role};
use crate::ports::{duplicate_question, question_not_found, QuestionRepository};

type UnitOfWork = Option<Transaction<'static, Sqlite>>;

const SELECT_COLUMNS: &str =
    "SELECT id, role, content, rating_history, date_added, is_default FROM questions";

/// SQLite implementation of QuestionRepository.
pub struct SqliteQuestionRepository {
    pool: SqlitePool,
    unit_of_work: Mutex<UnitOfWork>,
    write_lock: Mutex<()>,
}

impl SqliteQuestionRepository {
    /// Creates a new SqliteQuestionRepository.
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            unit_of_work: Mutex::new(None),
            write_lock: Mutex::new(()),
        }
    }

    /// Whether staged changes are waiting for `save()`.
    pub async fn has_pending_changes(&self) -> bool {
        self.unit_of_work.lock().await.is_some()
    }

    /// Drops staged changes without committing them.
    pub async fn discard(&self) -> Result<(), DomainError> {
        if let Some(tx) = self.unit_of_work.lock().await.take() {
            tx.rollback()
                .await
                .map_err(|e| database_error("roll back unit of work", e))?;
        }
        Ok(())
    }

    /// Locks the unit of work, opening a transaction if none is pending.
    async fn staged(&self) -> Result<MutexGuard<'_, UnitOfWork>, DomainError> {
        let mut guard = self.unit_of_work.lock().await;
        if guard.is_none() {
            let tx = self
                .pool
                .begin()
                .await
                .map_err(|e| database_error("begin unit of work", e))?;
            *guard = Some(tx);
        }
        Ok(guard)
    }
}

#[async_trait]
impl QuestionRepository for SqliteQuestionRepository {
    async fn list(&self) -> Result<Vec<Question>, DomainError> {
        let sql = format!("{} ORDER BY id ASC", SELECT_COLUMNS);
        let query = sqlx::query(&sql);

        let mut guard = self.unit_of_work.lock().await;
        let rows = match guard.as_mut() {
            Some(tx) => query.fetch_all(&mut **tx).await,
            None => query.fetch_all(&self.pool).await,
        }
        .map_err(|e| database_error("list questions", e))?;

        rows.into_iter().map(row_to_question).collect()
    }

    async fn find_by_id(&self, id: QuestionId) -> Result<Option<Question>, DomainError> {
        let sql = format!("{} WHERE id = ?", SELECT_COLUMNS);
        let query = sqlx::query(&sql).bind(id.value());

        let mut guard = self.unit_of_work.lock().await;
        let row = match guard.as_mut() {
            Some(tx) => query.fetch_optional(&mut **tx).await,
            None => query.fetch_optional(&self.pool).await,
        }
        .map_err(|e| database_error("fetch question", e))?;

        row.map(row_to_question).transpose()
    }

    async fn insert(&self, question: &Question) -> Result<(), DomainError> {
        let history = encode_history(question.rating_history())?;

        let mut guard = self.staged().await?;
        let tx = open_transaction(&mut guard)?;

        sqlx::query(
            r#"
            INSERT INTO questions (
                id, role, content, rating_history, date_added, is_default
            ) VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(question.id().value())
        .bind(question.role().as_str())
        .bind(question.content())
        .bind(history)
        .bind(question.date_added().as_datetime())
        .bind(question.is_default())
        .execute(&mut **tx)
        .await
        .map_err(|e| {
            let taken = e
                .as_database_error()
                .map_or(false, |db| db.is_unique_violation());
            if taken {
                duplicate_question(question.id())
            } else {
                database_error("insert question", e)
            }
        })?;

        Ok(())
    }

    async fn update(&self, question: &Question) -> Result<(), DomainError> {
        let history = encode_history(question.rating_history())?;

        let mut guard = self.staged().await?;
        let tx = open_transaction(&mut guard)?;

        // date_added and is_default never change after creation.
        let result = sqlx::query(
            r#"
            UPDATE questions SET
                role = ?,
                content = ?,
                rating_history = ?
            WHERE id = ?
            "#,
        )
        .bind(question.role().as_str())
        .bind(question.content())
        .bind(history)
        .bind(question.id().value())
        .execute(&mut **tx)
        .await
        .map_err(|e| database_error("update question", e))?;

        if result.rows_affected() == 0 {
            return Err(question_not_found(question.id()));
        }

        Ok(())
    }

    async fn delete(&self, id: QuestionId) -> Result<(), DomainError> {
        let mut guard = self.staged().await?;
        let tx = open_transaction(&mut guard)?;

        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id.value())
            .execute(&mut **tx)
            .await
            .map_err(|e| database_error("delete question", e))?;

        if result.rows_affected() == 0 {
            return Err(question_not_found(id));
        }

        Ok(())
    }

    /// Commits the unit of work. A failed commit rolls the staged changes back.
    async fn save(&self) -> Result<(), DomainError> {
        let pending = self.unit_of_work.lock().await.take();
        if let Some(tx) = pending {
            tx.commit()
                .await
                .map_err(|e| database_error("commit unit of work", e))?;
        }
        Ok(())
    }

    fn write_lock(&self) -> &Mutex<()> {
        &self.write_lock
    }

    async fn next_id(&self) -> Result<QuestionId, DomainError> {
        let query = sqlx::query("SELECT MAX(id) AS max_id FROM questions");

        let mut guard = self.unit_of_work.lock().await;
        let row = match guard.as_mut() {
            Some(tx) => query.fetch_one(&mut **tx).await,
            None => query.fetch_one(&self.pool).await,
        }
        .map_err(|e| database_error("read highest id", e))?;

        let max_id: Option<i64> = row
            .try_get("max_id")
            .map_err(|e| database_error("decode highest id", e))?;

        Ok(QuestionId::next_after(&max_id.map(QuestionId::new)))
    }

    async fn is_empty(&self) -> Result<bool, DomainError> {
        let query = sqlx::query("SELECT COUNT(*) AS total FROM questions");

        let mut guard = self.unit_of_work.lock().await;
        let row = match guard.as_mut() {
            Some(tx) => query.fetch_one(&mut **tx).await,
            None => query.fetch_one(&self.pool).await,
        }
        .map_err(|e| database_error("count questions", e))?;

        let total: i64 = row
            .try_get("total")
            .map_err(|e| database_error("decode question count", e))?;

        Ok(total == 0)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════════

fn open_transaction<'g>(
    guard: &'g mut MutexGuard<'_, UnitOfWork>,
) -> Result<&'g mut Transaction<'static, Sqlite>, DomainError> {
    guard
        .as_mut()
        .ok_or_else(|| DomainError::database("Unit of work is not open"))
}

fn database_error(action: &str, e: impl std::fmt::Display) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("Failed to {}: {}", action, e))
}

fn encode_history(history: &[Rating]) -> Result<String, DomainError> {
    serde_json::to_string(history).map_err(|e| database_error("encode rating history", e))
}

fn row_to_question(row: SqliteRow) -> Result<Question, DomainError> {
    let id: i64 = row
        .try_get("id")
        .map_err(|e| database_error("decode id", e))?;
    let role: String = row
        .try_get("role")
        .map_err(|e| database_error("decode role", e))?;
    let content: String = row
        .try_get("content")
        .map_err(|e| database_error("decode content", e))?;
    let history: String = row
        .try_get("rating_history")
        .map_err(|e| database_error("decode rating history", e))?;
    let date_added: DateTime<Utc> = row
        .try_get("date_added")
        .map_err(|e| database_error("decode date added", e))?;
    let is_default: bool = row
        .try_get("is_default")
        .map_err(|e| database_error("decode default flag", e))?;

    let role: Role = role.parse()?;
    let rating_history: Vec<Rating> = serde_json::from_str(&history)
        .map_err(|e| database_error("decode rating history", e))?;

    Ok(Question::reconstitute(
        QuestionId::new(id),
        role,
        content,
        rating_history,
        Timestamp::from_datetime(date_added),
        is_default,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn repo() -> SqliteQuestionRepository {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        crate::adapters::sqlite::migrate(&pool).await.unwrap();
        SqliteQuestionRepository::new(pool)
    }

    fn question(id: i64, role: Role, ratings: &[f64]) -> Question {
        Question::reconstitute(
            QuestionId::new(id),
            role,
            format!("question {}", id),
            ratings.iter().map(|r| Rating::new(*r).unwrap()).collect(),
            Timestamp::now(),
            false,
        )
    }

    #[tokio::test]
    async fn insert_then_find_round_trips_fields() {
        let repo = repo().await;
        let original = question(1000, Role::Mentor, &[3.0, 4.5]);

        repo.insert(&original).await.unwrap();
        let found = repo.find_by_id(QuestionId::new(1000)).await.unwrap().unwrap();

        assert_eq!(found.role(), Role::Mentor);
        assert_eq!(found.content(), "question 1000");
        assert_eq!(found.rating_history().len(), 2);
        assert_eq!(found.average_rating(), 3.75);
        assert!(!found.is_default());
    }

    #[tokio::test]
    async fn staged_changes_are_visible_before_save() {
        let repo = repo().await;
        repo.insert(&question(1000, Role::Learner, &[])).await.unwrap();

        assert!(repo.has_pending_changes().await);
        assert_eq!(repo.list().await.unwrap().len(), 1);

        repo.save().await.unwrap();
        assert!(!repo.has_pending_changes().await);
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn discard_rolls_back_staged_changes() {
        let repo = repo().await;
        repo.insert(&question(1000, Role::Learner, &[])).await.unwrap();

        repo.discard().await.unwrap();

        assert!(repo.is_empty().await.unwrap());
    }

    #[tokio::test]
    async fn list_orders_by_id() {
        let repo = repo().await;
        repo.insert(&question(2000, Role::Learner, &[])).await.unwrap();
        repo.insert(&question(1000, Role::Mentor, &[])).await.unwrap();
        repo.save().await.unwrap();

        let ids: Vec<i64> = repo.list().await.unwrap().iter().map(|q| q.id().value()).collect();
        assert_eq!(ids, vec![1000, 2000]);
    }

    #[tokio::test]
    async fn duplicate_insert_is_rejected() {
        let repo = repo().await;
        repo.insert(&question(1000, Role::Mentor, &[])).await.unwrap();

        let err = repo.insert(&question(1000, Role::Mentor, &[])).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateQuestion);
    }

    #[tokio::test]
    async fn update_persists_history_and_content() {
        let repo = repo().await;
        let mut q = question(1000, Role::Mentor, &[3.0]);
        repo.insert(&q).await.unwrap();

        q.submit_rating(Rating::new(1.0).unwrap());
        q.edit_content("What surprised you this week?").unwrap();
        repo.update(&q).await.unwrap();
        repo.save().await.unwrap();

        let found = repo.find_by_id(q.id()).await.unwrap().unwrap();
        assert_eq!(found.content(), "What surprised you this week?");
        assert_eq!(found.rating_history().len(), 2);
    }

    #[tokio::test]
    async fn update_and_delete_missing_are_not_found() {
        let repo = repo().await;

        let err = repo.update(&question(4242, Role::Mentor, &[])).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::QuestionNotFound);

        let err = repo.delete(QuestionId::new(4242)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::QuestionNotFound);
    }

    #[tokio::test]
    async fn next_id_follows_highest_id() {
        let repo = repo().await;
        assert_eq!(repo.next_id().await.unwrap(), QuestionId::new(1000));

        repo.insert(&question(1014, Role::Mentor, &[])).await.unwrap();
        repo.insert(&question(1003, Role::Mentor, &[])).await.unwrap();

        assert_eq!(repo.next_id().await.unwrap(), QuestionId::new(1015));
    }
}
