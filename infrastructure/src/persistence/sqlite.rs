//! SQLite poll repository (sqlx).
//!
//! Timestamps are stored as integer microseconds since the Unix epoch so
//! that ordering and cutoff comparisons are plain integer comparisons.
//! Vote increments are a single `UPDATE ... SET votes = votes + 1`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use polls_domain::{
    Choice, ChoiceDraft, ChoiceId, ListingQuery, PollRepository, Question, QuestionDetail,
    QuestionDraft, QuestionId, RepositoryError,
};
use sqlx::FromRow;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use tracing::{debug, info};

const SCHEMA: [&str; 3] = [
    "CREATE TABLE IF NOT EXISTS polls_question (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        question_text TEXT NOT NULL,
        pub_date INTEGER NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS polls_choice (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        question_id INTEGER NOT NULL REFERENCES polls_question (id) ON DELETE CASCADE,
        choice_text TEXT NOT NULL,
        votes INTEGER NOT NULL DEFAULT 0 CHECK (votes >= 0)
    )",
    "CREATE INDEX IF NOT EXISTS polls_choice_question_id ON polls_choice (question_id)",
];

fn storage(err: sqlx::Error) -> RepositoryError {
    RepositoryError::Storage(err.to_string())
}

fn to_micros(at: DateTime<Utc>) -> i64 {
    at.timestamp_micros()
}

fn from_micros(micros: i64) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::from_timestamp_micros(micros)
        .ok_or_else(|| RepositoryError::Storage(format!("pub_date out of range: {micros}")))
}

#[derive(Debug, FromRow)]
struct QuestionRow {
    id: i64,
    question_text: String,
    pub_date: i64,
}

impl TryFrom<QuestionRow> for Question {
    type Error = RepositoryError;

    fn try_from(row: QuestionRow) -> Result<Self, Self::Error> {
        Ok(Question::new(
            QuestionId::new(row.id),
            row.question_text,
            from_micros(row.pub_date)?,
        ))
    }
}

#[derive(Debug, FromRow)]
struct ChoiceRow {
    id: i64,
    question_id: i64,
    choice_text: String,
    votes: i64,
}

impl TryFrom<ChoiceRow> for Choice {
    type Error = RepositoryError;

    fn try_from(row: ChoiceRow) -> Result<Self, Self::Error> {
        let votes = u32::try_from(row.votes).map_err(|_| {
            RepositoryError::Storage(format!("choice {} has invalid vote count {}", row.id, row.votes))
        })?;
        Ok(Choice::new(
            ChoiceId::new(row.id),
            QuestionId::new(row.question_id),
            row.choice_text,
        )
        .with_votes(votes))
    }
}

/// [`PollRepository`] backed by a SQLite connection pool
#[derive(Debug, Clone)]
pub struct SqlitePollRepository {
    pool: SqlitePool,
}

impl SqlitePollRepository {
    /// Open (creating if missing) the database at `url` and apply the schema
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, RepositoryError> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(storage)?
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(storage)?;

        let repository = Self { pool };
        repository.migrate().await?;
        info!("Connected to SQLite database at {}", url);
        Ok(repository)
    }

    /// A private in-memory database
    ///
    /// Uses a single connection that never expires; every SQLite
    /// `:memory:` connection is a separate database.
    pub async fn in_memory() -> Result<Self, RepositoryError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(storage)?
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(storage)?;

        let repository = Self { pool };
        repository.migrate().await?;
        Ok(repository)
    }

    /// Create tables and indexes if they do not exist yet
    pub async fn migrate(&self) -> Result<(), RepositoryError> {
        for statement in SCHEMA {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(storage)?;
        }
        debug!("SQLite schema is up to date");
        Ok(())
    }

    async fn choices_of(&self, question: QuestionId) -> Result<Vec<Choice>, RepositoryError> {
        sqlx::query_as::<_, ChoiceRow>(
            "SELECT id, question_id, choice_text, votes FROM polls_choice
             WHERE question_id = ? ORDER BY id",
        )
        .bind(question.get())
        .fetch_all(&self.pool)
        .await
        .map_err(storage)?
        .into_iter()
        .map(Choice::try_from)
        .collect()
    }
}

#[async_trait]
impl PollRepository for SqlitePollRepository {
    async fn list_questions(&self, query: &ListingQuery) -> Result<Vec<Question>, RepositoryError> {
        let cutoff = query.published_before.map(to_micros);
        // SQLite treats a negative LIMIT as "no limit"
        let limit = query
            .limit
            .map(|l| i64::try_from(l).unwrap_or(i64::MAX))
            .unwrap_or(-1);

        sqlx::query_as::<_, QuestionRow>(
            "SELECT q.id, q.question_text, q.pub_date FROM polls_question q
             WHERE q.pub_date <= COALESCE(?, q.pub_date)
               AND (? = 0 OR EXISTS (SELECT 1 FROM polls_choice c WHERE c.question_id = q.id))
             ORDER BY q.pub_date DESC, q.id DESC
             LIMIT ?",
        )
        .bind(cutoff)
        .bind(query.require_choices)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(storage)?
        .into_iter()
        .map(Question::try_from)
        .collect()
    }

    async fn get_question(&self, id: QuestionId) -> Result<Option<QuestionDetail>, RepositoryError> {
        let row = sqlx::query_as::<_, QuestionRow>(
            "SELECT id, question_text, pub_date FROM polls_question WHERE id = ?",
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(storage)?;

        let Some(row) = row else {
            return Ok(None);
        };
        let question = Question::try_from(row)?;
        let choices = self.choices_of(id).await?;
        Ok(Some(QuestionDetail::new(question, choices)))
    }

    async fn increment_vote(
        &self,
        question: QuestionId,
        choice: ChoiceId,
    ) -> Result<Choice, RepositoryError> {
        sqlx::query_as::<_, ChoiceRow>(
            "UPDATE polls_choice SET votes = votes + 1
             WHERE id = ? AND question_id = ?
             RETURNING id, question_id, choice_text, votes",
        )
        .bind(choice.get())
        .bind(question.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(storage)?
        .ok_or(RepositoryError::ChoiceNotFound(choice.get()))
        .and_then(Choice::try_from)
    }

    async fn create_question(&self, draft: QuestionDraft) -> Result<Question, RepositoryError> {
        let pub_date = to_micros(draft.pub_date());
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO polls_question (question_text, pub_date) VALUES (?, ?) RETURNING id",
        )
        .bind(draft.question_text())
        .bind(pub_date)
        .fetch_one(&self.pool)
        .await
        .map_err(storage)?;

        Ok(Question::new(
            QuestionId::new(id),
            draft.question_text(),
            from_micros(pub_date)?,
        ))
    }

    async fn update_question(
        &self,
        id: QuestionId,
        draft: QuestionDraft,
    ) -> Result<Question, RepositoryError> {
        let pub_date = to_micros(draft.pub_date());
        let result =
            sqlx::query("UPDATE polls_question SET question_text = ?, pub_date = ? WHERE id = ?")
                .bind(draft.question_text())
                .bind(pub_date)
                .bind(id.get())
                .execute(&self.pool)
                .await
                .map_err(storage)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::QuestionNotFound(id.get()));
        }
        Ok(Question::new(id, draft.question_text(), from_micros(pub_date)?))
    }

    async fn delete_question(&self, id: QuestionId) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(storage)?;

        sqlx::query("DELETE FROM polls_choice WHERE question_id = ?")
            .bind(id.get())
            .execute(&mut *tx)
            .await
            .map_err(storage)?;
        let result = sqlx::query("DELETE FROM polls_question WHERE id = ?")
            .bind(id.get())
            .execute(&mut *tx)
            .await
            .map_err(storage)?;

        if result.rows_affected() == 0 {
            // Dropping the transaction rolls it back
            return Err(RepositoryError::QuestionNotFound(id.get()));
        }
        tx.commit().await.map_err(storage)
    }

    async fn add_choice(
        &self,
        question: QuestionId,
        draft: ChoiceDraft,
    ) -> Result<Choice, RepositoryError> {
        let id: Option<i64> = sqlx::query_scalar(
            "INSERT INTO polls_choice (question_id, choice_text, votes)
             SELECT ?, ?, 0 WHERE EXISTS (SELECT 1 FROM polls_question WHERE id = ?)
             RETURNING id",
        )
        .bind(question.get())
        .bind(draft.choice_text())
        .bind(question.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(storage)?;

        let id = id.ok_or(RepositoryError::QuestionNotFound(question.get()))?;
        Ok(draft.into_choice(ChoiceId::new(id), question))
    }

    async fn delete_choice(&self, id: ChoiceId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM polls_choice WHERE id = ?")
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(storage)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::ChoiceNotFound(id.get()));
        }
        Ok(())
    }
}
