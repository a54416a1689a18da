//! PostgreSQL implementation of the tutorial repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewTutorial, Tutorial, TutorialPatch};
use crate::domain::repositories::TutorialRepository;
use crate::error::AppError;
use crate::utils::id_generator::generate_id;

/// Row shape shared by every `RETURNING` / `SELECT` in this module.
#[derive(Debug, sqlx::FromRow)]
struct TutorialRow {
    id: String,
    title: String,
    description: Option<String>,
    published: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<TutorialRow> for Tutorial {
    fn from(r: TutorialRow) -> Self {
        Self {
            id: r.id,
            title: r.title,
            description: r.description,
            published: r.published,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// PostgreSQL repository for tutorials.
///
/// Ids are stored as plain `TEXT`, so any path segment can be looked up and
/// an unknown one just yields no row.
pub struct PgTutorialRepository {
    pool: Arc<PgPool>,
}

impl PgTutorialRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TutorialRepository for PgTutorialRepository {
    async fn list(&self) -> Result<Vec<Tutorial>, AppError> {
        let rows = sqlx::query_as::<_, TutorialRow>(
            r#"
            SELECT id, title, description, published, created_at, updated_at
            FROM tutorials
            ORDER BY seq ASC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Tutorial::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Tutorial>, AppError> {
        let row = sqlx::query_as::<_, TutorialRow>(
            r#"
            SELECT id, title, description, published, created_at, updated_at
            FROM tutorials
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Tutorial::from))
    }

    async fn create(&self, new_tutorial: NewTutorial) -> Result<Tutorial, AppError> {
        let row = sqlx::query_as::<_, TutorialRow>(
            r#"
            INSERT INTO tutorials (id, title, description, published)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, description, published, created_at, updated_at
            "#,
        )
        .bind(generate_id())
        .bind(new_tutorial.title)
        .bind(new_tutorial.description)
        .bind(new_tutorial.published)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn update(&self, id: &str, patch: TutorialPatch) -> Result<Option<Tutorial>, AppError> {
        // $3 distinguishes "leave description alone" from "set it to NULL".
        let (set_description, description) = match patch.description {
            Some(value) => (true, value),
            None => (false, None),
        };

        let row = sqlx::query_as::<_, TutorialRow>(
            r#"
            UPDATE tutorials
            SET title       = COALESCE($2, title),
                description = CASE WHEN $3 THEN $4 ELSE description END,
                published   = COALESCE($5, published),
                updated_at  = NOW()
            WHERE id = $1
            RETURNING id, title, description, published, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(patch.title)
        .bind(set_description)
        .bind(description)
        .bind(patch.published)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Tutorial::from))
    }

    async fn delete(&self, id: &str) -> Result<Option<Tutorial>, AppError> {
        let row = sqlx::query_as::<_, TutorialRow>(
            r#"
            DELETE FROM tutorials
            WHERE id = $1
            RETURNING id, title, description, published, created_at, updated_at
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Tutorial::from))
    }

    async fn delete_all(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM tutorials")
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
