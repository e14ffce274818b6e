use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use tracing::info;
use uuid::Uuid;

use crate::models::analysis::{AnalysisResult, CandidateProfile, CareerInsight, JobRecommendation};
use crate::models::user::User;
use crate::store::{DocumentStore, StoreError};

/// Postgres unique_violation.
const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL-backed store. Each analysis is one row of JSONB documents.
#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[derive(Debug, FromRow)]
struct AnalysisRow {
    id: Uuid,
    resume: Json<CandidateProfile>,
    jobs: Json<Vec<JobRecommendation>>,
    insights: Json<CareerInsight>,
    created_at: DateTime<Utc>,
}

impl From<AnalysisRow> for AnalysisResult {
    fn from(row: AnalysisRow) -> Self {
        AnalysisResult {
            id: row.id,
            resume: row.resume.0,
            jobs: row.jobs.0,
            insights: row.insights.0,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn insert_analysis(&self, analysis: &AnalysisResult) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO analyses (id, resume, jobs, insights, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(analysis.id)
        .bind(Json(&analysis.resume))
        .bind(Json(&analysis.jobs))
        .bind(Json(&analysis.insights))
        .bind(analysis.created_at)
        .execute(&self.pool)
        .await?;

        info!("Inserted analysis {}", analysis.id);
        Ok(())
    }

    async fn recent_analyses(&self, limit: i64) -> Result<Vec<AnalysisResult>, StoreError> {
        let rows = sqlx::query_as::<_, AnalysisRow>(
            r#"
            SELECT id, resume, jobs, insights, created_at
            FROM analyses
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(AnalysisResult::from).collect())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(sqlx::query_as::<_, User>(
            "SELECT id, name, email, password_hash, created_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn insert_user(&self, user: &User) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO users (id, name, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => {
                info!("Created user {}", user.id);
                Ok(())
            }
            Err(sqlx::Error::Database(db_err))
                if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) =>
            {
                Err(StoreError::DuplicateEmail)
            }
            Err(e) => Err(e.into()),
        }
    }
}
