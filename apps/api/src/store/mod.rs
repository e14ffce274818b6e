//! Document Store — persistence seam for analyses and user accounts.
//!
//! `AppState` holds an `Arc<dyn DocumentStore>`; production uses
//! `PgDocumentStore`, tests use the in-memory store.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::analysis::AnalysisResult;
use crate::models::user::User;

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgDocumentStore;

/// How many analyses `GET /api/analyses` returns.
pub const RECENT_ANALYSES_LIMIT: i64 = 10;

#[derive(Debug, Error)]
pub enum StoreError {
    /// A user with this email already exists.
    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Writes one analysis document. Analyses are never updated.
    async fn insert_analysis(&self, analysis: &AnalysisResult) -> Result<(), StoreError>;

    /// Returns at most `limit` analyses, newest first.
    async fn recent_analyses(&self, limit: i64) -> Result<Vec<AnalysisResult>, StoreError>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Inserts an account. Fails with `DuplicateEmail` if the email is taken.
    async fn insert_user(&self, user: &User) -> Result<(), StoreError>;
}
