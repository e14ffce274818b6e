use std::sync::Mutex;

use async_trait::async_trait;

use crate::models::analysis::AnalysisResult;
use crate::models::user::User;
use crate::store::{DocumentStore, StoreError};

/// In-memory store for handler and pipeline tests.
#[derive(Default)]
pub struct MemoryStore {
    analyses: Mutex<Vec<AnalysisResult>>,
    users: Mutex<Vec<User>>,
    pub fail_writes: bool,
}

impl MemoryStore {
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn analysis_count(&self) -> usize {
        self.analyses.lock().unwrap().len()
    }

    pub fn users_with_email(&self, email: &str) -> usize {
        self.users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.email == email)
            .count()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_analysis(&self, analysis: &AnalysisResult) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::Database(sqlx::Error::PoolClosed));
        }
        self.analyses.lock().unwrap().push(analysis.clone());
        Ok(())
    }

    async fn recent_analyses(&self, limit: i64) -> Result<Vec<AnalysisResult>, StoreError> {
        let mut analyses = self.analyses.lock().unwrap().clone();
        analyses.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        analyses.truncate(limit.max(0) as usize);
        Ok(analyses)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn insert_user(&self, user: &User) -> Result<(), StoreError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::DuplicateEmail);
        }
        users.push(user.clone());
        Ok(())
    }
}
