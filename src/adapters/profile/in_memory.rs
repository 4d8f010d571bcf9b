//! In-memory rider profile repository.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, SubmissionId, UserId};
use crate::domain::questionnaire::ProfileSubmission;
use crate::ports::RiderProfileRepository;

/// Keeps submissions in insertion order behind a `RwLock`.
#[derive(Debug, Default)]
pub struct InMemoryRiderProfileRepository {
    submissions: RwLock<Vec<ProfileSubmission>>,
}

impl InMemoryRiderProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> DomainError {
        DomainError::new(ErrorCode::StorageError, "profile repository lock poisoned")
    }

    fn read<T>(&self, f: impl FnOnce(&[ProfileSubmission]) -> T) -> Result<T, DomainError> {
        let submissions = self.submissions.read().map_err(|_| Self::poisoned())?;
        Ok(f(&submissions))
    }
}

#[async_trait]
impl RiderProfileRepository for InMemoryRiderProfileRepository {
    async fn save(&self, submission: &ProfileSubmission) -> Result<(), DomainError> {
        let mut submissions = self.submissions.write().map_err(|_| Self::poisoned())?;
        match submissions.iter_mut().find(|s| s.id == submission.id) {
            Some(existing) => *existing = submission.clone(),
            None => submissions.push(submission.clone()),
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &SubmissionId) -> Result<Option<ProfileSubmission>, DomainError> {
        self.read(|all| all.iter().find(|s| s.id == *id).cloned())
    }

    async fn find_official(&self, user_id: &UserId) -> Result<Option<ProfileSubmission>, DomainError> {
        self.read(|all| {
            all.iter()
                .find(|s| s.user_id == *user_id && s.is_official)
                .cloned()
        })
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<ProfileSubmission>, DomainError> {
        self.read(|all| {
            all.iter()
                .filter(|s| s.user_id == *user_id)
                .cloned()
                .collect()
        })
    }
}
