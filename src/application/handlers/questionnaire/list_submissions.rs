//! ListSubmissionsHandler - Query handler for a rider's submission history.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::questionnaire::ProfileSubmission;
use crate::ports::RiderProfileRepository;

/// Query for a rider's submissions.
#[derive(Debug, Clone)]
pub struct ListSubmissionsQuery {
    pub user_id: UserId,
    /// Only the official submission.
    pub official_only: bool,
}

impl ListSubmissionsQuery {
    pub fn all(user_id: UserId) -> Self {
        Self {
            user_id,
            official_only: false,
        }
    }

    pub fn official(user_id: UserId) -> Self {
        Self {
            user_id,
            official_only: true,
        }
    }
}

/// Handler for listing submissions.
pub struct ListSubmissionsHandler {
    repository: Arc<dyn RiderProfileRepository>,
}

impl ListSubmissionsHandler {
    pub fn new(repository: Arc<dyn RiderProfileRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListSubmissionsQuery) -> Result<Vec<ProfileSubmission>, DomainError> {
        if query.official_only {
            let official = self.repository.find_official(&query.user_id).await?;
            return Ok(official.into_iter().collect());
        }
        self.repository.list_by_user(&query.user_id).await
    }
}
