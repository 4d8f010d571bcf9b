//! RiderProfileRepository port - persistence of scored submissions.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, SubmissionId, UserId};
use crate::domain::questionnaire::ProfileSubmission;

/// Repository for questionnaire submissions and their profiles.
///
/// Implementations do not arbitrate the official submission: `find_official`
/// followed by `save` is not atomic here. Callers that decide officiality
/// serialize that sequence themselves (see `SubmitQuestionnaireHandler`);
/// processes sharing one storage directory are not coordinated.
#[async_trait]
pub trait RiderProfileRepository: Send + Sync {
    /// Stores a submission. Saving an existing id replaces it.
    async fn save(&self, submission: &ProfileSubmission) -> Result<(), DomainError>;

    /// Finds a submission by id.
    async fn find_by_id(&self, id: &SubmissionId) -> Result<Option<ProfileSubmission>, DomainError>;

    /// The rider's official submission (their first), if any.
    async fn find_official(&self, user_id: &UserId) -> Result<Option<ProfileSubmission>, DomainError>;

    /// All submissions of a rider, oldest first.
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<ProfileSubmission>, DomainError>;
}
