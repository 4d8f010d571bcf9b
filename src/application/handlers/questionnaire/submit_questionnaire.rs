//! SubmitQuestionnaireHandler - Command handler for scoring a questionnaire.

use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use crate::domain::foundation::{CommandMetadata, DomainError, ErrorCode, EventEnvelope};
use crate::domain::questionnaire::{
    ProfileCalculator, ProfileSubmission, QuestionnaireAnswers, RiderProfileCalculated,
};
use crate::ports::{EventPublisher, RiderProfileRepository};

/// Command to score and store a rider's answers. The rider is taken from
/// the command metadata.
#[derive(Debug, Clone)]
pub struct SubmitQuestionnaireCommand {
    pub answers: QuestionnaireAnswers,
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct SubmitQuestionnaireResult {
    pub submission: ProfileSubmission,
    pub event: RiderProfileCalculated,
}

/// Handler for questionnaire submissions.
///
/// Deciding the official submission and saving it run under one lock, so
/// concurrent first submissions through the same handler yield exactly one
/// official profile.
pub struct SubmitQuestionnaireHandler {
    repository: Arc<dyn RiderProfileRepository>,
    event_publisher: Arc<dyn EventPublisher>,
    calculator: ProfileCalculator,
    official_lock: Mutex<()>,
}

impl SubmitQuestionnaireHandler {
    pub fn new(
        repository: Arc<dyn RiderProfileRepository>,
        event_publisher: Arc<dyn EventPublisher>,
        calculator: ProfileCalculator,
    ) -> Self {
        Self {
            repository,
            event_publisher,
            calculator,
            official_lock: Mutex::new(()),
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitQuestionnaireCommand,
        metadata: CommandMetadata,
    ) -> Result<SubmitQuestionnaireResult, DomainError> {
        // 1. Score
        let mut submission =
            ProfileSubmission::new(metadata.user_id.clone(), cmd.answers, &self.calculator);

        // 2. Persist; the first submission becomes the official profile
        {
            let _guard = self.official_lock.lock().await;
            if self.repository.find_official(&metadata.user_id).await?.is_none() {
                submission.mark_official();
            }
            self.repository.save(&submission).await?;
        }

        // 3. Publish
        let event = RiderProfileCalculated::from_submission(&submission);
        let envelope = EventEnvelope::from_event(&event)
            .map_err(|e| {
                DomainError::new(ErrorCode::InternalError, format!("Failed to encode event: {}", e))
            })?
            .with_correlation_id(metadata.correlation_id())
            .with_user_id(metadata.user_id.to_string());
        self.event_publisher.publish(envelope).await?;

        info!(
            submission_id = %submission.id,
            user_id = %submission.user_id,
            profile_type = %submission.profile.profile_type,
            danger_level = %submission.profile.danger_level,
            is_official = submission.is_official,
            source = metadata.source().unwrap_or("unknown"),
            "questionnaire submission stored"
        );

        Ok(SubmitQuestionnaireResult { submission, event })
    }
}
