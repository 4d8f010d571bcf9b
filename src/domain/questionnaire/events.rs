//! Questionnaire domain events.
//!
//! - `RiderProfileCalculated` - a submission was scored and stored

use serde::{Deserialize, Serialize};

use super::catalog::ProfileType;
use super::metrics::DangerLevel;
use super::submission::ProfileSubmission;
use crate::domain::foundation::{domain_event, EventId, SubmissionId, Timestamp, UserId};

/// Published after a questionnaire submission has been scored and persisted.
///
/// Notification and course-recommendation features subscribe to this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiderProfileCalculated {
    pub event_id: EventId,
    pub submission_id: SubmissionId,
    pub user_id: UserId,
    pub profile_type: ProfileType,
    pub danger_level: DangerLevel,
    /// True when this submission became the rider's official profile.
    pub is_official: bool,
    pub calculated_at: Timestamp,
}

domain_event!(
    RiderProfileCalculated,
    event_type = "rider_profile.calculated.v1",
    schema_version = 1,
    aggregate_id = submission_id,
    aggregate_type = "ProfileSubmission",
    occurred_at = calculated_at,
    event_id = event_id
);

impl RiderProfileCalculated {
    pub fn from_submission(submission: &ProfileSubmission) -> Self {
        Self {
            event_id: EventId::new(),
            submission_id: submission.id,
            user_id: submission.user_id.clone(),
            profile_type: submission.profile.profile_type,
            danger_level: submission.profile.danger_level,
            is_official: submission.is_official,
            calculated_at: submission.submitted_at,
        }
    }
}
