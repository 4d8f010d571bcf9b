//! ProfileSubmission - one scored questionnaire of one rider.

use serde::{Deserialize, Serialize};

use super::answers::{QuestionnaireAnswers, QuestionnaireKind};
use super::beginner::{compute_beginner_profile, BeginnerProfile};
use super::calculator::{Profile3D, ProfileCalculator};
use crate::domain::foundation::{SubmissionId, Timestamp, UserId};

/// A persisted questionnaire submission together with its computed profile.
///
/// A rider's first submission is their official profile; later ones are
/// kept for history but never replace it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSubmission {
    pub id: SubmissionId,
    pub user_id: UserId,
    pub kind: QuestionnaireKind,
    pub answers: QuestionnaireAnswers,
    pub profile: Profile3D,
    /// Present only for beginner questionnaires.
    pub beginner: Option<BeginnerProfile>,
    pub is_official: bool,
    pub submitted_at: Timestamp,
}

impl ProfileSubmission {
    /// Scores the answers and builds an unofficial submission.
    pub fn new(
        user_id: UserId,
        answers: QuestionnaireAnswers,
        calculator: &ProfileCalculator,
    ) -> Self {
        let kind = answers.kind();
        let profile = calculator.compute(&answers);
        let beginner = match kind {
            QuestionnaireKind::Beginner => Some(compute_beginner_profile(&answers)),
            _ => None,
        };

        Self {
            id: SubmissionId::new(),
            user_id,
            kind,
            answers,
            profile,
            beginner,
            is_official: false,
            submitted_at: Timestamp::now(),
        }
    }

    /// Marks this submission as the rider's official profile.
    pub fn mark_official(&mut self) {
        self.is_official = true;
    }
}
