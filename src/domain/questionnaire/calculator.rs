//! Profile calculator - runs the full scoring pipeline.
//!
//! normalize → aggregate → metrics → classify → texts. Every stage is a
//! pure function of its inputs, so the same answers and reference year
//! always give the same profile.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::aggregator::AxisAggregator;
use super::answers::QuestionnaireAnswers;
use super::catalog::ProfileType;
use super::classifier::ProfileClassifier;
use super::metrics::{DangerLevel, MetricDerivor};
use super::normalizer::AnswerNormalizer;
use super::recommendations::{characteristics, prioritized_recommendations, red_flags};
use super::traps::{skill_growth_warnings, trap_failures};
use super::weights::{AxisWeights, MetricWeights};
use crate::domain::foundation::Timestamp;

/// The rider's full profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile3D {
    pub risk_taking: f64,
    pub technical_skills: f64,
    pub adequacy: f64,
    pub safety_index: f64,
    pub growth_potential: f64,
    pub danger_level: DangerLevel,
    pub profile_type: ProfileType,
    pub characteristics: Vec<String>,
    pub recommendations: Vec<String>,
    pub red_flags: Vec<String>,
}

/// Configurable entry point to the pipeline.
#[derive(Debug, Clone, Copy)]
pub struct ProfileCalculator {
    axis_weights: AxisWeights,
    metric_weights: MetricWeights,
    reference_year: i32,
}

impl ProfileCalculator {
    pub fn new(axis_weights: AxisWeights, metric_weights: MetricWeights, reference_year: i32) -> Self {
        Self {
            axis_weights,
            metric_weights,
            reference_year,
        }
    }

    /// Default weights with an explicit reference year.
    pub fn with_reference_year(reference_year: i32) -> Self {
        Self::new(AxisWeights::DEFAULT, MetricWeights::DEFAULT, reference_year)
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    /// Computes the profile. Total: any answer set yields a profile.
    pub fn compute(&self, answers: &QuestionnaireAnswers) -> Profile3D {
        let normalized = AnswerNormalizer::new(self.reference_year).normalize(answers);
        let raw_axes = AxisAggregator::new(self.axis_weights).aggregate(&normalized);
        let axes = raw_axes.rounded();
        let metrics = MetricDerivor::new(self.metric_weights).derive(&raw_axes, &normalized);

        let facts = &normalized.facts;
        let profile_type = ProfileClassifier::classify(&axes, facts.answered_questions);

        let traps = trap_failures(answers, facts);
        let growth = skill_growth_warnings(facts, raw_axes.technical_skills);
        let recommendations = prioritized_recommendations(&axes, &traps)
            .into_iter()
            .map(|r| r.text)
            .collect();
        let red_flags = red_flags(&axes, &metrics, facts, traps, growth);

        let profile = Profile3D {
            risk_taking: axes.risk_taking,
            technical_skills: axes.technical_skills,
            adequacy: axes.adequacy,
            safety_index: metrics.safety_index,
            growth_potential: metrics.growth_potential,
            danger_level: metrics.danger_level,
            profile_type,
            characteristics: characteristics(&axes, profile_type),
            recommendations,
            red_flags,
        };

        debug!(
            profile_type = %profile.profile_type,
            danger_level = %profile.danger_level,
            risk = profile.risk_taking,
            skill = profile.technical_skills,
            adequacy = profile.adequacy,
            answered = facts.answered_questions,
            "profile computed"
        );

        profile
    }
}

impl Default for ProfileCalculator {
    fn default() -> Self {
        Self::with_reference_year(Timestamp::now().year())
    }
}

/// Computes a profile with default weights against the current UTC year.
pub fn compute_profile(answers: &QuestionnaireAnswers) -> Profile3D {
    ProfileCalculator::default().compute(answers)
}
