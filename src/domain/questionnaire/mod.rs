//! Questionnaire module - Rider Risk Profile Calculator.
//!
//! Turns questionnaire answers into a three-axis profile:
//!
//! - `risk_taking` (0..=10)
//! - `technical_skills` (0..=10)
//! - `adequacy` (-5..=5, negative means the rider overrates themselves)
//!
//! plus derived metrics, a named archetype and ordered text lists. The
//! pipeline is strictly one-way:
//!
//! ```text
//! answers → AnswerNormalizer → AxisAggregator → MetricDerivor
//!         → ProfileClassifier → recommendations / red flags
//! ```
//!
//! Beginner submissions additionally get a [`BeginnerProfile`].

mod aggregator;
mod answers;
mod beginner;
mod calculator;
mod catalog;
mod classifier;
mod events;
pub mod fixtures;
mod metrics;
mod normalizer;
mod recommendations;
mod submission;
mod traps;
pub mod vocabulary;
mod weights;

pub use aggregator::{round1, AxisAggregator, Axes, ADEQUACY_RANGE, RISK_RANGE, SKILL_RANGE};
pub use answers::{AnswerValue, QuestionnaireAnswers, QuestionnaireKind};
pub use beginner::{
    compute_beginner_profile, BeginnerArchetype, BeginnerProfile, BeginnerRiskLevel,
    BeginnerScores,
};
pub use calculator::{compute_profile, Profile3D, ProfileCalculator};
pub use catalog::{describe_profile, ProfileDescription, ProfileType, UNKNOWN_PROFILE_DESCRIPTION};
pub use classifier::{ProfileClassifier, MIN_ANSWERED_QUESTIONS};
pub use events::RiderProfileCalculated;
pub use metrics::{DangerLevel, MetricDerivor, Metrics, GROWTH_RANGE, SAFETY_RANGE};
pub use normalizer::{
    AnswerNormalizer, Axis, Dimension, NormalizedAnswers, RiderFacts, SkillClaims, SubScores,
};
pub use recommendations::{
    characteristics, prioritized_recommendations, red_flags, Priority, Recommendation,
};
pub use submission::ProfileSubmission;
pub use traps::{skill_growth_warnings, trap_failures};
pub use weights::{AxisWeights, MetricWeights};
