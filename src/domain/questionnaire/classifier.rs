//! Profile Classifier - maps a point in profile space to an archetype.
//!
//! Each archetype has a predicate over (risk, skill, adequacy). The
//! predicates overlap, so they are evaluated in [`ProfileType::ALL`]
//! order and the first match wins. That order puts overconfident and
//! high-risk archetypes before cautious ones: on a tie the more
//! cautionary label is chosen. Balanced Rider is the fallback.

use super::aggregator::Axes;
use super::catalog::ProfileType;

/// Minimum number of answered scoring questions needed to classify.
pub const MIN_ANSWERED_QUESTIONS: usize = 5;

pub struct ProfileClassifier;

impl ProfileClassifier {
    /// Classifies a (rounded) point. Never fails.
    pub fn classify(axes: &Axes, answered_questions: usize) -> ProfileType {
        if answered_questions < MIN_ANSWERED_QUESTIONS {
            return ProfileType::InsufficientData;
        }
        ProfileType::ALL
            .into_iter()
            .find(|candidate| Self::matches(*candidate, axes))
            .unwrap_or(ProfileType::BalancedRider)
    }

    /// True when the point satisfies the archetype's predicate.
    pub fn matches(profile_type: ProfileType, axes: &Axes) -> bool {
        let risk = axes.risk_taking;
        let skill = axes.technical_skills;
        let over = axes.overestimation();
        let under = axes.underestimation();
        let accurate_within = |tolerance: f64| axes.adequacy.abs() <= tolerance;

        match profile_type {
            ProfileType::DangerousNovice => risk > 6.0 && skill < 4.0 && over > 2.0,
            ProfileType::DunningKruger => risk >= 5.0 && skill < 6.0 && over >= 3.0,
            ProfileType::OverconfidentIntermediate => {
                (4.0..=6.0).contains(&risk) && (4.0..=6.0).contains(&skill) && over > 2.0
            }
            ProfileType::LuckySurvivor => {
                risk > 6.0 && (4.0..=7.0).contains(&skill) && accurate_within(2.0)
            }
            ProfileType::CalculatedRisk => risk > 6.0 && skill > 7.0 && accurate_within(1.0),
            ProfileType::NervousBeginner => risk < 4.0 && skill < 4.0 && under > 1.0,
            ProfileType::ImpostorSyndrome => risk < 4.0 && skill > 6.0 && under > 2.0,
            ProfileType::SkilledPessimist => risk < 5.0 && skill > 6.0 && under > 2.0,
            ProfileType::CautiousExpert => risk < 4.0 && skill > 7.0 && accurate_within(1.0),
            ProfileType::BalancedRider => true,
            ProfileType::InsufficientData => false,
        }
    }
}
