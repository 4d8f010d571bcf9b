//! Axis Aggregator - sub-scores to the three profile axes.

use serde::{Deserialize, Serialize};

use super::normalizer::{Axis, Dimension, NormalizedAnswers};
use super::weights::AxisWeights;

pub const RISK_RANGE: (f64, f64) = (0.0, 10.0);
pub const SKILL_RANGE: (f64, f64) = (0.0, 10.0);
pub const ADEQUACY_RANGE: (f64, f64) = (-5.0, 5.0);

/// The rider's position in profile space (unrounded).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Axes {
    pub risk_taking: f64,
    pub technical_skills: f64,
    /// Positive: self-assessment at or below demonstrated skill.
    /// Negative: overestimation.
    pub adequacy: f64,
}

impl Axes {
    /// Same point with every coordinate rounded to one decimal.
    pub fn rounded(&self) -> Axes {
        Axes {
            risk_taking: round1(self.risk_taking),
            technical_skills: round1(self.technical_skills),
            adequacy: round1(self.adequacy),
        }
    }

    /// Magnitude of overestimation (0 when the rider underrates themselves).
    pub fn overestimation(&self) -> f64 {
        (-self.adequacy).max(0.0)
    }

    /// Magnitude of underestimation (0 when the rider overrates themselves).
    pub fn underestimation(&self) -> f64 {
        self.adequacy.max(0.0)
    }
}

/// Rounds to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Combines sub-scores into axes with fixed weighted sums.
#[derive(Debug, Clone, Copy, Default)]
pub struct AxisAggregator {
    weights: AxisWeights,
}

impl AxisAggregator {
    pub fn new(weights: AxisWeights) -> Self {
        Self { weights }
    }

    pub fn aggregate(&self, normalized: &NormalizedAnswers) -> Axes {
        let risk = self.weights.risk_base + self.weighted_sum(normalized, Axis::Risk);
        let skill = self.weights.skill_base + self.weighted_sum(normalized, Axis::Skill);
        let technical_skills = skill.clamp(SKILL_RANGE.0, SKILL_RANGE.1);

        // Self rating minus demonstrated skill, plus the overestimation
        // adjustments; negated so that overconfidence reads negative.
        let delta = normalized
            .facts
            .self_rating
            .map(|rating| rating - technical_skills.round())
            .unwrap_or(0.0);
        let overestimation = delta + self.weighted_sum(normalized, Axis::Adequacy);

        Axes {
            risk_taking: risk.clamp(RISK_RANGE.0, RISK_RANGE.1),
            technical_skills,
            adequacy: (-overestimation).clamp(ADEQUACY_RANGE.0, ADEQUACY_RANGE.1),
        }
    }

    fn weighted_sum(&self, normalized: &NormalizedAnswers, axis: Axis) -> f64 {
        Dimension::ALL
            .iter()
            .filter(|d| d.axis() == axis)
            .map(|d| self.weights.weight(*d) * normalized.scores.get(*d))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::questionnaire::answers::QuestionnaireAnswers;
    use crate::domain::questionnaire::normalizer::AnswerNormalizer;

    fn axes_for(answers: &QuestionnaireAnswers) -> Axes {
        let normalized = AnswerNormalizer::new(2025).normalize(answers);
        AxisAggregator::default().aggregate(&normalized)
    }

    #[test]
    fn empty_answers_sit_at_base_values() {
        let axes = axes_for(&QuestionnaireAnswers::new());
        assert_eq!(axes.risk_taking, 5.0);
        assert_eq!(axes.technical_skills, 4.0);
        assert_eq!(axes.adequacy, 0.0);
    }

    #[test]
    fn axes_are_clamped() {
        let reckless = QuestionnaireAnswers::new()
            .with("e7_1", "90-150 км/год")
            .with("e4_2", "Шолом, футболка, шльопкі")
            .with("e4_4", "Агресивний")
            .with("e3_1", "Не думав про це, я просто хотів кататись")
            .with("e7_2", "Міцно, щоб контролювати")
            .with("e9_1", "Гальмувати")
            .with("e7_3", "По центру")
            .with("e6_trajectory", "Так, їжджу по центру")
            .with("e2_2", vec!["Я догнав автівку"])
            .with("e1_3", 10.0);
        let axes = axes_for(&reckless);

        assert_eq!(axes.risk_taking, 10.0);
        assert_eq!(axes.technical_skills, 0.0);
        assert_eq!(axes.adequacy, -5.0);
    }

    #[test]
    fn adequacy_is_positive_when_rider_underrates() {
        let answers = QuestionnaireAnswers::new().with("e1_3", 1.0);
        let axes = axes_for(&answers);
        // skill 4, self rating 1
        assert_eq!(axes.adequacy, 3.0);
        assert_eq!(axes.underestimation(), 3.0);
        assert_eq!(axes.overestimation(), 0.0);
    }

    #[test]
    fn dimension_weight_scales_contribution() {
        let answers = QuestionnaireAnswers::new().with("e7_1", "90-150 км/год");
        let normalized = AnswerNormalizer::new(2025).normalize(&answers);
        let halved = AxisAggregator::new(AxisWeights::DEFAULT.with_weight(Dimension::CitySpeed, 0.5))
            .aggregate(&normalized);
        assert_eq!(halved.risk_taking, 6.5);
    }

    #[test]
    fn round1_rounds_to_one_decimal() {
        assert_eq!(round1(4.875), 4.9);
        assert_eq!(round1(-6.125), -6.1);
        assert_eq!(round1(11.66), 11.7);
    }
}
