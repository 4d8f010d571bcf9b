//! Metric Derivor - safety index, growth potential and danger level.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::aggregator::{round1, Axes};
use super::normalizer::{Dimension, NormalizedAnswers};
use super::weights::MetricWeights;

pub const SAFETY_RANGE: (f64, f64) = (-20.0, 20.0);
pub const GROWTH_RANGE: (f64, f64) = (0.0, 10.0);

/// Categorical summary of overall danger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DangerLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl DangerLevel {
    /// Threshold ladder over risk, skill, adequacy and safety index.
    ///
    /// CRITICAL is conjunctive: it needs both risk above 7 and a safety
    /// index below -5. Either condition alone lands at most in HIGH.
    pub fn assess(axes: &Axes, safety_index: f64) -> DangerLevel {
        let Axes {
            risk_taking: risk,
            technical_skills: skill,
            adequacy,
        } = *axes;

        if risk > 7.0 && safety_index < -5.0 {
            DangerLevel::Critical
        } else if safety_index < -2.0 || risk > skill + 3.0 || adequacy < -3.0 {
            DangerLevel::High
        } else if risk > skill + 1.0 || adequacy < -2.0 || adequacy > 3.0 || safety_index < 2.0 {
            DangerLevel::Medium
        } else {
            DangerLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DangerLevel::Low => "LOW",
            DangerLevel::Medium => "MEDIUM",
            DangerLevel::High => "HIGH",
            DangerLevel::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for DangerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derived metrics, rounded to one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub safety_index: f64,
    pub growth_potential: f64,
    pub danger_level: DangerLevel,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricDerivor {
    weights: MetricWeights,
}

impl MetricDerivor {
    pub fn new(weights: MetricWeights) -> Self {
        Self { weights }
    }

    /// Derives metrics from unrounded axes; the danger ladder reads the
    /// rounded values that end up in the profile.
    pub fn derive(&self, axes: &Axes, normalized: &NormalizedAnswers) -> Metrics {
        let safety_index = round1(self.safety_index(axes, normalized));
        let growth_potential = round1(self.growth_potential(axes, normalized));

        Metrics {
            safety_index,
            growth_potential,
            danger_level: DangerLevel::assess(&axes.rounded(), safety_index),
        }
    }

    /// Non-decreasing in skill, adequacy and braking credit; non-increasing in risk.
    pub fn safety_index(&self, axes: &Axes, normalized: &NormalizedAnswers) -> f64 {
        let w = &self.weights;
        let index = axes.technical_skills - axes.risk_taking
            + w.overconfidence * axes.adequacy.min(0.0)
            + w.underconfidence * axes.adequacy.max(0.0)
            + w.braking * normalized.facts.braking_credit_total()
            + w.hazard * normalized.scores.get(Dimension::HazardAwareness);
        index.clamp(SAFETY_RANGE.0, SAFETY_RANGE.1)
    }

    /// Highest for unskilled but self-aware riders, lowest for unskilled
    /// overconfident ones.
    pub fn growth_potential(&self, axes: &Axes, normalized: &NormalizedAnswers) -> f64 {
        let w = &self.weights;
        let potential = w.growth_base
            + w.growth_skill_gap * (10.0 - axes.technical_skills)
            + w.growth_self_awareness * axes.underestimation()
            - w.growth_overconfidence * axes.overestimation()
            + w.growth_training * normalized.facts.training_count as f64;
        potential.clamp(GROWTH_RANGE.0, GROWTH_RANGE.1)
    }
}
