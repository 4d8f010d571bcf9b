//! Named scoring weights.
//!
//! Every coefficient the aggregator and metric derivor use lives here so
//! that tuning never touches classification logic.

use serde::{Deserialize, Serialize};

use super::normalizer::Dimension;

/// Base values and per-dimension multipliers for the three axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisWeights {
    /// Starting point of the risk-taking axis before any answer is read.
    pub risk_base: f64,
    /// Starting point of the technical-skill axis.
    pub skill_base: f64,
    dimension_weights: [f64; Dimension::COUNT],
}

impl AxisWeights {
    pub const DEFAULT: AxisWeights = AxisWeights {
        risk_base: 5.0,
        skill_base: 2.0,
        dimension_weights: [1.0; Dimension::COUNT],
    };

    /// Multiplier applied to a dimension's points.
    pub fn weight(&self, dimension: Dimension) -> f64 {
        self.dimension_weights[dimension.index()]
    }

    /// Builder: override one dimension's multiplier.
    pub fn with_weight(mut self, dimension: Dimension, weight: f64) -> Self {
        self.dimension_weights[dimension.index()] = weight;
        self
    }
}

impl Default for AxisWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Coefficients of the safety index and growth potential formulas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricWeights {
    /// Applied to negative adequacy (overestimation).
    pub overconfidence: f64,
    /// Applied to positive adequacy (self-assessment at or below skill).
    pub underconfidence: f64,
    /// Applied to the summed braking-distance credits.
    pub braking: f64,
    /// Applied to hazard awareness (0..=10).
    pub hazard: f64,

    pub growth_base: f64,
    /// Per point of skill below 10.
    pub growth_skill_gap: f64,
    /// Per point of positive adequacy.
    pub growth_self_awareness: f64,
    /// Per point of negative adequacy.
    pub growth_overconfidence: f64,
    /// Per completed training type.
    pub growth_training: f64,
}

impl MetricWeights {
    pub const DEFAULT: MetricWeights = MetricWeights {
        overconfidence: 1.0,
        underconfidence: 0.2,
        braking: 0.5,
        hazard: 0.1,
        growth_base: 5.0,
        growth_skill_gap: 0.3,
        growth_self_awareness: 0.5,
        growth_overconfidence: 0.8,
        growth_training: 0.5,
    };
}

impl Default for MetricWeights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_axis_weights_are_documented_values() {
        let w = AxisWeights::DEFAULT;
        assert_eq!(w.risk_base, 5.0);
        assert_eq!(w.skill_base, 2.0);
        assert!(Dimension::ALL.iter().all(|d| w.weight(*d) == 1.0));
    }

    #[test]
    fn with_weight_overrides_single_dimension() {
        let w = AxisWeights::DEFAULT.with_weight(Dimension::CitySpeed, 0.5);
        assert_eq!(w.weight(Dimension::CitySpeed), 0.5);
        assert_eq!(w.weight(Dimension::GearUsage), 1.0);
    }

    #[test]
    fn default_metric_weights_are_documented_values() {
        let w = MetricWeights::default();
        assert_eq!(w.overconfidence, 1.0);
        assert_eq!(w.underconfidence, 0.2);
        assert_eq!(w.braking, 0.5);
        assert_eq!(w.hazard, 0.1);
    }
}
