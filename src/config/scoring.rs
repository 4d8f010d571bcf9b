//! Scoring configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::Timestamp;
use crate::domain::questionnaire::ProfileCalculator;

const MIN_REFERENCE_YEAR: i32 = 1990;
const MAX_REFERENCE_YEAR: i32 = 2100;

/// Scoring configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringConfig {
    /// Year that riding experience is measured against. Pinning it keeps
    /// stored profiles reproducible; unset means the current UTC year.
    pub reference_year: Option<i32>,
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.reference_year {
            Some(year) if !(MIN_REFERENCE_YEAR..=MAX_REFERENCE_YEAR).contains(&year) => {
                Err(ValidationError::InvalidReferenceYear(year))
            }
            _ => Ok(()),
        }
    }

    pub fn effective_reference_year(&self) -> i32 {
        self.reference_year
            .unwrap_or_else(|| Timestamp::now().year())
    }

    /// Calculator with default weights and the effective reference year.
    pub fn calculator(&self) -> ProfileCalculator {
        ProfileCalculator::with_reference_year(self.effective_reference_year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_year_uses_current_year() {
        let config = ScoringConfig::default();
        assert_eq!(config.effective_reference_year(), Timestamp::now().year());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn pinned_year_flows_into_calculator() {
        let config = ScoringConfig {
            reference_year: Some(2024),
        };
        assert_eq!(config.calculator().reference_year(), 2024);
    }

    #[test]
    fn out_of_range_year_is_rejected() {
        let config = ScoringConfig {
            reference_year: Some(1850),
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidReferenceYear(1850))
        );
    }
}
