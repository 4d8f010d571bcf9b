//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, events, errors)
//! - `questionnaire` - Rider profile scoring: normalization, axes, metrics,
//!   archetype classification, recommendations, beginner archetypes

pub mod foundation;
pub mod questionnaire;
