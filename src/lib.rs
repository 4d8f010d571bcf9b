//! Nebachiv - Rider Risk Profile Engine
//!
//! This crate turns motorcycle-safety questionnaire answers into a
//! three-axis rider profile (risk-taking, technical skill, self-assessment
//! adequacy), derived safety metrics, a named archetype and ordered
//! recommendations.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
