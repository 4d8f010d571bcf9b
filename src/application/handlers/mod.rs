//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod questionnaire;

pub use questionnaire::{
    ListSubmissionsHandler, ListSubmissionsQuery, SubmitQuestionnaireCommand,
    SubmitQuestionnaireHandler, SubmitQuestionnaireResult,
};
