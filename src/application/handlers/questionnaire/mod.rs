//! Questionnaire command and query handlers.

mod list_submissions;
mod submit_questionnaire;

pub use list_submissions::{ListSubmissionsHandler, ListSubmissionsQuery};
pub use submit_questionnaire::{
    SubmitQuestionnaireCommand, SubmitQuestionnaireHandler, SubmitQuestionnaireResult,
};
