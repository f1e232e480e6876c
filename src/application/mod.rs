//! Application layer - Commands, Queries, Handlers and the wizard session.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;
pub mod wizard;

pub use handlers::{
    collect_all_pages, CreateAssessmentCommand, CreateAssessmentHandler, DeleteAssessmentCommand,
    DeleteAssessmentHandler, GetAssessmentHandler, GetAssessmentQuery, ListAssessmentsHandler,
    ListAssessmentsQuery, ListEligibleActorsHandler, SaveAssessmentCommand, SaveAssessmentHandler,
    UpdateValidationStatusCommand, UpdateValidationStatusHandler,
};
pub use wizard::{AssessmentWizard, CheckCompletion, CheckRunner};
