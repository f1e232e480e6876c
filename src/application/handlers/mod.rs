//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations over the
//! backend ports.

pub mod assessment;
mod pagination;
pub mod validation;

pub use assessment::{
    CreateAssessmentCommand, CreateAssessmentHandler, DeleteAssessmentCommand,
    DeleteAssessmentHandler, GetAssessmentHandler, GetAssessmentQuery, ListAssessmentsHandler,
    ListAssessmentsQuery, SaveAssessmentCommand, SaveAssessmentHandler,
};
pub use pagination::collect_all_pages;
pub use validation::{
    ListEligibleActorsHandler, UpdateValidationStatusCommand, UpdateValidationStatusHandler,
};
