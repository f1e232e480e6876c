//! Assessment wizard - interactive editing with background checks.

mod assessment_wizard;
mod check_runner;

pub use assessment_wizard::AssessmentWizard;
pub use check_runner::{CheckCompletion, CheckRunner};
