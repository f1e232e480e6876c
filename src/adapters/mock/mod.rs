//! In-memory and mock adapters for tests and offline use.

mod in_memory_assessment_api;
mod in_memory_validation_api;
mod mock_check_service;

pub use in_memory_assessment_api::InMemoryAssessmentApi;
pub use in_memory_validation_api::InMemoryValidationApi;
pub use mock_check_service::{MockCheckResponse, MockCheckService};
