//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the backend API. Adapters implement these ports.
//!
//! ## Backend Ports
//!
//! - `AssessmentApi` - Templates and stored assessments
//! - `ValidationApi` - Actor/organisation validation workflow
//! - `AutomatedCheckService` - Remote checks behind automated tests
//!
//! Every call takes an explicit `SessionContext` carrying the bearer token.

mod api_error;
mod assessment_api;
mod automated_check_service;
mod pagination;
mod session_context;
mod validation_api;

pub use api_error::{ApiError, BackendErrorBody};
pub use assessment_api::{AssessmentApi, AssessmentListItem, NewAssessment, StoredAssessment};
pub use automated_check_service::AutomatedCheckService;
pub use pagination::{Page, PageRequest, SortBy};
pub use session_context::SessionContext;
pub use validation_api::{ValidationApi, ValidationStatusUpdate};
