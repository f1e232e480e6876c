//! HTTP adapter - reqwest client for the assessment backend.
//!
//! One [`HttpApiClient`] implements every backend port:
//!
//! - [`AssessmentApi`](crate::ports::AssessmentApi) for templates and assessments
//! - [`ValidationApi`](crate::ports::ValidationApi) for the validation workflow
//! - [`AutomatedCheckService`](crate::ports::AutomatedCheckService) for `/v1/automated/*`

mod assessment_api;
mod check_service;
mod client;
mod validation_api;

pub use client::HttpApiClient;
