//! Adapters - Implementations of port interfaces.
//!
//! - `http` - reqwest client for the assessment backend
//! - `mock` - in-memory and scripted implementations for tests

pub mod http;
pub mod mock;

pub use http::HttpApiClient;
pub use mock::{InMemoryAssessmentApi, InMemoryValidationApi, MockCheckResponse, MockCheckService};
