//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers and error types that form the vocabulary of the
//! assessment domain.

mod errors;
mod ids;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{
    ActorId, AssessmentId, CheckRunId, CriterionId, OrganisationId, PrincipleId, TemplateId,
    TemplateTypeId, TestId, UserId, ValidationId,
};
