//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors)
//! - `assessment` - Assessment tree and the pure evaluation engine
//! - `checks` - Automated check requests and outcomes
//! - `validation` - Actor/organisation validation workflow

pub mod assessment;
pub mod checks;
pub mod foundation;
pub mod validation;
