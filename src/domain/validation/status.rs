//! ValidationStatus enum - workflow state of a validation request.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow state of a validation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationStatus {
    /// Submitted, not yet looked at.
    Pending,
    /// Under review by an administrator.
    Review,
    /// Accepted; the actor/organisation pair may create assessments.
    Approved,
    /// Refused.
    Rejected,
}

impl ValidationStatus {
    /// Returns true if the status is final.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ValidationStatus::Approved | ValidationStatus::Rejected)
    }

    /// Returns true if the workflow allows moving to `target`.
    pub fn can_transition_to(&self, target: ValidationStatus) -> bool {
        use ValidationStatus::*;
        matches!(
            (self, target),
            (Pending, Review) | (Pending, Approved) | (Pending, Rejected) | (Review, Approved) | (Review, Rejected)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationStatus::Pending => "PENDING",
            ValidationStatus::Review => "REVIEW",
            ValidationStatus::Approved => "APPROVED",
            ValidationStatus::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
