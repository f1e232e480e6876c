//! Validation workflow - which actor/organisation pairs may create assessments.
//!
//! A user requests to act as an actor on behalf of an organisation. Only an
//! approved validation makes that pair eligible for new assessments.

mod status;

pub use status::ValidationStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::assessment::{Actor, Organisation};
use crate::domain::foundation::{DomainError, ErrorCode, OrganisationId, UserId, ValidationId};

/// Organisation as described in a validation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOrganisation {
    pub id: OrganisationId,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// A validation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Validation {
    pub id: ValidationId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    pub organisation: ValidationOrganisation,
    pub actor: Actor,
    pub status: ValidationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validated_on: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validated_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

/// An actor/organisation pair allowed to create assessments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibleActor {
    pub validation_id: ValidationId,
    pub actor: Actor,
    pub organisation: Organisation,
}

impl Validation {
    pub fn is_eligible_for_assessment(&self) -> bool {
        self.status == ValidationStatus::Approved
    }

    /// The eligible pair, if approved.
    pub fn eligible_actor(&self) -> Option<EligibleActor> {
        self.is_eligible_for_assessment().then(|| EligibleActor {
            validation_id: self.id.clone(),
            actor: self.actor.clone(),
            organisation: Organisation {
                id: self.organisation.id.clone(),
                name: self.organisation.name.clone(),
            },
        })
    }

    /// Checks that a status change is allowed.
    ///
    /// # Errors
    ///
    /// - `InvalidStatusTransition` if the workflow forbids the change
    /// - `ValidationFailed` if a rejection carries no reason
    pub fn ensure_transition(
        &self,
        to: ValidationStatus,
        rejection_reason: Option<&str>,
    ) -> Result<(), DomainError> {
        if !self.status.can_transition_to(to) {
            return Err(DomainError::new(
                ErrorCode::InvalidStatusTransition,
                format!("Cannot move validation {} from {} to {}", self.id, self.status, to),
            ));
        }
        if to == ValidationStatus::Rejected
            && rejection_reason.map(str::trim).unwrap_or_default().is_empty()
        {
            return Err(DomainError::validation(
                "rejection_reason",
                "A rejected validation needs a reason",
            ));
        }
        Ok(())
    }
}

/// Collects the eligible pairs, dropping duplicates of the same actor and organisation.
pub fn eligible_actors(validations: &[Validation]) -> Vec<EligibleActor> {
    let mut eligible: Vec<EligibleActor> = Vec::new();
    for candidate in validations.iter().filter_map(Validation::eligible_actor) {
        let duplicate = eligible.iter().any(|e| {
            e.actor.id == candidate.actor.id && e.organisation.id == candidate.organisation.id
        });
        if !duplicate {
            eligible.push(candidate);
        }
    }
    eligible
}
