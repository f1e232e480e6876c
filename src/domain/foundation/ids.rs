//! Strongly-typed identifier value objects.
//!
//! Backend identifiers are opaque strings. Some endpoints emit them as JSON
//! numbers, so deserialization accepts both forms and normalizes to a string.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Unsigned(u64),
    Signed(i64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => s,
            RawId::Unsigned(n) => n.to_string(),
            RawId::Signed(n) => n.to_string(),
        }
    }
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            #[doc = concat!("Creates a new `", stringify!($name), "`, returning error if empty.")]
            pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
                let id = id.into();
                if id.trim().is_empty() {
                    return Err(ValidationError::empty_field($field));
                }
                Ok(Self(id))
            }

            /// Returns the inner string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = RawId::deserialize(deserializer)?;
                Ok(Self(raw.into()))
            }
        }
    };
}

string_id!(
    /// Identifier of a stored assessment.
    AssessmentId,
    "assessment_id"
);
string_id!(
    /// Identifier of an assessment template.
    TemplateId,
    "template_id"
);
string_id!(
    /// Identifier of a template type (e.g. the FAIR assessment type).
    TemplateTypeId,
    "template_type_id"
);
string_id!(
    /// Identifier of a principle within an assessment document.
    PrincipleId,
    "principle_id"
);
string_id!(
    /// Identifier of a criterion within an assessment document.
    CriterionId,
    "criterion_id"
);
string_id!(
    /// Identifier of a test within an assessment document.
    TestId,
    "test_id"
);
string_id!(
    /// Identifier of an actor/organisation validation request.
    ValidationId,
    "validation_id"
);
string_id!(
    /// Identifier of an actor role (e.g. service provider, end user).
    ActorId,
    "actor_id"
);
string_id!(
    /// Identifier of an organisation.
    OrganisationId,
    "organisation_id"
);
string_id!(
    /// Identifier of a registered user.
    UserId,
    "user_id"
);

/// Unique identifier for one run of an automated check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckRunId(Uuid);

impl CheckRunId {
    /// Creates a new random CheckRunId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CheckRunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CheckRunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_id_rejects_empty() {
        assert!(TestId::new("").is_err());
        assert!(TestId::new("   ").is_err());
        assert!(TestId::new("T1").is_ok());
    }

    #[test]
    fn string_id_deserializes_from_number_or_string() {
        let from_number: ValidationId = serde_json::from_str("42").unwrap();
        let from_string: ValidationId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(from_number, from_string);
        assert_eq!(from_number.as_str(), "42");
    }

    #[test]
    fn string_id_serializes_transparently() {
        let id = CriterionId::new("C6").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"C6\"");
    }

    #[test]
    fn check_run_ids_are_unique() {
        assert_ne!(CheckRunId::new(), CheckRunId::new());
    }
}
