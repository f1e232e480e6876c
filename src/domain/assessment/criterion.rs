//! Criterion and Principle - the compliance requirements of an assessment.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::metric::{Metric, MetricResult};
use crate::domain::foundation::{CriterionId, PrincipleId};

/// Imperative keyword of a criterion, kept as written in the template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Imperative(String);

impl Imperative {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self(keyword.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `should` and `must` (any case) are mandatory; anything else is optional.
    pub fn is_mandatory(&self) -> bool {
        let keyword = self.0.trim();
        keyword.eq_ignore_ascii_case("should") || keyword.eq_ignore_ascii_case("must")
    }
}

impl fmt::Display for Imperative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single compliance requirement with exactly one metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub id: CriterionId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub imperative: Imperative,
    pub metric: Metric,
}

impl Criterion {
    pub fn new(
        id: CriterionId,
        name: impl Into<String>,
        imperative: Imperative,
        metric: Metric,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            imperative,
            metric,
        }
    }

    pub fn is_mandatory(&self) -> bool {
        self.imperative.is_mandatory()
    }

    /// The stored metric verdict.
    pub fn result(&self) -> Option<MetricResult> {
        self.metric.result
    }

    /// Returns a copy with a different metric.
    pub(crate) fn with_metric(&self, metric: Metric) -> Criterion {
        Criterion {
            metric,
            ..self.clone()
        }
    }
}

/// Thematic grouping of criteria. Has no influence on evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Principle {
    pub id: PrincipleId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub criteria: Vec<Criterion>,
}

impl Principle {
    pub fn new(id: PrincipleId, name: impl Into<String>, criteria: Vec<Criterion>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            criteria,
        }
    }

    pub fn criterion(&self, id: &CriterionId) -> Option<&Criterion> {
        self.criteria.iter().find(|c| &c.id == id)
    }

    /// Returns a copy with the criterion at `index` replaced.
    pub(crate) fn with_criterion(&self, index: usize, criterion: Criterion) -> Principle {
        let mut criteria = self.criteria.clone();
        if let Some(slot) = criteria.get_mut(index) {
            *slot = criterion;
        }
        Principle {
            criteria,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_and_must_are_mandatory_in_any_case() {
        for keyword in ["should", "must", "SHOULD", "Must", " must "] {
            assert!(Imperative::new(keyword).is_mandatory(), "{}", keyword);
        }
    }

    #[test]
    fn other_keywords_are_optional() {
        for keyword in ["may", "MAY", "could", ""] {
            assert!(!Imperative::new(keyword).is_mandatory(), "{:?}", keyword);
        }
    }

    #[test]
    fn imperative_keeps_original_spelling() {
        let imperative: Imperative = serde_json::from_str("\"MUST\"").unwrap();
        assert_eq!(imperative.as_str(), "MUST");
        assert_eq!(serde_json::to_string(&imperative).unwrap(), "\"MUST\"");
    }
}
