//! Assessment Evaluator - compliance and ranking over all criteria.
//!
//! Criteria are partitioned by imperative. Mandatory criteria decide
//! `compliance` (all must pass); optional criteria add up to `ranking`.
//! Principle grouping plays no part.

use serde::{Deserialize, Serialize};

use super::criterion::{Criterion, Principle};
use super::metric::MetricResult;

/// Overall verdict of an assessment.
///
/// `None` means "not yet determinable" and is never the same as `false`/`0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    #[serde(default)]
    pub compliance: Option<bool>,
    #[serde(default)]
    pub ranking: Option<f64>,
}

/// Progress counters per imperative bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentStatistics {
    pub total_mandatory: usize,
    pub total_optional: usize,
    /// Mandatory criteria with a verdict.
    pub mandatory_filled: usize,
    /// Optional criteria with a verdict.
    pub optional_filled: usize,
    /// Mandatory criteria that pass.
    pub mandatory: usize,
    /// Optional criteria that pass.
    pub optional: usize,
}

impl AssessmentStatistics {
    pub fn mandatory_fill_ratio(&self) -> f64 {
        ratio(self.mandatory_filled, self.total_mandatory)
    }

    pub fn optional_fill_ratio(&self) -> f64 {
        ratio(self.optional_filled, self.total_optional)
    }

    pub fn mandatory_pass_ratio(&self) -> f64 {
        ratio(self.mandatory, self.total_mandatory)
    }

    pub fn optional_pass_ratio(&self) -> f64 {
        ratio(self.optional, self.total_optional)
    }

    /// True once every criterion in both buckets has a verdict.
    pub fn is_filled(&self) -> bool {
        self.mandatory_filled == self.total_mandatory && self.optional_filled == self.total_optional
    }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        1.0
    } else {
        part as f64 / whole as f64
    }
}

/// Stateless evaluator over a principle tree.
pub struct AssessmentEvaluator;

impl AssessmentEvaluator {
    /// Computes compliance and ranking from the stored metric results.
    ///
    /// # Edge Cases
    /// - No mandatory criteria: compliance is `Some(true)`
    /// - No optional criteria: ranking is `Some(0.0)`
    pub fn evaluate(principles: &[Principle]) -> AssessmentResult {
        let (mandatory, optional): (Vec<&Criterion>, Vec<&Criterion>) =
            Self::criteria(principles).partition(|c| c.is_mandatory());

        AssessmentResult {
            compliance: Self::compliance(&mandatory),
            ranking: Self::ranking(&optional),
        }
    }

    /// Computes the progress counters.
    pub fn statistics(principles: &[Principle]) -> AssessmentStatistics {
        Self::criteria(principles).fold(AssessmentStatistics::default(), |mut stats, criterion| {
            let filled = criterion.result().is_some() as usize;
            let passed = criterion.result().is_some_and(MetricResult::is_pass) as usize;
            if criterion.is_mandatory() {
                stats.total_mandatory += 1;
                stats.mandatory_filled += filled;
                stats.mandatory += passed;
            } else {
                stats.total_optional += 1;
                stats.optional_filled += filled;
                stats.optional += passed;
            }
            stats
        })
    }

    fn criteria(principles: &[Principle]) -> impl Iterator<Item = &Criterion> {
        principles.iter().flat_map(|p| p.criteria.iter())
    }

    fn compliance(mandatory: &[&Criterion]) -> Option<bool> {
        mandatory
            .iter()
            .map(|c| c.result())
            .collect::<Option<Vec<_>>>()
            .map(|results| results.into_iter().all(MetricResult::is_pass))
    }

    fn ranking(optional: &[&Criterion]) -> Option<f64> {
        optional
            .iter()
            .try_fold(0.0, |sum, c| c.result().map(|r| sum + r.as_f64()))
    }
}
