//! Assessment module - the evaluation core.
//!
//! Data flows strictly bottom-up:
//!
//! - `test` - leaf measurements and their result derivation
//! - `metric` - aggregation of a criterion's tests (`single` / `sum`)
//! - `evaluator` - compliance and ranking over all criteria
//! - `document` - the assessment tree and its replace-on-edit operations
//! - `template` - seed documents for new assessments
//!
//! Everything here is pure: no I/O, no shared state.

mod criterion;
mod document;
mod evaluator;
mod metric;
mod template;

pub use criterion::{Criterion, Imperative, Principle};
pub use document::{Actor, Assessment, AssessmentType, Organisation, Subject, TestPath};
pub use evaluator::{AssessmentEvaluator, AssessmentResult, AssessmentStatistics};
pub use metric::{eval_metric, Algorithm, Metric, MetricEvaluation, MetricResult, MetricType};
pub use template::{AssessmentSeed, Template, TemplateType};
pub use test::{
    parse_numeric_input, Benchmark, BenchmarkValue, BinaryTest, ComparisonMode, EvidenceUrl,
    MetadataCheckTest, NumericInput, ProviderCheckTest, Test, TestAnswer, TestKind, TestResult,
    UrlCheckTest, ValueTest,
};

#[cfg(test)]
pub(crate) use document::fixtures;
