//! Metric - aggregation of a criterion's tests into one verdict.

use serde::{Deserialize, Serialize};

use super::test::{Benchmark, BenchmarkValue, ComparisonMode, Test, TestResult};

/// Value type of a metric. Only numeric metrics exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricType {
    #[default]
    Number,
}

/// How test results combine into the metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// The metric mirrors its only test.
    #[default]
    Single,
    /// Test results are summed and compared against the metric benchmark.
    Sum,
}

/// Pass/fail verdict of a metric, serialized as `1`/`0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum MetricResult {
    Pass,
    Fail,
}

impl MetricResult {
    pub fn from_verdict(passed: bool) -> Self {
        if passed {
            MetricResult::Pass
        } else {
            MetricResult::Fail
        }
    }

    pub fn is_pass(self) -> bool {
        self == MetricResult::Pass
    }

    /// Numeric contribution to a ranking sum.
    pub fn as_f64(self) -> f64 {
        match self {
            MetricResult::Pass => 1.0,
            MetricResult::Fail => 0.0,
        }
    }
}

impl From<MetricResult> for i8 {
    fn from(result: MetricResult) -> Self {
        match result {
            MetricResult::Pass => 1,
            MetricResult::Fail => 0,
        }
    }
}

impl TryFrom<i8> for MetricResult {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MetricResult::Pass),
            0 => Ok(MetricResult::Fail),
            other => Err(format!("invalid metric result {}", other)),
        }
    }
}

/// Output of [`eval_metric`].
///
/// `answered`/`total` let callers tell an in-progress metric (`result` is
/// `None`, `answered < total`) from a failing one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricEvaluation {
    pub result: Option<MetricResult>,
    pub value: Option<f64>,
    pub answered: usize,
    pub total: usize,
}

impl MetricEvaluation {
    /// Returns true when every test carries a verdict.
    pub fn is_complete(&self) -> bool {
        self.answered == self.total
    }

    /// Share of answered tests, `1.0` for a metric without tests.
    pub fn fill_ratio(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.answered as f64 / self.total as f64
        }
    }
}

/// The measurement attached to a criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    #[serde(rename = "type", default)]
    pub metric_type: MetricType,
    #[serde(default)]
    pub algorithm: Algorithm,
    #[serde(default)]
    pub benchmark: Benchmark,
    #[serde(default)]
    pub tests: Vec<Test>,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub result: Option<MetricResult>,
}

impl Metric {
    /// Creates a metric with no stored outcome.
    pub fn new(algorithm: Algorithm, benchmark: Benchmark, tests: Vec<Test>) -> Self {
        Self {
            metric_type: MetricType::Number,
            algorithm,
            benchmark,
            tests,
            value: None,
            result: None,
        }
    }

    /// Evaluates the metric from its tests.
    pub fn evaluate(&self) -> MetricEvaluation {
        eval_metric(self)
    }

    /// Returns a copy with every test result re-derived from its input and
    /// `value`/`result` reflecting those tests.
    pub fn recomputed(&self) -> Metric {
        let rederived = Metric {
            tests: self.tests.iter().map(Test::rederived).collect(),
            ..self.clone()
        };
        let evaluation = rederived.evaluate();
        Metric {
            value: evaluation.value,
            result: evaluation.result,
            ..rederived
        }
    }

    /// Returns a recomputed copy with the test at `index` replaced.
    pub(crate) fn with_test(&self, index: usize, test: Test) -> Metric {
        let mut tests = self.tests.clone();
        if let Some(slot) = tests.get_mut(index) {
            *slot = test;
        }
        Metric {
            tests,
            ..self.clone()
        }
        .recomputed()
    }

    /// Returns true when every test result follows from its input and the
    /// stored outcome matches a fresh evaluation.
    pub fn is_consistent(&self) -> bool {
        let evaluation = self.evaluate();
        self.tests.iter().all(|t| t.result == t.derive_result())
            && evaluation.result == self.result
            && evaluation.value == self.value
    }
}

/// Evaluates a metric. Pure: identical input gives identical output.
pub fn eval_metric(metric: &Metric) -> MetricEvaluation {
    let total = metric.tests.len();
    let answered = metric.tests.iter().filter(|t| t.is_answered()).count();

    match metric.algorithm {
        Algorithm::Single => eval_single(metric, answered, total),
        Algorithm::Sum => eval_sum(metric, answered, total),
    }
}

fn eval_single(metric: &Metric, answered: usize, total: usize) -> MetricEvaluation {
    let result = match metric.tests.first().and_then(|t| t.result) {
        Some(TestResult::Pass) => Some(MetricResult::Pass),
        Some(TestResult::Fail) => Some(MetricResult::Fail),
        Some(TestResult::CheckFailed) | None => None,
    };
    let value = metric.tests.first().and_then(|test| match result {
        Some(_) => test.numeric_value().or(result.map(MetricResult::as_f64)),
        None => None,
    });

    MetricEvaluation {
        result,
        value,
        answered,
        total,
    }
}

fn eval_sum(metric: &Metric, answered: usize, total: usize) -> MetricEvaluation {
    let value: f64 = metric
        .tests
        .iter()
        .filter_map(|t| match t.result {
            Some(TestResult::Pass) => Some(1.0),
            Some(TestResult::Fail) => Some(0.0),
            Some(TestResult::CheckFailed) | None => None,
        })
        .sum();

    let result = if answered == total {
        metric
            .benchmark
            .resolve(&ComparisonMode::ALL)
            .and_then(|(mode, benchmark)| match benchmark {
                BenchmarkValue::Number(threshold) => {
                    Some(MetricResult::from_verdict(mode.holds(value, threshold)))
                }
                BenchmarkValue::Threshold => None,
            })
    } else {
        None
    };

    MetricEvaluation {
        result,
        value: Some(value),
        answered,
        total,
    }
}
