//! Assessment - the document recording one subject's compliance evaluation.
//!
//! The document is edited by replacement: every edit rebuilds the path from
//! the changed test up to the root and re-evaluates the whole tree, so the
//! stored `result` is always a function of the current principles.

use serde::{Deserialize, Serialize};

use super::criterion::Principle;
use super::evaluator::{AssessmentEvaluator, AssessmentResult, AssessmentStatistics};
use super::test::{Test, TestAnswer};
use crate::domain::checks::CheckOutcome;
use crate::domain::foundation::{
    ActorId, AssessmentId, CriterionId, DomainError, ErrorCode, OrganisationId, PrincipleId,
    TestId,
};

/// What is being assessed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub subject_type: String,
}

/// Role under which the assessment is made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    #[serde(default)]
    pub name: String,
}

/// Organisation the assessment belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organisation {
    pub id: OrganisationId,
    #[serde(default)]
    pub name: String,
}

/// Kind of assessment the document was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentType {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Location of a test inside the principle tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TestPath {
    pub principle: PrincipleId,
    pub criterion: CriterionId,
    pub test: TestId,
}

impl TestPath {
    pub fn new(principle: PrincipleId, criterion: CriterionId, test: TestId) -> Self {
        Self {
            principle,
            criterion,
            test,
        }
    }

    fn not_found(&self) -> DomainError {
        DomainError::new(ErrorCode::TestNotFound, format!("Test {} not found", self.test))
            .with_detail("principle", self.principle.as_str())
            .with_detail("criterion", self.criterion.as_str())
    }
}

/// The assessment document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<AssessmentId>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub published: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assessment_type: Option<AssessmentType>,
    #[serde(default)]
    pub subject: Subject,
    #[serde(default)]
    pub actor: Option<Actor>,
    #[serde(default)]
    pub organisation: Option<Organisation>,
    #[serde(default)]
    pub result: AssessmentResult,
    #[serde(default)]
    pub principles: Vec<Principle>,
}

impl Assessment {
    /// Creates an unpublished document and evaluates it.
    pub fn new(name: impl Into<String>, principles: Vec<Principle>) -> Self {
        Self {
            id: None,
            name: name.into(),
            version: None,
            status: None,
            published: false,
            timestamp: None,
            assessment_type: None,
            subject: Subject::default(),
            actor: None,
            organisation: None,
            result: AssessmentResult::default(),
            principles,
        }
        .recompute()
    }

    /// Evaluates the tree as currently stored.
    pub fn evaluate(&self) -> AssessmentResult {
        AssessmentEvaluator::evaluate(&self.principles)
    }

    pub fn statistics(&self) -> AssessmentStatistics {
        AssessmentEvaluator::statistics(&self.principles)
    }

    /// Returns a copy with every metric and the overall result recomputed.
    pub fn recompute(&self) -> Assessment {
        let principles: Vec<Principle> = self
            .principles
            .iter()
            .map(|p| Principle {
                criteria: p
                    .criteria
                    .iter()
                    .map(|c| c.with_metric(c.metric.recomputed()))
                    .collect(),
                ..p.clone()
            })
            .collect();

        Assessment {
            result: AssessmentEvaluator::evaluate(&principles),
            principles,
            ..self.clone()
        }
    }

    /// True when every stored metric outcome and the result match a fresh evaluation.
    pub fn is_consistent(&self) -> bool {
        self.principles
            .iter()
            .flat_map(|p| p.criteria.iter())
            .all(|c| c.metric.is_consistent())
            && self.evaluate() == self.result
    }

    /// Iterates every test with its path, in document order.
    pub fn tests(&self) -> impl Iterator<Item = (TestPath, &Test)> {
        self.principles.iter().flat_map(|p| {
            p.criteria.iter().flat_map(move |c| {
                c.metric.tests.iter().map(move |t| {
                    (
                        TestPath::new(p.id.clone(), c.id.clone(), t.id.clone()),
                        t,
                    )
                })
            })
        })
    }

    /// Finds the first test with the given id.
    pub fn locate_test(&self, id: &TestId) -> Option<TestPath> {
        self.tests().find(|(_, t)| &t.id == id).map(|(path, _)| path)
    }

    pub fn find_test(&self, path: &TestPath) -> Option<&Test> {
        self.principles
            .iter()
            .find(|p| p.id == path.principle)?
            .criterion(&path.criterion)?
            .metric
            .tests
            .iter()
            .find(|t| t.id == path.test)
    }

    /// Replaces one test and returns the re-evaluated document.
    ///
    /// The metric of the owning criterion is recomputed, the criterion and
    /// principle are rebuilt, and the overall result is evaluated over the
    /// whole updated tree.
    ///
    /// # Errors
    ///
    /// - `TestNotFound` if the path does not resolve
    /// - whatever `edit` returns
    pub fn update_test<F>(&self, path: &TestPath, edit: F) -> Result<Assessment, DomainError>
    where
        F: FnOnce(&Test) -> Result<Test, DomainError>,
    {
        let p_idx = self
            .principles
            .iter()
            .position(|p| p.id == path.principle)
            .ok_or_else(|| path.not_found())?;
        let principle = &self.principles[p_idx];

        let c_idx = principle
            .criteria
            .iter()
            .position(|c| c.id == path.criterion)
            .ok_or_else(|| path.not_found())?;
        let criterion = &principle.criteria[c_idx];

        let t_idx = criterion
            .metric
            .tests
            .iter()
            .position(|t| t.id == path.test)
            .ok_or_else(|| path.not_found())?;

        let test = edit(&criterion.metric.tests[t_idx])?;
        let criterion = criterion.with_metric(criterion.metric.with_test(t_idx, test));
        let principle = principle.with_criterion(c_idx, criterion);

        let mut principles = self.principles.clone();
        principles[p_idx] = principle;

        Ok(Assessment {
            result: AssessmentEvaluator::evaluate(&principles),
            principles,
            ..self.clone()
        })
    }

    /// Applies a user answer to one test.
    pub fn answer_test(
        &self,
        path: &TestPath,
        answer: TestAnswer,
    ) -> Result<Assessment, DomainError> {
        self.update_test(path, |test| test.answer(answer).map_err(DomainError::from))
    }

    /// Records the outcome of an automated check on one test.
    pub fn apply_check_outcome(
        &self,
        path: &TestPath,
        outcome: &CheckOutcome,
    ) -> Result<Assessment, DomainError> {
        self.update_test(path, |test| outcome.apply_to(test).map_err(DomainError::from))
    }
}
