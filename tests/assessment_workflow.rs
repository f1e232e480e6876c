//! Integration tests for the assessment workflow.
//!
//! These tests drive the application layer end to end:
//! 1. Resolve the actor/organisation pairs the user may assess as
//! 2. Create an assessment from the actor's template
//! 3. Answer tests and run automated checks in the wizard
//! 4. Save, reload and list the assessment
//!
//! Uses the in-memory and mock adapters, so no backend is needed.

mod common;

use std::sync::Arc;

use fair_assessment::adapters::{
    InMemoryAssessmentApi, InMemoryValidationApi, MockCheckResponse, MockCheckService,
};
use fair_assessment::application::{
    AssessmentWizard, CreateAssessmentCommand, CreateAssessmentHandler, GetAssessmentHandler,
    GetAssessmentQuery, ListAssessmentsHandler, ListAssessmentsQuery, ListEligibleActorsHandler,
};
use fair_assessment::config::ChecksConfig;
use fair_assessment::domain::assessment::{
    AssessmentResult, Subject, TestAnswer, TestKind, TestResult,
};
use fair_assessment::domain::checks::CheckRequest;
use fair_assessment::domain::foundation::TemplateTypeId;
use fair_assessment::ports::{PageRequest, SessionContext, StoredAssessment};

use common::{approved_validation, path, template};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct Backend {
    assessments: Arc<InMemoryAssessmentApi>,
    validations: Arc<InMemoryValidationApi>,
    checks: MockCheckService,
    ctx: SessionContext,
}

impl Backend {
    async fn new() -> Self {
        let assessments = Arc::new(InMemoryAssessmentApi::new());
        assessments.insert_template(template()).await;

        let validations = Arc::new(InMemoryValidationApi::with_validations(vec![
            approved_validation("V-1", "6", "ORG-1"),
        ]));

        let checks = MockCheckService::new()
            .with_response_for(
                CheckRequest::Metadata {
                    mode: "oai-pmh".to_string(),
                    metadata_url: "https://repo.example.org/oai".to_string(),
                },
                MockCheckResponse::passed(),
            )
            .with_response_for(
                CheckRequest::HttpsUrl {
                    url: "http://repo.example.org".to_string(),
                },
                MockCheckResponse::failed("certificate missing"),
            );

        Self {
            assessments,
            validations,
            checks,
            ctx: SessionContext::new("test-token"),
        }
    }

    async fn create(&self) -> StoredAssessment {
        let eligible = ListEligibleActorsHandler::new(self.validations.clone(), 10)
            .handle(&self.ctx)
            .await
            .unwrap();
        assert_eq!(eligible.len(), 1);

        CreateAssessmentHandler::new(self.assessments.clone())
            .handle(
                &self.ctx,
                CreateAssessmentCommand {
                    template_type: TemplateTypeId::new("1").unwrap(),
                    eligible: eligible[0].clone(),
                    name: "Example repository".to_string(),
                    subject: Subject {
                        id: "https://repo.example.org".to_string(),
                        name: "Example repository".to_string(),
                        subject_type: "repository".to_string(),
                    },
                },
            )
            .await
            .unwrap()
    }

    fn wizard(&self, stored: StoredAssessment) -> AssessmentWizard {
        AssessmentWizard::open(
            stored,
            self.assessments.clone(),
            Arc::new(self.checks.clone()),
            self.ctx.clone(),
            &ChecksConfig::default(),
        )
    }
}

fn result_of(wizard: &AssessmentWizard, p: &str, c: &str, t: &str) -> Option<TestResult> {
    wizard
        .document()
        .find_test(&path(p, c, t))
        .and_then(|test| test.result)
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn new_assessment_starts_unanswered() {
    let backend = Backend::new().await;
    let stored = backend.create().await;
    let doc = &stored.assessment_doc;

    assert_eq!(doc.name, "Example repository");
    assert_eq!(doc.subject.subject_type, "repository");
    assert_eq!(doc.organisation.as_ref().map(|o| o.id.as_str()), Some("ORG-1"));
    assert!(!doc.published);
    assert_eq!(doc.result, AssessmentResult::default());
    assert_eq!(stored.validation_id.as_ref().map(|v| v.as_str()), Some("V-1"));

    let stats = doc.statistics();
    assert_eq!((stats.total_mandatory, stats.total_optional), (3, 1));
    assert_eq!(stats.mandatory_filled, 0);
}

#[tokio::test]
async fn full_assessment_reaches_compliance() {
    let backend = Backend::new().await;
    let stored = backend.create().await;
    let mut wizard = backend.wizard(stored);

    wizard
        .answer(&path("P1", "C1", "T1"), TestAnswer::Binary(Some(true)))
        .unwrap();
    wizard
        .answer(&path("P1", "C2", "T2"), TestAnswer::Numeric("95".to_string()))
        .unwrap();
    wizard
        .answer(&path("P1", "C2", "T3"), TestAnswer::Threshold("200".to_string()))
        .unwrap();
    wizard
        .answer(&path("P1", "C2", "T3"), TestAnswer::Numeric("150.5".to_string()))
        .unwrap();
    assert_eq!(result_of(&wizard, "P1", "C2", "T3"), Some(TestResult::Pass));

    // C4 is still open, so compliance cannot be decided yet.
    assert_eq!(wizard.result().compliance, None);

    wizard
        .answer(
            &path("P2", "C3", "T4"),
            TestAnswer::CheckInput("https://repo.example.org/oai".to_string()),
        )
        .unwrap();
    wizard
        .answer(
            &path("P2", "C4", "T5"),
            TestAnswer::CheckInput("https://repo.example.org".to_string()),
        )
        .unwrap();
    wizard.run_check(&path("P2", "C3", "T4")).unwrap();
    wizard.run_check(&path("P2", "C4", "T5")).unwrap();

    assert_eq!(wizard.settle().await, 2);
    assert_eq!(
        wizard.result(),
        AssessmentResult {
            compliance: Some(true),
            ranking: Some(1.0),
        }
    );
    assert!(wizard.statistics().is_filled());

    let calls = backend.checks.calls();
    assert!(calls.contains(&CheckRequest::Metadata {
        mode: "oai-pmh".to_string(),
        metadata_url: "https://repo.example.org/oai".to_string(),
    }));

    let saved = wizard.save().await.unwrap();
    assert_eq!(saved.assessment_doc.result.compliance, Some(true));

    let listed = ListAssessmentsHandler::new(backend.assessments.clone())
        .handle(
            &backend.ctx,
            ListAssessmentsQuery {
                page: PageRequest::new(1, 10),
            },
        )
        .await
        .unwrap();
    assert_eq!(listed.content.len(), 1);
    assert_eq!(listed.content[0].compliance, Some(true));
    assert_eq!(listed.content[0].ranking, Some(1.0));
    assert_eq!(listed.content[0].organisation.as_deref(), Some("Org ORG-1"));
}

#[tokio::test]
async fn failing_https_check_breaks_compliance() {
    let backend = Backend::new().await;
    let stored = backend.create().await;
    let mut wizard = backend.wizard(stored);

    wizard
        .answer(&path("P1", "C1", "T1"), TestAnswer::Binary(Some(true)))
        .unwrap();
    wizard
        .answer(&path("P1", "C2", "T2"), TestAnswer::Numeric("10".to_string()))
        .unwrap();
    wizard
        .answer(&path("P1", "C2", "T3"), TestAnswer::Threshold("100".to_string()))
        .unwrap();
    wizard
        .answer(&path("P1", "C2", "T3"), TestAnswer::Numeric("50".to_string()))
        .unwrap();
    wizard
        .answer(
            &path("P2", "C4", "T5"),
            TestAnswer::CheckInput("http://repo.example.org".to_string()),
        )
        .unwrap();
    wizard.run_check(&path("P2", "C4", "T5")).unwrap();
    wizard.settle().await;

    assert_eq!(result_of(&wizard, "P2", "C4", "T5"), Some(TestResult::Fail));
    assert_eq!(result_of(&wizard, "P1", "C2", "T2"), Some(TestResult::Fail));
    assert_eq!(wizard.result().compliance, Some(false));
    // The optional criterion was never checked.
    assert_eq!(wizard.result().ranking, None);

    let message = wizard
        .document()
        .find_test(&path("P2", "C4", "T5"))
        .and_then(|t| match &t.kind {
            TestKind::AutoCheckUrl(u) => u.message.clone(),
            _ => None,
        });
    assert_eq!(message.as_deref(), Some("certificate missing"));
}

#[tokio::test]
async fn reloaded_assessment_matches_saved_document() {
    let backend = Backend::new().await;
    let stored = backend.create().await;
    let id = stored.id.clone();
    let mut wizard = backend.wizard(stored);

    wizard
        .answer(&path("P1", "C1", "T1"), TestAnswer::Binary(Some(false)))
        .unwrap();
    let saved = wizard.save().await.unwrap();

    let loaded = GetAssessmentHandler::new(backend.assessments.clone())
        .handle(&backend.ctx, GetAssessmentQuery { id })
        .await
        .unwrap();

    assert_eq!(loaded.assessment_doc, saved.assessment_doc);
    assert_eq!(loaded.assessment_doc.result.compliance, Some(false));
    assert!(loaded.assessment_doc.is_consistent());
}

#[tokio::test]
async fn zero_value_leaves_test_unanswered() {
    let backend = Backend::new().await;
    let stored = backend.create().await;
    let mut wizard = backend.wizard(stored);

    wizard
        .answer(&path("P1", "C2", "T2"), TestAnswer::Numeric("42".to_string()))
        .unwrap();
    assert_eq!(result_of(&wizard, "P1", "C2", "T2"), Some(TestResult::Fail));

    wizard
        .answer(&path("P1", "C2", "T2"), TestAnswer::Numeric("0".to_string()))
        .unwrap();
    assert_eq!(result_of(&wizard, "P1", "C2", "T2"), None);

    wizard
        .answer(&path("P1", "C2", "T2"), TestAnswer::Numeric("".to_string()))
        .unwrap();
    assert_eq!(result_of(&wizard, "P1", "C2", "T2"), None);
}
