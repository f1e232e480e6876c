//! AssessmentWizard - the editing session of one assessment document.
//!
//! Holds the current document and a [`CheckRunner`]. User answers are applied
//! synchronously through the immutable path edit; automated checks run in the
//! background and are folded in by [`AssessmentWizard::apply_completions`].

use std::sync::Arc;
use tokio::sync::mpsc;

use super::check_runner::{CheckCompletion, CheckRunner};
use crate::application::handlers::{SaveAssessmentCommand, SaveAssessmentHandler};
use crate::config::ChecksConfig;
use crate::domain::assessment::{
    Assessment, AssessmentResult, AssessmentStatistics, TestAnswer, TestPath,
};
use crate::domain::checks::CheckRequest;
use crate::domain::foundation::{AssessmentId, CheckRunId, DomainError, ErrorCode, TestId};
use crate::ports::{AssessmentApi, AutomatedCheckService, SessionContext, StoredAssessment};

/// Editing session for one assessment.
pub struct AssessmentWizard {
    id: AssessmentId,
    doc: Assessment,
    api: Arc<dyn AssessmentApi>,
    ctx: SessionContext,
    runner: CheckRunner,
    completions: mpsc::UnboundedReceiver<CheckCompletion>,
    metadata_mode: String,
}

impl AssessmentWizard {
    /// Opens a stored assessment for editing.
    pub fn open(
        stored: StoredAssessment,
        api: Arc<dyn AssessmentApi>,
        checks: Arc<dyn AutomatedCheckService>,
        ctx: SessionContext,
        config: &ChecksConfig,
    ) -> Self {
        let (runner, completions) = CheckRunner::new(checks, ctx.clone(), config.timeout());
        Self {
            id: stored.id,
            doc: stored.assessment_doc.recompute(),
            api,
            ctx,
            runner,
            completions,
            metadata_mode: config.metadata_mode.clone(),
        }
    }

    pub fn id(&self) -> &AssessmentId {
        &self.id
    }

    pub fn document(&self) -> &Assessment {
        &self.doc
    }

    pub fn result(&self) -> AssessmentResult {
        self.doc.result
    }

    pub fn statistics(&self) -> AssessmentStatistics {
        self.doc.statistics()
    }

    /// Finds a test by id anywhere in the tree.
    pub fn locate(&self, test_id: &TestId) -> Result<TestPath, DomainError> {
        self.doc.locate_test(test_id).ok_or_else(|| {
            DomainError::new(ErrorCode::TestNotFound, format!("Test {} not found", test_id))
        })
    }

    /// Applies a user answer.
    ///
    /// Changing the input of an automated test cancels its running check,
    /// since that check was started for the old input.
    pub fn answer(&mut self, path: &TestPath, answer: TestAnswer) -> Result<(), DomainError> {
        let changes_check_input = matches!(answer, TestAnswer::CheckInput(_));
        self.doc = self.doc.answer_test(path, answer)?;
        if changes_check_input {
            self.runner.cancel(&path.test);
        }
        Ok(())
    }

    /// Starts the automated check of a test.
    ///
    /// The test's stored result is left as is until the run completes.
    ///
    /// # Errors
    ///
    /// - `TestNotFound` if the path does not resolve
    /// - `NotAutomated` if the test is answered by hand
    /// - `EmptyField` if the check input has not been filled in
    pub fn run_check(&mut self, path: &TestPath) -> Result<CheckRunId, DomainError> {
        let test = self.doc.find_test(path).ok_or_else(|| {
            DomainError::new(ErrorCode::TestNotFound, format!("Test {} not found", path.test))
        })?;
        if !test.is_automated() {
            return Err(DomainError::new(
                ErrorCode::NotAutomated,
                format!("Test {} is not an automated check", path.test),
            ));
        }

        let request = CheckRequest::for_test(test, &self.metadata_mode)?;
        Ok(self.runner.start(path.clone(), request))
    }

    /// Aborts the running check of a test, keeping its previous result.
    pub fn cancel_check(&mut self, test_id: &TestId) -> bool {
        self.runner.cancel(test_id)
    }

    /// The "check running" state of a test.
    pub fn is_check_running(&self, test_id: &TestId) -> bool {
        self.runner.is_running(test_id)
    }

    /// Applies every queued completion. Returns how many were applied.
    pub fn apply_completions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.completions.try_recv() {
            applied += usize::from(self.apply(completion));
        }
        applied
    }

    /// Waits for every running check and applies the completions.
    pub async fn settle(&mut self) -> usize {
        let mut applied = self.apply_completions();
        while self.runner.has_running() {
            match self.completions.recv().await {
                Some(completion) => applied += usize::from(self.apply(completion)),
                None => break,
            }
        }
        applied + self.apply_completions()
    }

    fn apply(&mut self, completion: CheckCompletion) -> bool {
        let test_id = &completion.path.test;
        if self
            .runner
            .current_run(test_id)
            .is_some_and(|current| current != completion.run_id)
        {
            tracing::debug!(
                test_id = %test_id,
                run_id = %completion.run_id,
                "Skipping superseded completion"
            );
            return false;
        }

        // A result only holds for the input it was run on.
        let current_input = self
            .doc
            .find_test(&completion.path)
            .and_then(|test| CheckRequest::for_test(test, &self.metadata_mode).ok());
        if current_input.as_ref() != Some(&completion.request) {
            tracing::debug!(
                test_id = %test_id,
                run_id = %completion.run_id,
                "Skipping completion for changed check input"
            );
            return false;
        }

        match self.doc.apply_check_outcome(&completion.path, &completion.outcome) {
            Ok(doc) => {
                self.doc = doc;
                tracing::debug!(
                    test_id = %test_id,
                    result = ?completion.outcome.result(),
                    "Applied check outcome"
                );
                true
            }
            Err(err) => {
                tracing::warn!(test_id = %test_id, error = %err, "Could not apply check outcome");
                false
            }
        }
    }

    /// Stores the current document, after folding in finished checks.
    pub async fn save(&mut self) -> Result<StoredAssessment, DomainError> {
        self.apply_completions();
        let stored = SaveAssessmentHandler::new(Arc::clone(&self.api))
            .handle(
                &self.ctx,
                SaveAssessmentCommand {
                    id: self.id.clone(),
                    doc: self.doc.clone(),
                },
            )
            .await?;
        self.doc = stored.assessment_doc.clone();
        Ok(stored)
    }
}
