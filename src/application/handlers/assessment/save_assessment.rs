//! SaveAssessmentHandler - Command handler for storing an edited assessment.

use std::sync::Arc;

use crate::domain::assessment::Assessment;
use crate::domain::foundation::{AssessmentId, DomainError};
use crate::ports::{AssessmentApi, SessionContext, StoredAssessment};

/// Command to replace the document of a stored assessment.
#[derive(Debug, Clone)]
pub struct SaveAssessmentCommand {
    pub id: AssessmentId,
    pub doc: Assessment,
}

/// Handler for saving assessments.
///
/// The document is re-evaluated before it leaves the process, so the stored
/// `result` always matches the stored principles.
pub struct SaveAssessmentHandler {
    api: Arc<dyn AssessmentApi>,
}

impl SaveAssessmentHandler {
    pub fn new(api: Arc<dyn AssessmentApi>) -> Self {
        Self { api }
    }

    pub async fn handle(
        &self,
        ctx: &SessionContext,
        cmd: SaveAssessmentCommand,
    ) -> Result<StoredAssessment, DomainError> {
        let doc = cmd.doc.recompute();
        let stored = self.api.update_assessment(ctx, &cmd.id, &doc).await?;
        tracing::debug!(
            assessment_id = %cmd.id,
            compliance = ?doc.result.compliance,
            ranking = ?doc.result.ranking,
            "Assessment saved"
        );
        Ok(stored)
    }
}
