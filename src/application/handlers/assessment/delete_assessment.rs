//! DeleteAssessmentHandler - Command handler for removing an assessment.

use std::sync::Arc;

use crate::domain::foundation::{AssessmentId, DomainError};
use crate::ports::{AssessmentApi, SessionContext};

/// Command to delete an assessment.
#[derive(Debug, Clone)]
pub struct DeleteAssessmentCommand {
    pub id: AssessmentId,
}

/// Handler for deleting assessments.
pub struct DeleteAssessmentHandler {
    api: Arc<dyn AssessmentApi>,
}

impl DeleteAssessmentHandler {
    pub fn new(api: Arc<dyn AssessmentApi>) -> Self {
        Self { api }
    }

    pub async fn handle(
        &self,
        ctx: &SessionContext,
        cmd: DeleteAssessmentCommand,
    ) -> Result<(), DomainError> {
        self.api.delete_assessment(ctx, &cmd.id).await?;
        tracing::info!(assessment_id = %cmd.id, "Assessment deleted");
        Ok(())
    }
}
