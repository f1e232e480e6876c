//! GetAssessmentHandler - Query handler for loading one assessment.

use std::sync::Arc;

use crate::domain::foundation::{AssessmentId, DomainError};
use crate::ports::{AssessmentApi, SessionContext, StoredAssessment};

/// Query for one assessment.
#[derive(Debug, Clone)]
pub struct GetAssessmentQuery {
    pub id: AssessmentId,
}

/// Handler for loading assessments.
///
/// A stored document whose `result` disagrees with its principles is
/// re-evaluated on load.
pub struct GetAssessmentHandler {
    api: Arc<dyn AssessmentApi>,
}

impl GetAssessmentHandler {
    pub fn new(api: Arc<dyn AssessmentApi>) -> Self {
        Self { api }
    }

    pub async fn handle(
        &self,
        ctx: &SessionContext,
        query: GetAssessmentQuery,
    ) -> Result<StoredAssessment, DomainError> {
        let mut stored = self.api.get_assessment(ctx, &query.id).await?;

        if !stored.assessment_doc.is_consistent() {
            tracing::warn!(assessment_id = %query.id, "Stored assessment out of date, re-evaluating");
            stored.assessment_doc = stored.assessment_doc.recompute();
        }
        Ok(stored)
    }
}
