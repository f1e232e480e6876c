//! ListAssessmentsHandler - Query handler for the assessment listing.

use std::sync::Arc;

use super::super::pagination::collect_all_pages;
use crate::domain::foundation::DomainError;
use crate::ports::{AssessmentApi, AssessmentListItem, Page, PageRequest, SessionContext};

/// Query for the caller's assessments.
#[derive(Debug, Clone)]
pub struct ListAssessmentsQuery {
    pub page: PageRequest,
}

/// Handler for listing assessments.
pub struct ListAssessmentsHandler {
    api: Arc<dyn AssessmentApi>,
}

impl ListAssessmentsHandler {
    pub fn new(api: Arc<dyn AssessmentApi>) -> Self {
        Self { api }
    }

    /// One page of summaries.
    pub async fn handle(
        &self,
        ctx: &SessionContext,
        query: ListAssessmentsQuery,
    ) -> Result<Page<AssessmentListItem>, DomainError> {
        Ok(self.api.list_assessments(ctx, &query.page).await?)
    }

    /// Every summary, fetched page by page starting at `query.page`.
    pub async fn handle_all(
        &self,
        ctx: &SessionContext,
        query: ListAssessmentsQuery,
    ) -> Result<Vec<AssessmentListItem>, DomainError> {
        let api = &self.api;
        let items = collect_all_pages(query.page, |request| async move {
            api.list_assessments(ctx, &request).await
        })
        .await?;
        Ok(items)
    }
}
