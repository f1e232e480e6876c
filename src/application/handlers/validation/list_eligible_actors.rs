//! ListEligibleActorsHandler - Query handler for the wizard's actor step.

use std::sync::Arc;

use super::super::pagination::collect_all_pages;
use crate::domain::foundation::DomainError;
use crate::domain::validation::{eligible_actors, EligibleActor};
use crate::ports::{PageRequest, SessionContext, ValidationApi};

/// Handler listing the actor/organisation pairs the caller may assess as.
///
/// Reads every page of the caller's validations and keeps the approved ones.
pub struct ListEligibleActorsHandler {
    api: Arc<dyn ValidationApi>,
    page_size: u32,
}

impl ListEligibleActorsHandler {
    pub fn new(api: Arc<dyn ValidationApi>, page_size: u32) -> Self {
        Self { api, page_size }
    }

    pub async fn handle(&self, ctx: &SessionContext) -> Result<Vec<EligibleActor>, DomainError> {
        let api = &self.api;
        let validations = collect_all_pages(PageRequest::new(1, self.page_size), |request| async move {
            api.list_validations(ctx, &request).await
        })
        .await?;

        let eligible = eligible_actors(&validations);
        tracing::debug!(
            validations = validations.len(),
            eligible = eligible.len(),
            "Resolved eligible actors"
        );
        Ok(eligible)
    }
}
