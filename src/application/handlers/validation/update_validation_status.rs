//! UpdateValidationStatusHandler - Command handler for reviewing validations.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationId};
use crate::domain::validation::{Validation, ValidationStatus};
use crate::ports::{ApiError, SessionContext, ValidationApi, ValidationStatusUpdate};

/// Command to move a validation to a new status.
#[derive(Debug, Clone)]
pub struct UpdateValidationStatusCommand {
    pub id: ValidationId,
    pub status: ValidationStatus,
    pub rejection_reason: Option<String>,
}

/// Handler for validation status changes.
///
/// Checks the workflow locally before calling the backend.
pub struct UpdateValidationStatusHandler {
    api: Arc<dyn ValidationApi>,
}

impl UpdateValidationStatusHandler {
    pub fn new(api: Arc<dyn ValidationApi>) -> Self {
        Self { api }
    }

    pub async fn handle(
        &self,
        ctx: &SessionContext,
        cmd: UpdateValidationStatusCommand,
    ) -> Result<Validation, DomainError> {
        let not_found = |e: ApiError| match e {
            ApiError::NotFound(message) => DomainError::new(ErrorCode::ValidationNotFound, message)
                .with_detail("validation_id", cmd.id.as_str()),
            other => other.into(),
        };

        let current = self
            .api
            .get_validation(ctx, &cmd.id)
            .await
            .map_err(not_found)?;
        current.ensure_transition(cmd.status, cmd.rejection_reason.as_deref())?;

        let update = ValidationStatusUpdate {
            status: cmd.status,
            rejection_reason: cmd
                .rejection_reason
                .clone()
                .filter(|_| cmd.status == ValidationStatus::Rejected),
        };
        let updated = self
            .api
            .update_validation_status(ctx, &cmd.id, &update)
            .await
            .map_err(not_found)?;

        tracing::info!(validation_id = %cmd.id, from = %current.status, to = %updated.status, "Validation status changed");
        Ok(updated)
    }
}
