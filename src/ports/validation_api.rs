//! Validation API port - the actor/organisation validation workflow.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{ApiError, Page, PageRequest, SessionContext};
use crate::domain::foundation::ValidationId;
use crate::domain::validation::{Validation, ValidationStatus};

/// Body of a validation status update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationStatusUpdate {
    pub status: ValidationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

/// Port for the validation endpoints.
#[async_trait]
pub trait ValidationApi: Send + Sync {
    /// Fetch one page of the caller's validation requests.
    async fn list_validations(
        &self,
        ctx: &SessionContext,
        request: &PageRequest,
    ) -> Result<Page<Validation>, ApiError>;

    /// Fetch one validation request.
    async fn get_validation(
        &self,
        ctx: &SessionContext,
        id: &ValidationId,
    ) -> Result<Validation, ApiError>;

    /// Change the status of a validation request (administrators only).
    ///
    /// # Errors
    ///
    /// - `Forbidden` if the caller may not review validations
    /// - `NotFound` if the validation does not exist
    async fn update_validation_status(
        &self,
        ctx: &SessionContext,
        id: &ValidationId,
        update: &ValidationStatusUpdate,
    ) -> Result<Validation, ApiError>;
}
