//! In-memory implementation of the ValidationApi port.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::ValidationId;
use crate::domain::validation::{Validation, ValidationStatus};
use crate::ports::{
    ApiError, Page, PageRequest, SessionContext, ValidationApi, ValidationStatusUpdate,
};

/// Stores validation requests in memory.
///
/// Status updates follow the same workflow rules the backend enforces and
/// answer a forbidden transition with a 409 backend error.
#[derive(Debug, Clone, Default)]
pub struct InMemoryValidationApi {
    validations: Arc<RwLock<Vec<Validation>>>,
}

impl InMemoryValidationApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_validations(validations: Vec<Validation>) -> Self {
        Self {
            validations: Arc::new(RwLock::new(validations)),
        }
    }

    pub async fn insert(&self, validation: Validation) {
        let mut validations = self.validations.write().await;
        validations.retain(|v| v.id != validation.id);
        validations.push(validation);
    }
}

fn not_found(id: &ValidationId) -> ApiError {
    ApiError::NotFound(format!("validation {}", id))
}

#[async_trait]
impl ValidationApi for InMemoryValidationApi {
    async fn list_validations(
        &self,
        _ctx: &SessionContext,
        request: &PageRequest,
    ) -> Result<Page<Validation>, ApiError> {
        let validations = self.validations.read().await;
        Ok(Page::slice(validations.as_slice(), request))
    }

    async fn get_validation(
        &self,
        _ctx: &SessionContext,
        id: &ValidationId,
    ) -> Result<Validation, ApiError> {
        self.validations
            .read()
            .await
            .iter()
            .find(|v| &v.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn update_validation_status(
        &self,
        ctx: &SessionContext,
        id: &ValidationId,
        update: &ValidationStatusUpdate,
    ) -> Result<Validation, ApiError> {
        let mut validations = self.validations.write().await;
        let validation = validations
            .iter_mut()
            .find(|v| &v.id == id)
            .ok_or_else(|| not_found(id))?;

        validation
            .ensure_transition(update.status, update.rejection_reason.as_deref())
            .map_err(|e| ApiError::backend(409, e.message))?;

        validation.status = update.status;
        validation.rejection_reason = match update.status {
            ValidationStatus::Rejected => update.rejection_reason.clone(),
            _ => None,
        };
        if update.status.is_terminal() {
            validation.validated_on = Some(Utc::now());
            validation.validated_by = ctx.user_id().map(|u| u.to_string());
        }
        Ok(validation.clone())
    }
}
