//! `ValidationApi` over HTTP.

use async_trait::async_trait;
use reqwest::Method;

use super::client::HttpApiClient;
use crate::domain::foundation::ValidationId;
use crate::domain::validation::Validation;
use crate::ports::{
    ApiError, Page, PageRequest, SessionContext, ValidationApi, ValidationStatusUpdate,
};

pub(super) fn status_path(id: &ValidationId) -> String {
    format!("/validations/{}/update-status", id)
}

#[async_trait]
impl ValidationApi for HttpApiClient {
    async fn list_validations(
        &self,
        ctx: &SessionContext,
        request: &PageRequest,
    ) -> Result<Page<Validation>, ApiError> {
        self.send_json(
            self.request(ctx, Method::GET, "/validations")
                .query(&request.query()),
        )
        .await
    }

    async fn get_validation(
        &self,
        ctx: &SessionContext,
        id: &ValidationId,
    ) -> Result<Validation, ApiError> {
        self.send_json(self.request(ctx, Method::GET, &format!("/validations/{}", id)))
            .await
    }

    async fn update_validation_status(
        &self,
        ctx: &SessionContext,
        id: &ValidationId,
        update: &ValidationStatusUpdate,
    ) -> Result<Validation, ApiError> {
        tracing::info!(validation_id = %id, status = %update.status, "Updating validation status");
        self.send_json(self.request(ctx, Method::PUT, &status_path(id)).json(update))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_path_targets_update_endpoint() {
        let id = ValidationId::new("42").unwrap();
        assert_eq!(status_path(&id), "/validations/42/update-status");
    }
}
