//! `AssessmentApi` over HTTP.

use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;

use super::client::HttpApiClient;
use crate::domain::assessment::{Assessment, Template};
use crate::domain::foundation::{ActorId, AssessmentId, TemplateTypeId};
use crate::ports::{
    ApiError, AssessmentApi, AssessmentListItem, NewAssessment, Page, PageRequest, SessionContext,
    StoredAssessment,
};

#[derive(Serialize)]
struct UpdateAssessmentBody<'a> {
    assessment_doc: &'a Assessment,
}

pub(super) fn template_path(template_type: &TemplateTypeId, actor: &ActorId) -> String {
    format!("/templates/by-type/{}/by-actor/{}", template_type, actor)
}

pub(super) fn assessment_path(id: &AssessmentId) -> String {
    format!("/assessments/{}", id)
}

#[async_trait]
impl AssessmentApi for HttpApiClient {
    async fn get_template(
        &self,
        ctx: &SessionContext,
        template_type: &TemplateTypeId,
        actor: &ActorId,
    ) -> Result<Template, ApiError> {
        tracing::debug!(%template_type, %actor, "Fetching assessment template");
        self.send_json(self.request(ctx, Method::GET, &template_path(template_type, actor)))
            .await
    }

    async fn create_assessment(
        &self,
        ctx: &SessionContext,
        assessment: &NewAssessment,
    ) -> Result<StoredAssessment, ApiError> {
        tracing::debug!(
            validation_id = %assessment.validation_id,
            template_id = %assessment.template_id,
            "Creating assessment"
        );
        self.send_json(self.request(ctx, Method::POST, "/assessments").json(assessment))
            .await
    }

    async fn update_assessment(
        &self,
        ctx: &SessionContext,
        id: &AssessmentId,
        doc: &Assessment,
    ) -> Result<StoredAssessment, ApiError> {
        tracing::debug!(assessment_id = %id, "Updating assessment");
        let body = UpdateAssessmentBody { assessment_doc: doc };
        self.send_json(self.request(ctx, Method::PUT, &assessment_path(id)).json(&body))
            .await
    }

    async fn get_assessment(
        &self,
        ctx: &SessionContext,
        id: &AssessmentId,
    ) -> Result<StoredAssessment, ApiError> {
        self.send_json(self.request(ctx, Method::GET, &assessment_path(id)))
            .await
    }

    async fn list_assessments(
        &self,
        ctx: &SessionContext,
        request: &PageRequest,
    ) -> Result<Page<AssessmentListItem>, ApiError> {
        self.send_json(
            self.request(ctx, Method::GET, "/assessments")
                .query(&request.query()),
        )
        .await
    }

    async fn delete_assessment(&self, ctx: &SessionContext, id: &AssessmentId) -> Result<(), ApiError> {
        tracing::debug!(assessment_id = %id, "Deleting assessment");
        self.send_empty(self.request(ctx, Method::DELETE, &assessment_path(id)))
            .await
    }
}
