//! Assessment API port - templates and stored assessments.
//!
//! Mirrors the backend endpoints:
//!
//! - `GET /templates/by-type/{type}/by-actor/{actor}`
//! - `POST /assessments`, `PUT /assessments/{id}`, `GET /assessments/{id}`
//! - `GET /assessments?size&page&sortby`
//! - `DELETE /assessments/{id}`

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ApiError, Page, PageRequest, SessionContext};
use crate::domain::assessment::{Assessment, Template};
use crate::domain::foundation::{
    ActorId, AssessmentId, TemplateId, TemplateTypeId, ValidationId,
};

/// Body of `POST /assessments`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAssessment {
    pub validation_id: ValidationId,
    pub template_id: TemplateId,
    pub assessment_doc: Assessment,
}

/// An assessment as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredAssessment {
    pub id: AssessmentId,
    pub assessment_doc: Assessment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_id: Option<ValidationId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<TemplateId>,
    #[serde(default)]
    pub shared_to_user: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_on: Option<DateTime<Utc>>,
}

/// Summary projection returned by the assessment listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentListItem {
    pub id: AssessmentId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub compliance: Option<bool>,
    #[serde(default)]
    pub ranking: Option<f64>,
    #[serde(default)]
    pub published: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organisation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_id: Option<ValidationId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<TemplateId>,
    #[serde(default)]
    pub shared_to_user: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_on: Option<DateTime<Utc>>,
}

impl AssessmentListItem {
    /// Builds the summary projection of a stored assessment.
    pub fn summarize(stored: &StoredAssessment) -> Self {
        let doc = &stored.assessment_doc;
        Self {
            id: stored.id.clone(),
            name: doc.name.clone(),
            compliance: doc.result.compliance,
            ranking: doc.result.ranking,
            published: doc.published,
            subject_name: Some(doc.subject.name.clone()).filter(|s| !s.is_empty()),
            subject_type: Some(doc.subject.subject_type.clone()).filter(|s| !s.is_empty()),
            organisation: doc.organisation.as_ref().map(|o| o.name.clone()),
            validation_id: stored.validation_id.clone(),
            template_id: stored.template_id.clone(),
            shared_to_user: stored.shared_to_user,
            created_on: stored.created_on,
            updated_on: stored.updated_on,
        }
    }
}

/// Port for the assessment backend.
#[async_trait]
pub trait AssessmentApi: Send + Sync {
    /// Fetch the template for a template type and actor.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no template exists for the pair
    async fn get_template(
        &self,
        ctx: &SessionContext,
        template_type: &TemplateTypeId,
        actor: &ActorId,
    ) -> Result<Template, ApiError>;

    /// Store a new assessment.
    async fn create_assessment(
        &self,
        ctx: &SessionContext,
        assessment: &NewAssessment,
    ) -> Result<StoredAssessment, ApiError>;

    /// Replace the document of an existing assessment.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the assessment does not exist
    async fn update_assessment(
        &self,
        ctx: &SessionContext,
        id: &AssessmentId,
        doc: &Assessment,
    ) -> Result<StoredAssessment, ApiError>;

    /// Fetch one assessment.
    async fn get_assessment(
        &self,
        ctx: &SessionContext,
        id: &AssessmentId,
    ) -> Result<StoredAssessment, ApiError>;

    /// Fetch one page of the caller's assessments.
    async fn list_assessments(
        &self,
        ctx: &SessionContext,
        request: &PageRequest,
    ) -> Result<Page<AssessmentListItem>, ApiError>;

    /// Delete an assessment.
    async fn delete_assessment(&self, ctx: &SessionContext, id: &AssessmentId) -> Result<(), ApiError>;
}
