//! In-memory implementation of the AssessmentApi port.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::assessment::{Assessment, Template};
use crate::domain::foundation::{ActorId, AssessmentId, TemplateTypeId};
use crate::ports::{
    ApiError, AssessmentApi, AssessmentListItem, NewAssessment, Page, PageRequest, SessionContext,
    SortBy, StoredAssessment,
};

/// Stores templates and assessments in memory.
///
/// Assessments are listed in creation order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssessmentApi {
    templates: Arc<RwLock<HashMap<(TemplateTypeId, ActorId), Template>>>,
    assessments: Arc<RwLock<Vec<StoredAssessment>>>,
}

impl InMemoryAssessmentApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the template served for its type and actor.
    pub async fn insert_template(&self, template: Template) {
        let key = (template.template_type.id.clone(), template.actor.id.clone());
        self.templates.write().await.insert(key, template);
    }

    /// Stores an assessment as-is, replacing one with the same id.
    pub async fn insert_assessment(&self, stored: StoredAssessment) {
        let mut assessments = self.assessments.write().await;
        assessments.retain(|a| a.id != stored.id);
        assessments.push(stored);
    }

    pub async fn len(&self) -> usize {
        self.assessments.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.assessments.read().await.is_empty()
    }
}

fn not_found(id: &AssessmentId) -> ApiError {
    ApiError::NotFound(format!("assessment {}", id))
}

#[async_trait]
impl AssessmentApi for InMemoryAssessmentApi {
    async fn get_template(
        &self,
        _ctx: &SessionContext,
        template_type: &TemplateTypeId,
        actor: &ActorId,
    ) -> Result<Template, ApiError> {
        self.templates
            .read()
            .await
            .get(&(template_type.clone(), actor.clone()))
            .cloned()
            .ok_or_else(|| {
                ApiError::NotFound(format!("template {} for actor {}", template_type, actor))
            })
    }

    async fn create_assessment(
        &self,
        _ctx: &SessionContext,
        assessment: &NewAssessment,
    ) -> Result<StoredAssessment, ApiError> {
        let id = AssessmentId::new(uuid::Uuid::new_v4().to_string())
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
        let now = Utc::now();
        let stored = StoredAssessment {
            id: id.clone(),
            assessment_doc: Assessment {
                id: Some(id),
                ..assessment.assessment_doc.clone()
            },
            validation_id: Some(assessment.validation_id.clone()),
            template_id: Some(assessment.template_id.clone()),
            shared_to_user: false,
            created_on: Some(now),
            updated_on: Some(now),
        };
        self.assessments.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn update_assessment(
        &self,
        _ctx: &SessionContext,
        id: &AssessmentId,
        doc: &Assessment,
    ) -> Result<StoredAssessment, ApiError> {
        let mut assessments = self.assessments.write().await;
        let stored = assessments
            .iter_mut()
            .find(|a| &a.id == id)
            .ok_or_else(|| not_found(id))?;
        stored.assessment_doc = Assessment {
            id: Some(id.clone()),
            ..doc.clone()
        };
        stored.updated_on = Some(Utc::now());
        Ok(stored.clone())
    }

    async fn get_assessment(
        &self,
        _ctx: &SessionContext,
        id: &AssessmentId,
    ) -> Result<StoredAssessment, ApiError> {
        self.assessments
            .read()
            .await
            .iter()
            .find(|a| &a.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    async fn list_assessments(
        &self,
        _ctx: &SessionContext,
        request: &PageRequest,
    ) -> Result<Page<AssessmentListItem>, ApiError> {
        let mut items: Vec<AssessmentListItem> = self
            .assessments
            .read()
            .await
            .iter()
            .map(AssessmentListItem::summarize)
            .collect();
        if request.sort_by == Some(SortBy::Desc) {
            items.reverse();
        }
        Ok(Page::slice(&items, request))
    }

    async fn delete_assessment(&self, _ctx: &SessionContext, id: &AssessmentId) -> Result<(), ApiError> {
        let mut assessments = self.assessments.write().await;
        let before = assessments.len();
        assessments.retain(|a| &a.id != id);
        if assessments.len() == before {
            return Err(not_found(id));
        }
        Ok(())
    }
}
