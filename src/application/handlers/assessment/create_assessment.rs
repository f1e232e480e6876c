//! CreateAssessmentHandler - Command handler for starting a new assessment.

use std::sync::Arc;

use crate::domain::assessment::{AssessmentSeed, Subject};
use crate::domain::foundation::{DomainError, ErrorCode, TemplateTypeId};
use crate::domain::validation::EligibleActor;
use crate::ports::{ApiError, AssessmentApi, NewAssessment, SessionContext, StoredAssessment};

/// Command to create an assessment from the template of an eligible actor.
#[derive(Debug, Clone)]
pub struct CreateAssessmentCommand {
    pub template_type: TemplateTypeId,
    pub eligible: EligibleActor,
    pub name: String,
    pub subject: Subject,
}

/// Handler for creating assessments.
pub struct CreateAssessmentHandler {
    api: Arc<dyn AssessmentApi>,
}

impl CreateAssessmentHandler {
    pub fn new(api: Arc<dyn AssessmentApi>) -> Self {
        Self { api }
    }

    pub async fn handle(
        &self,
        ctx: &SessionContext,
        cmd: CreateAssessmentCommand,
    ) -> Result<StoredAssessment, DomainError> {
        if cmd.name.trim().is_empty() {
            return Err(DomainError::validation("name", "Assessment name is required"));
        }

        // 1. Fetch the template for the actor
        let template = self
            .api
            .get_template(ctx, &cmd.template_type, &cmd.eligible.actor.id)
            .await
            .map_err(|e| match e {
                ApiError::NotFound(message) => {
                    DomainError::new(ErrorCode::TemplateNotFound, message)
                        .with_detail("template_type", cmd.template_type.as_str())
                        .with_detail("actor", cmd.eligible.actor.id.as_str())
                }
                other => other.into(),
            })?;

        // 2. Build the document
        let doc = template.instantiate(AssessmentSeed {
            name: cmd.name,
            subject: cmd.subject,
            organisation: cmd.eligible.organisation,
        });

        // 3. Persist
        let stored = self
            .api
            .create_assessment(
                ctx,
                &NewAssessment {
                    validation_id: cmd.eligible.validation_id,
                    template_id: template.id,
                    assessment_doc: doc,
                },
            )
            .await?;

        tracing::info!(assessment_id = %stored.id, "Assessment created");
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryAssessmentApi;
    use crate::application::handlers::assessment::test_support::{eligible, template};
    use crate::domain::foundation::{ActorId, ValidationId};

    fn command() -> CreateAssessmentCommand {
        CreateAssessmentCommand {
            template_type: TemplateTypeId::new("1").unwrap(),
            eligible: eligible(),
            name: "Repository assessment".to_string(),
            subject: Subject {
                id: "https://repo.example.org".to_string(),
                name: "Example repository".to_string(),
                subject_type: "service".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn creates_assessment_from_template() {
        let api = Arc::new(InMemoryAssessmentApi::new());
        api.insert_template(template()).await;
        let handler = CreateAssessmentHandler::new(api.clone());

        let stored = handler
            .handle(&SessionContext::new("token"), command())
            .await
            .unwrap();

        assert_eq!(stored.validation_id, Some(ValidationId::new("V-1").unwrap()));
        assert_eq!(stored.assessment_doc.name, "Repository assessment");
        assert_eq!(
            stored.assessment_doc.actor.as_ref().map(|a| a.id.clone()),
            Some(ActorId::new("6").unwrap())
        );
        assert!(stored.assessment_doc.tests().all(|(_, t)| t.result.is_none()));
        assert_eq!(api.len().await, 1);
    }

    #[tokio::test]
    async fn missing_template_is_reported() {
        let handler = CreateAssessmentHandler::new(Arc::new(InMemoryAssessmentApi::new()));
        let err = handler
            .handle(&SessionContext::new("token"), command())
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::TemplateNotFound);
    }

    #[tokio::test]
    async fn blank_name_is_rejected() {
        let handler = CreateAssessmentHandler::new(Arc::new(InMemoryAssessmentApi::new()));
        let cmd = CreateAssessmentCommand {
            name: "  ".to_string(),
            ..command()
        };
        let err = handler
            .handle(&SessionContext::new("token"), cmd)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }
}
