//! Template - seed document for new assessments.

use serde::{Deserialize, Serialize};

use super::criterion::Principle;
use super::document::{Actor, Assessment, Organisation, Subject};
use crate::domain::foundation::{TemplateId, TemplateTypeId};

/// Kind of template (e.g. the FAIR assessment type).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateType {
    pub id: TemplateTypeId,
    #[serde(default)]
    pub name: String,
}

/// A template as served by `GET /templates/by-type/{type}/by-actor/{actor}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: TemplateId,
    #[serde(rename = "type")]
    pub template_type: TemplateType,
    pub actor: Actor,
    pub template_doc: Assessment,
}

/// Header fields the user supplies when starting an assessment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentSeed {
    pub name: String,
    pub subject: Subject,
    pub organisation: Organisation,
}

impl Template {
    /// Builds a fresh, unanswered assessment from this template.
    pub fn instantiate(&self, seed: AssessmentSeed) -> Assessment {
        let principles = self
            .template_doc
            .principles
            .iter()
            .map(|p| Principle {
                criteria: p
                    .criteria
                    .iter()
                    .map(|c| {
                        let mut criterion = c.clone();
                        criterion.metric.tests =
                            c.metric.tests.iter().map(|t| t.cleared()).collect();
                        criterion
                    })
                    .collect(),
                ..p.clone()
            })
            .collect();

        Assessment {
            id: None,
            name: seed.name,
            published: false,
            timestamp: None,
            subject: seed.subject,
            actor: Some(self.actor.clone()),
            organisation: Some(seed.organisation),
            principles,
            ..self.template_doc.clone()
        }
        .recompute()
    }
}
