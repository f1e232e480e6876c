//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use serde_json::{json, Value};

use fair_assessment::domain::assessment::{Template, TestPath};
use fair_assessment::domain::foundation::{
    ActorId, CriterionId, OrganisationId, PrincipleId, TestId, ValidationId,
};
use fair_assessment::domain::validation::{
    Validation, ValidationOrganisation, ValidationStatus,
};
use fair_assessment::domain::assessment::Actor;

/// Template document as served by the backend.
pub fn template_json() -> Value {
    json!({
        "id": "TPL-1",
        "type": { "id": 1, "name": "FAIR" },
        "actor": { "id": 6, "name": "PID Manager" },
        "template_doc": {
            "name": "",
            "published": true,
            "assessment_type": { "id": "1", "name": "FAIR" },
            "subject": {},
            "result": { "compliance": null, "ranking": null },
            "principles": [
                {
                    "id": "P1",
                    "name": "Findable",
                    "criteria": [
                        {
                            "id": "C1",
                            "name": "Persistent identifiers",
                            "imperative": "must",
                            "metric": {
                                "type": "number",
                                "algorithm": "single",
                                "benchmark": { "equal_greater_than": 1 },
                                "tests": [
                                    {
                                        "id": "T1",
                                        "name": "Uses PIDs",
                                        "type": "binary",
                                        "text": "Does the service assign PIDs?",
                                        "value": null,
                                        "result": null
                                    }
                                ]
                            }
                        },
                        {
                            "id": "C2",
                            "name": "Resolution",
                            "imperative": "should",
                            "metric": {
                                "type": "number",
                                "algorithm": "sum",
                                "benchmark": { "equal_greater_than": 2 },
                                "tests": [
                                    {
                                        "id": "T2",
                                        "name": "Resolvable PIDs",
                                        "type": "value",
                                        "text": "Share of resolvable PIDs",
                                        "unit": "%",
                                        "benchmark": { "equal_greater_than": 80 },
                                        "value": null,
                                        "result": null
                                    },
                                    {
                                        "id": "T3",
                                        "name": "Response time",
                                        "type": "value-param",
                                        "text": "Median resolution time",
                                        "unit": "ms",
                                        "threshold_name": "Target",
                                        "benchmark": { "equal_less_than": "threshold" },
                                        "threshold": null,
                                        "value": null,
                                        "result": null
                                    }
                                ]
                            }
                        }
                    ]
                },
                {
                    "id": "P2",
                    "name": "Accessible",
                    "criteria": [
                        {
                            "id": "C3",
                            "name": "Metadata harvesting",
                            "imperative": "may",
                            "metric": {
                                "type": "number",
                                "algorithm": "single",
                                "benchmark": { "equal_greater_than": 1 },
                                "tests": [
                                    {
                                        "id": "T4",
                                        "name": "OAI-PMH endpoint",
                                        "type": "auto-validate-metadata",
                                        "metadata_url": null,
                                        "result": null
                                    }
                                ]
                            }
                        },
                        {
                            "id": "C4",
                            "name": "Secure access",
                            "imperative": "must",
                            "metric": {
                                "type": "number",
                                "algorithm": "single",
                                "benchmark": { "equal_greater_than": 1 },
                                "tests": [
                                    {
                                        "id": "T5",
                                        "name": "HTTPS",
                                        "type": "auto-check-url",
                                        "url": null,
                                        "result": null
                                    }
                                ]
                            }
                        }
                    ]
                }
            ]
        }
    })
}

pub fn template() -> Template {
    serde_json::from_value(template_json()).expect("template fixture must deserialize")
}

pub fn approved_validation(id: &str, actor: &str, org: &str) -> Validation {
    Validation {
        id: ValidationId::new(id).unwrap(),
        user_id: None,
        organisation: ValidationOrganisation {
            id: OrganisationId::new(org).unwrap(),
            name: format!("Org {}", org),
            role: Some("provider".to_string()),
            source: None,
            website: None,
        },
        actor: Actor {
            id: ActorId::new(actor).unwrap(),
            name: "PID Manager".to_string(),
        },
        status: ValidationStatus::Approved,
        created_on: None,
        validated_on: None,
        validated_by: None,
        rejection_reason: None,
    }
}

pub fn path(p: &str, c: &str, t: &str) -> TestPath {
    TestPath::new(
        PrincipleId::new(p).unwrap(),
        CriterionId::new(c).unwrap(),
        TestId::new(t).unwrap(),
    )
}
