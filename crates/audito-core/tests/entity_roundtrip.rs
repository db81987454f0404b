//! Serde roundtrip and JsonSchema validation tests for all entity types.

use audito_core::defaults::default_checklists;
use audito_core::entities::*;
use chrono::{TimeZone, Utc};
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn sample_audit() -> Audit {
    Audit {
        id: "aud-a3f8b2c1".into(),
        name: "Q1 Review".into(),
        standard: "ISO 9001".into(),
        checklist: vec![ChecklistResult {
            id: "9001-1".into(),
            text: "Existe un proceso documentado".into(),
            weight: 3.0,
            passed: true,
        }],
        score: Some(Score {
            total_achieved: 3.0,
            total_possible: 3.0,
            percent: 100.0,
        }),
        notes: String::new(),
        auditor: "Jane".into(),
        created_at_audit: "2026-03-01T09:00:00Z".into(),
        created_at: Utc.with_ymd_and_hms(2026, 3, 1, 9, 5, 0).unwrap(),
        created_by: "usr-0000aaaa".into(),
    }
}

roundtrip_and_validate!(audit_roundtrip, Audit, sample_audit());

roundtrip_and_validate!(
    new_audit_roundtrip,
    NewAudit,
    NewAudit {
        name: "Q1 Review".into(),
        standard: "ISO 14001".into(),
        checklist: vec![],
        score: None,
        notes: Some("Sin hallazgos".into()),
        auditor: None,
        created_at_audit: None,
    }
);

roundtrip_and_validate!(
    user_roundtrip,
    User,
    User {
        id: "usr-0000aaaa".into(),
        name: "Admin".into(),
        email: "admin@example.com".into(),
        password_hash: "$2b$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy".into(),
        role: UserRole::Admin,
    }
);

roundtrip_and_validate!(
    checklist_template_roundtrip,
    ChecklistTemplate,
    default_checklists().remove(0)
);

#[test]
fn audit_uses_camel_case_wire_names() {
    let json = serde_json::to_value(sample_audit()).unwrap();
    assert_eq!(json["score"]["totalAchieved"], 3.0);
    assert_eq!(json["createdAtAudit"], "2026-03-01T09:00:00Z");
    assert_eq!(json["createdBy"], "usr-0000aaaa");
    assert!(json.get("created_at").is_none());
}

#[test]
fn legacy_audit_with_underscore_id_and_missing_optionals_parses() {
    let json = r#"{
        "_id": "a-1700000000000",
        "id": "a-1700000000000",
        "name": "Legacy",
        "standard": "ISO 9001",
        "createdAt": "2023-11-14T22:13:20.000Z",
        "createdBy": "u-1"
    }"#;
    let audit: Audit = serde_json::from_str(json).unwrap();
    assert_eq!(audit.id, "a-1700000000000");
    assert!(audit.checklist.is_empty());
    assert!(audit.score.is_none());
    assert!(audit.notes.is_empty());
    assert!(audit.auditor.is_empty());
}

#[test]
fn partial_score_defaults_missing_totals_to_zero() {
    let score: Score = serde_json::from_str(r#"{"percent": 40}"#).unwrap();
    assert_eq!(score.total_achieved, 0.0);
    assert_eq!(score.total_possible, 0.0);
    assert_eq!(score.percent, 40.0);
}
