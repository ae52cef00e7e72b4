//! Tests for report types.

use super::*;
use crate::config::CollectionConfig;
use crate::error::{ErrorCode, ValidationError, ValidationWarning, WarningCode};

#[test]
fn test_report_builder() {
    let report = ReportBuilder::new("a1b2c3d4e5f6".to_string(), "waymark-cli v0.1.0".to_string())
        .ok(true)
        .duration_ms(1234)
        .build();

    assert_eq!(report.report_version, 1);
    assert_eq!(report.config_hash, "a1b2c3d4e5f6");
    assert!(report.ok);
    assert_eq!(report.duration_ms, 1234);
    assert_eq!(report.tool_version, "waymark-cli v0.1.0");
    assert!(!report.platform.is_empty());
}

#[test]
fn test_report_builder_with_error() {
    let report = ReportBuilder::new("abc".to_string(), "test v1".to_string())
        .error(ReportError::new("METADATA_002", "score 99 matches no tier"))
        .build();

    assert!(!report.ok);
    assert_eq!(report.errors[0].code, "METADATA_002");
}

#[test]
fn test_report_builder_with_validation_messages() {
    let errors = vec![ValidationError::with_path(
        ErrorCode::TraitCount,
        "layer 'Aura' must declare 9 traits, got 8",
        "layers[1].traits",
    )];
    let warnings = vec![ValidationWarning::new(
        WarningCode::MissingDescription,
        "collection has no description",
    )];
    let report = ReportBuilder::new("abc".to_string(), "test v1".to_string())
        .validation_errors(&errors)
        .validation_warnings(&warnings)
        .build();

    assert!(!report.ok);
    assert_eq!(report.errors[0].code, "E003");
    assert_eq!(report.errors[0].path.as_deref(), Some("layers[1].traits"));
    assert_eq!(report.warnings[0].code, "W002");
}

#[test]
fn test_empty_validation_errors_keep_ok() {
    let report = ReportBuilder::new("abc".to_string(), "test v1".to_string())
        .validation_errors(&[])
        .build();
    assert!(report.ok);
}

#[test]
fn test_report_json_round_trip() {
    let config = CollectionConfig::builtin();
    let report = ReportBuilder::new("abc".to_string(), "test v1".to_string())
        .config_metadata(&config)
        .seed("test-seed")
        .records(333, "ffee")
        .artifacts(vec![ArtifactResult::new(
            ArtifactKind::Metadata,
            "metadata/001.json",
            b"{}",
        )])
        .build();

    let json = report.to_json_pretty().unwrap();
    let parsed = Report::from_json(&json).unwrap();
    assert_eq!(parsed, report);
    assert_eq!(parsed.collection_name.as_deref(), Some("Waymark"));
    assert_eq!(parsed.artifacts[0].hash.len(), 64);
    assert!(json.contains("\"kind\": \"metadata\""));
}
