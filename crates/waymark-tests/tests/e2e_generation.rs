//! End-to-end generation tests: configuration -> files on disk.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p waymark-tests --test e2e_generation
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::process::ExitCode;

use pretty_assertions::assert_eq;
use waymark_backend_metadata::{CollectionSummary, GenerateError};
use waymark_cli::commands::generate::{run, GenerateArgs};
use waymark_cli::commands::inspect::find_record;
use waymark_spec::report::REPORT_FILENAME;
use waymark_spec::{CollectionConfig, GeneratedRecord, MemberKind, Report};
use waymark_tests::fixtures::{
    builtin_collection, small_canvas_config, ProjectFixture, FIXED_TIMESTAMP, REFERENCE_SEED,
};

fn generate_args(fixture: &ProjectFixture, out: &std::path::Path) -> GenerateArgs {
    GenerateArgs {
        config: Some(fixture.config_path.to_string_lossy().to_string()),
        seed: Some(REFERENCE_SEED.to_string()),
        out_root: Some(out.to_string_lossy().to_string()),
        assets: Some(fixture.assets_dir.to_string_lossy().to_string()),
        skip_images: false,
        json: true,
    }
}

// ============================================================================
// Full Pipeline
// ============================================================================

#[test]
fn test_full_generation_writes_every_artifact() {
    let fixture = ProjectFixture::new(small_canvas_config());
    let out = fixture.out_dir("out");
    assert_eq!(run(&generate_args(&fixture, &out)).unwrap(), ExitCode::SUCCESS);

    for id in 1..=333u32 {
        assert!(out.join("metadata").join(format!("{:03}.json", id)).is_file());
        assert!(out.join("images").join(format!("{:03}.png", id)).is_file());
    }

    let report =
        Report::from_json(&fs::read_to_string(out.join(REPORT_FILENAME)).unwrap()).unwrap();
    assert!(report.ok);
    assert_eq!(report.record_count, Some(333));
    assert_eq!(report.artifacts.len(), 333 * 2 + 1);
    assert_eq!(report.collection_name.as_deref(), Some("Waymark"));

    let summary: CollectionSummary =
        serde_json::from_str(&fs::read_to_string(out.join("summary.json")).unwrap()).unwrap();
    assert_eq!(summary.record_count, 333);
    assert_eq!(summary.draws, 3995);
    assert_eq!(summary.seed, REFERENCE_SEED);
}

#[test]
fn test_metadata_matches_library_output() {
    let fixture = ProjectFixture::new(small_canvas_config());
    let out = fixture.out_dir("out");
    let mut args = generate_args(&fixture, &out);
    args.skip_images = true;
    assert_eq!(run(&args).unwrap(), ExitCode::SUCCESS);

    let expected = builtin_collection(REFERENCE_SEED);
    for id in [1u32, 2, 3, 121, 333] {
        let text = fs::read_to_string(out.join("metadata").join(format!("{:03}.json", id))).unwrap();
        let mut written: GeneratedRecord = serde_json::from_str(&text).unwrap();
        written.timestamp = FIXED_TIMESTAMP.to_string();
        assert_eq!(&written, expected.record(id).unwrap());
    }
}

#[test]
fn test_inspect_agrees_with_generate() {
    let config = CollectionConfig::builtin();
    let expected = builtin_collection(REFERENCE_SEED);
    let mut found = find_record(&config, REFERENCE_SEED, 121).unwrap();
    found.timestamp = FIXED_TIMESTAMP.to_string();
    assert_eq!(&found, expected.record(121).unwrap());
    assert_eq!(found.member_kind, MemberKind::Hybrid);
}

#[test]
fn test_missing_single_asset_fails_only_affected_records() {
    let fixture = ProjectFixture::new(small_canvas_config());
    let collection = builtin_collection(REFERENCE_SEED);
    let victim = collection.record(1).unwrap().attribute("Aura").unwrap().value.clone();
    let layer = fixture.config.layer("Aura").unwrap();
    let t = layer.trait_named(&victim).unwrap();
    fs::remove_file(waymark_backend_image::asset_path(&fixture.assets_dir, layer, t)).unwrap();

    let out = fixture.out_dir("out");
    assert_eq!(run(&generate_args(&fixture, &out)).unwrap(), ExitCode::from(2));

    let affected: BTreeSet<String> = collection
        .records
        .iter()
        .filter(|r| r.attribute("Aura").map(|a| a.value == victim).unwrap_or(false))
        .map(|r| format!("images/{:03}.png", r.id))
        .collect();

    let report =
        Report::from_json(&fs::read_to_string(out.join(REPORT_FILENAME)).unwrap()).unwrap();
    assert!(!report.ok);
    let failed: BTreeSet<String> = report.errors.iter().filter_map(|e| e.path.clone()).collect();
    assert_eq!(failed, affected);
    assert!(report.errors.iter().all(|e| e.code == "IMAGE_001"));

    // Unaffected records still get their images and every record its metadata.
    assert!(out.join("metadata").join("001.json").is_file());
    assert!(!out.join("images").join("001.png").exists());
    let rendered = fs::read_dir(out.join("images")).unwrap().count();
    assert_eq!(rendered, 333 - affected.len());
}

// ============================================================================
// Configuration Failures
// ============================================================================

#[test]
fn test_unparseable_config_exits_one() {
    let fixture = ProjectFixture::new(small_canvas_config());
    fs::write(&fixture.config_path, "{ not json").unwrap();
    let out = fixture.out_dir("out");
    assert_eq!(run(&generate_args(&fixture, &out)).unwrap(), ExitCode::from(1));

    let report =
        Report::from_json(&fs::read_to_string(out.join(REPORT_FILENAME)).unwrap()).unwrap();
    assert_eq!(report.errors[0].code, "INPUT");
}

#[test]
fn test_library_rejects_invalid_config() {
    let mut config = CollectionConfig::builtin();
    config.tiers.pop();
    let err = waymark_backend_metadata::generate_collection(&config, "seed", FIXED_TIMESTAMP)
        .unwrap_err();
    assert!(matches!(err, GenerateError::InvalidConfig(_)));
}
