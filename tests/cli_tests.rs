use std::fs;

use layout_binding::cli::commands::cmd_derive;
use layout_binding::cli::config::load_config;

// =========================================================================
// Config file loading
// =========================================================================

#[test]
fn missing_config_file_falls_back_to_defaults() {
    let config = load_config(Some("/nonexistent/layout-binding.yaml"));
    assert_eq!(config.generate.field_prefix, "", "Default prefix is empty");
    assert!(config.generate.validate, "Validation defaults to on");
}

#[test]
fn config_file_supplies_the_field_prefix() {
    let path = std::env::temp_dir().join("layout-binding-test-config.yaml");
    fs::write(&path, "generate:\n  field_prefix: m\n").unwrap();

    let config = load_config(path.to_str());
    assert_eq!(config.generate.field_prefix, "m");
    assert!(config.generate.validate, "Unset validate stays on");

    fs::remove_file(&path).ok();
}

#[test]
fn config_file_can_turn_validation_off() {
    let path = std::env::temp_dir().join("layout-binding-test-novalidate.yaml");
    fs::write(&path, "generate:\n  field_prefix: m\n  validate: false\n").unwrap();

    let config = load_config(path.to_str());
    assert!(!config.generate.validate);

    fs::remove_file(&path).ok();
}

#[test]
fn malformed_config_file_falls_back_to_defaults() {
    let path = std::env::temp_dir().join("layout-binding-test-broken.yaml");
    fs::write(&path, "generate: [this is not a mapping").unwrap();

    let config = load_config(path.to_str());
    assert_eq!(config.generate.field_prefix, "");
    assert!(config.generate.validate);

    fs::remove_file(&path).ok();
}

// =========================================================================
// derive subcommand: validation toggle
// =========================================================================

const BAD_NAME_DUMP: &str =
    r#"[{ "name": "TextView", "attributes": { "android:id": "@+id/9lives" } }]"#;

#[test]
fn derive_reports_failure_when_a_field_name_is_invalid() {
    let input = std::env::temp_dir().join("layout-binding-test-validate-on.json");
    let output = std::env::temp_dir().join("layout-binding-test-validate-on-report.json");
    fs::write(&input, BAD_NAME_DUMP).unwrap();

    let all_valid = cmd_derive(
        input.to_str().unwrap(),
        "",
        "json",
        output.to_str(),
        true,
        0,
    )
    .unwrap();

    assert!(!all_valid, "9lives fails the identifier check");

    let rendered = fs::read_to_string(&output).unwrap();
    assert!(rendered.contains("\"invalid\": 1"), "Report:\n{rendered}");

    fs::remove_file(&input).ok();
    fs::remove_file(&output).ok();
}

#[test]
fn derive_with_validation_off_skips_the_identifier_check() {
    let input = std::env::temp_dir().join("layout-binding-test-validate-off.json");
    let output = std::env::temp_dir().join("layout-binding-test-validate-off-report.json");
    fs::write(&input, BAD_NAME_DUMP).unwrap();

    let all_valid = cmd_derive(
        input.to_str().unwrap(),
        "",
        "json",
        output.to_str(),
        false,
        0,
    )
    .unwrap();

    assert!(all_valid, "With validation off the run always passes");

    let rendered = fs::read_to_string(&output).unwrap();
    assert!(
        rendered.contains("\"field_name\": \"9lives\""),
        "Binding is still derived:\n{rendered}"
    );

    fs::remove_file(&input).ok();
    fs::remove_file(&output).ok();
}
