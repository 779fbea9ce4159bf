//! Tests for profile overrides.

use loadout::TransformKind;
use loadout_config::ConfigDiscovery;
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(dir: &TempDir, content: &str) {
    fs::write(dir.path().join("loadout.toml"), content).expect("write config");
}

#[test]
fn profile_replaces_primitive_values() {
    let dir = TempDir::new().expect("tempdir");
    write_config(
        &dir,
        r#"
[project.optimization]
extractCommon = false

[profiles.prod.project.optimization]
extractCommon = true
extractVendor = "vendor"
"#,
    );

    let config = ConfigDiscovery::new(dir.path())
        .load_with_profile("prod")
        .expect("load with profile");

    assert!(config.project.optimization.extract_common);
    assert_eq!(
        config.project.optimization.extract_vendor.as_deref(),
        Some("vendor")
    );
}

#[test]
fn profile_preserves_unspecified_transforms() {
    let dir = TempDir::new().expect("tempdir");
    write_config(
        &dir,
        r#"
[project.transforms]
js = "babel"
less = "less"

[profiles.prod.project.transforms]
less = "sass"
"#,
    );

    let config = ConfigDiscovery::new(dir.path())
        .load_with_profile("prod")
        .expect("load with profile");

    let transforms = &config.project.transforms;
    assert_eq!(transforms.len(), 2);
    assert_eq!(transforms["js"].transformer, TransformKind::Babel);
    assert_eq!(transforms["less"].transformer, TransformKind::Sass);
    let keys: Vec<_> = transforms.keys().cloned().collect();
    assert_eq!(keys, vec!["js", "less"]);
}

#[test]
fn profile_merges_into_descriptor_config() {
    let dir = TempDir::new().expect("tempdir");
    write_config(
        &dir,
        r#"
[project.transforms.js]
transformer = "babel"
config = { presets = ["ES2015"], cacheDirectory = true }

[profiles.prod.project.transforms.js.config]
cacheDirectory = false
"#,
    );

    let config = ConfigDiscovery::new(dir.path())
        .load_with_profile("prod")
        .expect("load with profile");

    assert_eq!(
        config.project.transforms["js"].config,
        Some(json!({ "presets": ["ES2015"], "cacheDirectory": false }))
    );
}

#[test]
fn profile_can_add_transforms_and_switch_base() {
    let dir = TempDir::new().expect("tempdir");
    write_config(
        &dir,
        r#"
base = "webpack.dev.json"

[project.transforms]
js = "babel"

[profiles.prod]
base = "webpack.prod.json"

[profiles.prod.project.transforms]
png = "file"
"#,
    );

    let config = ConfigDiscovery::new(dir.path())
        .load_with_profile("prod")
        .expect("load with profile");

    assert_eq!(config.base, Some(PathBuf::from("webpack.prod.json")));
    let keys: Vec<_> = config.project.transforms.keys().cloned().collect();
    assert_eq!(keys, vec!["js", "png"]);
}

#[test]
fn invalid_profile_override_is_reported() {
    let dir = TempDir::new().expect("tempdir");
    write_config(
        &dir,
        r#"
[project.transforms]
js = "babel"

[profiles.broken.project.optimization]
extractVendor = 12
"#,
    );

    let err = ConfigDiscovery::new(dir.path())
        .load_with_profile("broken")
        .unwrap_err();
    assert!(matches!(
        err,
        loadout_config::ConfigError::InvalidProfileOverride { .. }
    ));
}

#[test]
fn profile_base_is_the_one_loaded() {
    let dir = TempDir::new().expect("tempdir");
    write_config(
        &dir,
        r#"
base = "webpack.dev.json"

[profiles.prod]
base = "webpack.prod.json"
"#,
    );
    fs::write(dir.path().join("webpack.dev.json"), r#"{ "mode": "development" }"#)
        .expect("write dev base");
    fs::write(
        dir.path().join("webpack.prod.json"),
        r#"{ "mode": "production", "module": { "rules": [{ "test": "\\.html$", "loader": "html-loader" }] } }"#,
    )
    .expect("write prod base");

    let dev = ConfigDiscovery::new(dir.path()).load().expect("load");
    assert_eq!(
        dev.load_base(dir.path()).expect("dev base").extra["mode"],
        json!("development")
    );

    let prod = ConfigDiscovery::new(dir.path())
        .load_with_profile("prod")
        .expect("load with profile");
    let base = prod.load_base(dir.path()).expect("prod base");
    assert_eq!(base.extra["mode"], json!("production"));
    assert_eq!(base.module.rules[0].loaders(), vec!["html-loader"]);
}

#[test]
fn malformed_base_json_is_reported() {
    let dir = TempDir::new().expect("tempdir");
    write_config(&dir, "base = \"webpack.base.json\"\n");
    fs::write(dir.path().join("webpack.base.json"), "{ \"mode\": ").expect("write base");

    let config = ConfigDiscovery::new(dir.path()).load().expect("load");
    let err = config.load_base(dir.path()).unwrap_err();

    match err {
        loadout_config::ConfigError::InvalidValue { field, hint } => {
            assert_eq!(field, "base");
            assert!(hint.unwrap().contains("Invalid JSON"));
        }
        other => panic!("unexpected error: {other}"),
    }
}
