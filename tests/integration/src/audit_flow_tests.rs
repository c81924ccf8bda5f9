//! End-to-end tests of the audit flow: configuration loading, registry
//! construction, manifest resolution, and check evaluation over the
//! fixture project.

use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use audit_core::{AuditConfig, CheckOutcome, run_checks};
use audit_manifest::{Resolver, VersionRegistry, upload_paths};

fn fixture_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/sample-project")
}

#[test]
fn test_registry_built_from_fixture_versions() {
    let root = fixture_root();
    let config = AuditConfig::load(&root).unwrap();
    let resolver = Resolver::new(config.core.strictness);

    let registry =
        VersionRegistry::from_manifest(&root.join(&config.registry.manifest), &resolver).unwrap();
    assert_eq!(registry.len(), 8);
    assert_eq!(registry.version("Jinja2").unwrap(), "2.8");
    assert!(registry.version("nonexistent").is_err());
}

#[test]
fn test_fixture_checks_all_pass() {
    let root = fixture_root();
    let config = AuditConfig::load(&root).unwrap();
    let resolver = Resolver::new(config.core.strictness);
    let registry =
        VersionRegistry::from_manifest(&root.join(&config.registry.manifest), &resolver).unwrap();

    let outcomes = run_checks(&root, &config, &registry, &resolver).unwrap();
    assert_eq!(outcomes.len(), 3);
    assert!(outcomes.iter().all(CheckOutcome::passed));
}

#[test]
fn test_documentation_manifest_resolves_through_base() {
    let root = fixture_root();
    let resolved = Resolver::default()
        .resolve(&root.join("requirements/documentation.txt"))
        .unwrap();

    let requirements: Vec<String> = resolved.iter().map(|e| e.requirement()).collect();
    assert_eq!(
        requirements,
        vec![
            "setuptools==26.1.1",
            "pip==8.1.2",
            "six==1.10.0",
            "MarkupSafe==0.23",
            "Jinja2==2.8",
        ]
    );
}

#[test]
fn test_environment_marker_stripped_in_tests_manifest() {
    let root = fixture_root();
    let resolved = Resolver::default()
        .resolve(&root.join("requirements/tests.txt"))
        .unwrap();

    let appnope = resolved.iter().find(|e| e.name == "appnope").unwrap();
    assert_eq!(appnope.version, "0.1.0");
    assert!(appnope.source_line.contains("sys_platform"));
}

#[test]
fn test_upload_selection_excludes_bookkeeping_and_scripts() {
    let root = fixture_root();
    let paths = upload_paths(&root, "requirements", false).unwrap();

    let names: Vec<&str> = paths
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap())
        .collect();
    assert_eq!(names, vec!["base.txt", "documentation.txt", "tests.txt"]);
}

#[test]
fn test_check_failure_surfaces_in_outcomes() {
    // A copy of the fixture with the documentation ordering inverted.
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join(".audit")).unwrap();
    fs::create_dir_all(root.join("requirements")).unwrap();
    fs::copy(
        fixture_root().join(".audit/config.toml"),
        root.join(".audit/config.toml"),
    )
    .unwrap();
    fs::copy(
        fixture_root().join(".audit/versions.txt"),
        root.join(".audit/versions.txt"),
    )
    .unwrap();
    fs::copy(
        fixture_root().join("requirements/base.txt"),
        root.join("requirements/base.txt"),
    )
    .unwrap();
    fs::copy(
        fixture_root().join("requirements/tests.txt"),
        root.join("requirements/tests.txt"),
    )
    .unwrap();
    fs::write(
        root.join("requirements/documentation.txt"),
        "-r base.txt\nJinja2==2.8\nMarkupSafe==0.23\n",
    )
    .unwrap();

    let config = AuditConfig::load(root).unwrap();
    let resolver = Resolver::new(config.core.strictness);
    let registry =
        VersionRegistry::from_manifest(&root.join(&config.registry.manifest), &resolver).unwrap();

    let outcomes = run_checks(root, &config, &registry, &resolver).unwrap();
    let jinja = outcomes
        .iter()
        .find(|o| o.rule.package == "Jinja2")
        .unwrap();
    assert!(!jinja.passed());
    assert!(jinja.failure.as_deref().unwrap().contains("MarkupSafe"));
}
