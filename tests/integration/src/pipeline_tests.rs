//! End-to-end tests of the upload pipeline against the fixture project.
//!
//! The external tools are replaced by a scripted runner, so these tests
//! exercise the full path from configuration loading to the final
//! publish invocation without touching git or requires.io.

use std::path::PathBuf;

use pretty_assertions::assert_eq;

use audit_core::{AuditConfig, Error, UploadPipeline};
use audit_exec::mock::ScriptedRunner;

fn fixture_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/sample-project")
}

#[test]
fn test_full_pipeline_success_path() {
    let root = fixture_root();
    let config = AuditConfig::load(&root).unwrap();
    let runner = ScriptedRunner::new();
    runner.push_success("feature/audit\n");
    runner.push_success("repository sample-project updated\n");
    runner.push_success("branch feature/audit updated\n");

    UploadPipeline::new(&root, &config, &runner)
        .run(Some("abc123"))
        .unwrap();

    let calls = runner.calls();
    assert_eq!(calls.len(), 3);

    assert_eq!(calls[0].program, "git");
    assert_eq!(calls[0].args, vec!["rev-parse", "--abbrev-ref", "HEAD"]);

    assert_eq!(calls[1].program, "requires.io");
    assert_eq!(
        calls[1].args,
        vec!["update-repo", "--repository", "sample-project", "--private"]
    );

    assert_eq!(calls[2].program, "requires.io");
    assert_eq!(
        calls[2].args[..5],
        [
            "update-branch",
            "--repository",
            "sample-project",
            "--name",
            "feature/audit"
        ]
    );
    // Manifest set: the descriptor plus every eligible .txt, sorted,
    // with the uninstall list and the helper script excluded.
    let mut expected = vec!["setup.py".to_string()];
    expected.extend(
        ["base.txt", "documentation.txt", "tests.txt"].iter().map(|name| {
            PathBuf::from("requirements")
                .join(name)
                .display()
                .to_string()
        }),
    );
    assert_eq!(calls[2].args[5..], expected[..]);
}

#[test]
fn test_missing_token_short_circuits() {
    let root = fixture_root();
    let config = AuditConfig::load(&root).unwrap();
    let runner = ScriptedRunner::new();

    let err = UploadPipeline::new(&root, &config, &runner)
        .run(None)
        .unwrap_err();
    assert!(matches!(err, Error::MissingToken));
    assert!(runner.untouched());
}

#[test]
fn test_branch_lookup_failure_stops_before_registration() {
    let root = fixture_root();
    let config = AuditConfig::load(&root).unwrap();
    let runner = ScriptedRunner::new();
    runner.push_failure("fatal: not a git repository\n", 128);

    let err = UploadPipeline::new(&root, &config, &runner)
        .run(Some("abc123"))
        .unwrap_err();
    assert!(matches!(err, Error::BranchLookup { .. }));
    assert_eq!(runner.calls().len(), 1);
}

#[test]
fn test_publish_failure_reports_branch() {
    let root = fixture_root();
    let config = AuditConfig::load(&root).unwrap();
    let runner = ScriptedRunner::new();
    runner.push_success("main\n");
    runner.push_success("repository sample-project updated\n");
    runner.push_failure("502 bad gateway\n", 1);

    let err = UploadPipeline::new(&root, &config, &runner)
        .run(Some("abc123"))
        .unwrap_err();
    assert!(matches!(err, Error::PublishFailed { branch } if branch == "main"));
    assert_eq!(runner.calls().len(), 3);
}

#[test]
fn test_clean_against_fixture_project() {
    let root = fixture_root();
    let config = AuditConfig::load(&root).unwrap();
    let runner = ScriptedRunner::new();
    runner.push_failure("WARNING: Skipping distribute as it is not installed.\n", 1);
    runner.push_success("");
    runner.push_success("");

    audit_core::run_clean(&root, &config, &runner).unwrap();

    let calls = runner.calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[0].args, vec!["uninstall", "-y", "distribute"]);
    assert_eq!(calls[1].args, vec!["install", "setuptools==26.1.1"]);
    assert_eq!(calls[2].args, vec!["install", "pip==8.1.2"]);
}
