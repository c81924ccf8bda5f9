//! Upload pipeline for requires.io publication
//!
//! Five sequential states: token verification, repository-name
//! discovery, branch-name discovery, repository registration, branch
//! publication. The first failure is terminal; later states are never
//! reached. Captured output from the publishing tool is echoed to the
//! operator on success and failure alike.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use audit_exec::CommandRunner;
use audit_fs::ProjectPath;
use audit_manifest::upload_paths;

use crate::config::AuditConfig;
use crate::{Error, Result};

/// Environment variable holding the requires.io API token.
pub const TOKEN_VAR: &str = "REQUIRES_TOKEN";

/// The publishing-service command line tool.
const PUBLISH_TOOL: &str = "requires.io";

/// Pattern matching the quoted `name=` assignment in the packaging
/// descriptor.
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"name=['"]([^'"]+)['"]"#).unwrap());

/// The credential must be present and non-empty before anything runs.
pub fn verify_token(token: Option<&str>) -> Result<()> {
    match token {
        Some(value) if !value.trim().is_empty() => Ok(()),
        _ => Err(Error::MissingToken),
    }
}

/// Driver for the five-state upload sequence.
///
/// Holds borrowed collaborators only; one pipeline value per
/// invocation, discarded after `run`.
pub struct UploadPipeline<'a> {
    root: &'a Path,
    config: &'a AuditConfig,
    runner: &'a dyn CommandRunner,
}

impl<'a> UploadPipeline<'a> {
    pub fn new(root: &'a Path, config: &'a AuditConfig, runner: &'a dyn CommandRunner) -> Self {
        Self {
            root,
            config,
            runner,
        }
    }

    /// Drive all five states in order.
    pub fn run(&self, token: Option<&str>) -> Result<()> {
        verify_token(token)?;
        let repository = self.repository_name()?;
        let branch = self.branch_name()?;
        self.register_repository(&repository)?;
        self.publish_branch(&repository, &branch)
    }

    /// Extract the repository name from the packaging descriptor.
    fn repository_name(&self) -> Result<String> {
        let descriptor = self.root.join(ProjectPath::PackagingDescriptor.as_str());
        let content = audit_fs::read_text(&descriptor)?;
        NAME_PATTERN
            .captures(&content)
            .map(|captures| captures[1].to_string())
            .ok_or_else(|| Error::RepositoryNameNotFound {
                descriptor: ProjectPath::PackagingDescriptor.as_str().into(),
            })
    }

    /// Ask the version-control tool for the current branch name.
    fn branch_name(&self) -> Result<String> {
        let output = self
            .runner
            .run("git", &["rev-parse", "--abbrev-ref", "HEAD"])
            .map_err(|e| Error::BranchLookup {
                message: e.to_string(),
            })?;
        if !output.success() {
            println!("{}", output.text);
            return Err(Error::BranchLookup {
                message: format!("git exited with {}", describe_exit(output.code)),
            });
        }
        Ok(output.text.trim().to_string())
    }

    /// Create or update the private repository entry.
    fn register_repository(&self, repository: &str) -> Result<()> {
        tracing::info!(repository, "registering repository on requires.io");
        let output = self.runner.run(
            PUBLISH_TOOL,
            &["update-repo", "--repository", repository, "--private"],
        )?;
        println!("{}", output.text);
        if !output.success() {
            return Err(Error::RegisterFailed {
                repository: repository.to_string(),
            });
        }
        Ok(())
    }

    /// Publish the selected manifest set for the current branch.
    fn publish_branch(&self, repository: &str, branch: &str) -> Result<()> {
        let paths = upload_paths(
            self.root,
            &self.config.core.requirements_dir,
            self.config.core.include_descriptor,
        )?;
        tracing::info!(branch, count = paths.len(), "publishing manifest set");

        let mut args = vec![
            "update-branch".to_string(),
            "--repository".to_string(),
            repository.to_string(),
            "--name".to_string(),
            branch.to_string(),
        ];
        args.extend(paths.iter().map(|path| path.display().to_string()));
        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();

        let output = self.runner.run(PUBLISH_TOOL, &arg_refs)?;
        println!("{}", output.text);
        if !output.success() {
            return Err(Error::PublishFailed {
                branch: branch.to_string(),
            });
        }
        Ok(())
    }
}

fn describe_exit(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "a signal".to_string(),
    }
}
