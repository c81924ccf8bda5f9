//! Cleanup of retired requirements
//!
//! Uninstalls anything listed in the uninstall bookkeeping file, then
//! reinstalls the pinned `setuptools` and `pip` versions from the base
//! manifest. `pip uninstall -r` is no help here: it aborts at the first
//! package that is not currently installed.

use std::path::Path;

use regex::Regex;

use audit_exec::CommandRunner;
use audit_fs::ProjectPath;

use crate::config::AuditConfig;
use crate::{Error, Result};

const PIP_TOOL: &str = "pip";

/// Packages whose pinned versions are reinstalled after the cleanup.
const BOOTSTRAP_PACKAGES: [&str; 2] = ["setuptools", "pip"];

/// Uninstall retired requirements and refresh the bootstrap pins.
pub fn run_clean(root: &Path, config: &AuditConfig, runner: &dyn CommandRunner) -> Result<()> {
    let requirements_dir = root.join(&config.core.requirements_dir);
    let uninstall_path = requirements_dir.join(ProjectPath::UninstallList.as_str());

    println!("Uninstalling former requirements...");
    for line in audit_fs::read_lines(&uninstall_path)? {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let output = runner.run(PIP_TOOL, &["uninstall", "-y", &line])?;
        if output.success() {
            println!("Uninstalled {line}");
        } else if output.text.contains("not installed") {
            // Already absent, which is the state we wanted.
            tracing::debug!(package = %line, "not installed, nothing to do");
        } else {
            println!("{}", output.text);
            return Err(Error::UninstallFailed { package: line });
        }
    }
    println!("Done");

    let base_path = requirements_dir.join("base.txt");
    let base = audit_fs::read_text(&base_path)?;
    for package in BOOTSTRAP_PACKAGES {
        let version =
            bootstrap_pin(&base, package).ok_or_else(|| Error::BootstrapPinMissing {
                package: package.to_string(),
                path: base_path.clone(),
            })?;
        let requirement = format!("{package}=={version}");
        let output = runner.run(PIP_TOOL, &["install", &requirement])?;
        println!("{}", output.text);
        if !output.success() {
            return Err(Error::InstallFailed { requirement });
        }
    }
    Ok(())
}

/// Find the pinned version of a bootstrap package in the base manifest.
fn bootstrap_pin(content: &str, package: &str) -> Option<String> {
    let pattern = Regex::new(&format!(r"(?m)^{}==([\d.]+)$", regex::escape(package)))
        .expect("bootstrap pin pattern is valid");
    pattern
        .captures(content)
        .map(|captures| captures[1].to_string())
}
