//! Check command implementation

use std::path::Path;

use colored::Colorize;

use audit_core::{AuditConfig, run_checks};
use audit_manifest::{Resolver, VersionRegistry};

use crate::error::{CliError, Result};

/// Run the check command.
///
/// Evaluates every configured rule and reports all outcomes before
/// failing, so one inversion doesn't hide the rest.
pub fn run_check(root: &Path, json: bool) -> Result<()> {
    let config = AuditConfig::load(root)?;
    let resolver = Resolver::new(config.core.strictness);
    let registry = VersionRegistry::from_manifest(&root.join(&config.registry.manifest), &resolver)?;

    let outcomes = run_checks(root, &config, &registry, &resolver)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    } else {
        for outcome in &outcomes {
            match &outcome.failure {
                None => println!(
                    "{} {} in {}",
                    "OK".green().bold(),
                    outcome.rule.package,
                    outcome.rule.file.display()
                ),
                Some(message) => println!(
                    "{} {} in {}: {}",
                    "FAIL".red().bold(),
                    outcome.rule.package,
                    outcome.rule.file.display(),
                    message
                ),
            }
        }
    }

    let failed = outcomes.iter().filter(|o| !o.passed()).count();
    if failed > 0 {
        return Err(CliError::user(format!(
            "{failed} of {} checks failed",
            outcomes.len()
        )));
    }
    Ok(())
}
