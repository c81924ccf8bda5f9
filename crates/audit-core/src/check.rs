//! Evaluation of the configured ordering/version rules
//!
//! Every rule is evaluated even when an earlier one fails; the caller
//! decides how to report the outcomes.

use std::path::Path;

use serde::Serialize;

use audit_manifest::{Resolver, VersionRegistry, check_order};

use crate::config::{AuditConfig, CheckRule};
use crate::Result;

/// Result of evaluating one [`CheckRule`].
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    /// The rule that was evaluated
    pub rule: CheckRule,
    /// Failure message, or `None` when the rule passed
    pub failure: Option<String>,
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }
}

/// Evaluate every configured rule against its resolved manifest.
///
/// A rule whose manifest fails to resolve is recorded as failed rather
/// than aborting the run.
pub fn run_checks(
    root: &Path,
    config: &AuditConfig,
    registry: &VersionRegistry,
    resolver: &Resolver,
) -> Result<Vec<CheckOutcome>> {
    let mut outcomes = Vec::with_capacity(config.checks.len());
    for rule in &config.checks {
        let failure = evaluate(root, rule, registry, resolver).err();
        if let Some(message) = &failure {
            tracing::debug!(package = %rule.package, file = %rule.file.display(), %message, "check failed");
        }
        outcomes.push(CheckOutcome {
            rule: rule.clone(),
            failure,
        });
    }
    Ok(outcomes)
}

fn evaluate(
    root: &Path,
    rule: &CheckRule,
    registry: &VersionRegistry,
    resolver: &Resolver,
) -> std::result::Result<(), String> {
    let entries = resolver
        .resolve(&root.join(&rule.file))
        .map_err(|e| e.to_string())?;
    check_order(&entries, &rule.package, &rule.after, registry).map_err(|e| e.to_string())
}
