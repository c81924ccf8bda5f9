//! Dependency-order validation over resolved manifests

use crate::line::RequirementEntry;
use crate::registry::VersionRegistry;
use crate::{Error, Result};

/// Verify that `package` is pinned at its approved version and listed
/// after its prerequisites.
///
/// The entry must equal `package==<approved version>` exactly; for each
/// prerequisite, at least one entry with that name must appear earlier
/// in the resolved sequence. Position stands in for installation order,
/// so an inversion here means pip would install the package before a
/// library it needs at install time.
pub fn check_order(
    entries: &[RequirementEntry],
    package: &str,
    prerequisites: &[String],
    registry: &VersionRegistry,
) -> Result<()> {
    let requirement = format!("{}=={}", package, registry.version(package)?);
    let position = entries
        .iter()
        .position(|entry| entry.requirement() == requirement)
        .ok_or(Error::MissingEntry {
            requirement: requirement.clone(),
        })?;

    for prerequisite in prerequisites {
        let satisfied = entries[..position]
            .iter()
            .any(|entry| entry.name == *prerequisite);
        if !satisfied {
            return Err(Error::OrderingViolation {
                package: package.to_string(),
                prerequisite: prerequisite.clone(),
            });
        }
    }
    Ok(())
}
