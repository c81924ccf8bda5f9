//! Resolve command implementation

use std::path::Path;

use audit_core::AuditConfig;
use audit_manifest::Resolver;

use crate::error::Result;

/// Run the resolve command.
///
/// Prints the flattened pinned entries of a manifest in resolution
/// order, one `name==version` per line.
pub fn run_resolve(root: &Path, file: &Path) -> Result<()> {
    let config = AuditConfig::load(root)?;
    let resolver = Resolver::new(config.core.strictness);

    for entry in resolver.resolve(&root.join(file))? {
        println!("{}", entry.requirement());
    }
    Ok(())
}
