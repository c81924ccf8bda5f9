//! Clean command implementation

use std::path::Path;

use audit_core::AuditConfig;
use audit_exec::SystemRunner;

use crate::error::Result;

/// Run the clean command.
pub fn run_clean(root: &Path) -> Result<()> {
    let config = AuditConfig::load(root)?;
    audit_core::run_clean(root, &config, &SystemRunner)?;
    Ok(())
}
