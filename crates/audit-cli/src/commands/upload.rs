//! Upload command implementation

use std::path::Path;

use audit_core::{AuditConfig, TOKEN_VAR, UploadPipeline};
use audit_exec::SystemRunner;

use crate::error::Result;

/// Run the upload command.
///
/// Drives the full pipeline against the real system runner; the token
/// comes from the environment and all paths resolve against `root`.
pub fn run_upload(root: &Path) -> Result<()> {
    let config = AuditConfig::load(root)?;
    let runner = SystemRunner;
    let pipeline = UploadPipeline::new(root, &config, &runner);

    let token = std::env::var(TOKEN_VAR).ok();
    pipeline.run(token.as_deref())?;
    Ok(())
}
