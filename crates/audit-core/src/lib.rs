//! Orchestration layer for Package Audit
//!
//! Ties the manifest model, the command-runner seam, and the project
//! configuration together into the operations the CLI exposes: the
//! requires.io upload pipeline, the configured ordering checks, and
//! the retired-requirements cleanup.

pub mod check;
pub mod clean;
pub mod config;
pub mod error;
pub mod upload;

pub use check::{CheckOutcome, run_checks};
pub use clean::run_clean;
pub use config::{AuditConfig, CheckRule, CoreSection, RegistrySection};
pub use error::{Error, Result};
pub use upload::{TOKEN_VAR, UploadPipeline, verify_token};
