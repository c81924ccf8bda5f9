//! Error types for audit-core

use std::path::PathBuf;

/// Result type for audit-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in audit-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error from audit-fs
    #[error(transparent)]
    Fs(#[from] audit_fs::Error),

    /// Error from audit-manifest
    #[error(transparent)]
    Manifest(#[from] audit_manifest::Error),

    /// Error from audit-exec
    #[error(transparent)]
    Exec(#[from] audit_exec::ExecError),

    /// Configuration file could not be parsed
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The requires.io credential is absent or empty
    #[error("REQUIRES_TOKEN environment variable must be set")]
    MissingToken,

    /// No quoted name assignment found in the packaging descriptor
    #[error("could not find repository name in {descriptor}")]
    RepositoryNameNotFound { descriptor: PathBuf },

    /// The version-control branch query failed
    #[error("error getting current git branch: {message}")]
    BranchLookup { message: String },

    /// requires.io rejected the repository registration
    #[error("unable to create or update {repository} on requires.io")]
    RegisterFailed { repository: String },

    /// requires.io rejected the branch publication
    #[error("unable to update branch {branch} on requires.io")]
    PublishFailed { branch: String },

    /// pip could not uninstall a retired requirement
    #[error("unable to uninstall {package}")]
    UninstallFailed { package: String },

    /// pip could not install a bootstrap pin
    #[error("unable to install {requirement}")]
    InstallFailed { requirement: String },

    /// base.txt lacks the pinned bootstrap version to reinstall
    #[error("no pinned {package} version in {path}")]
    BootstrapPinMissing { package: String, path: PathBuf },
}
