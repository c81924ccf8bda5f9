//! Error types for audit-manifest

use std::path::PathBuf;

/// Result type for audit-manifest operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving or validating manifests
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error from audit-fs
    #[error(transparent)]
    Fs(#[from] audit_fs::Error),

    /// I/O error while enumerating a directory
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A manifest includes itself, directly or through other manifests
    #[error("include cycle detected at {path}")]
    IncludeCycle { path: PathBuf },

    /// A line that is neither a comment, an include, nor a well-formed pin
    /// (only reported under strict resolution)
    #[error("unpinned or malformed requirement in {path}: '{line}'")]
    MalformedLine { path: PathBuf, line: String },

    /// Registry lookup for a package with no approved version on record
    #[error("no approved version on record for package '{name}'")]
    UnknownPackage { name: String },

    /// The expected pinned entry is absent from the resolved manifest
    #[error("missing pinned entry '{requirement}'")]
    MissingEntry { requirement: String },

    /// A package is listed before one of its prerequisites
    #[error("'{package}' is listed before its prerequisite '{prerequisite}'")]
    OrderingViolation {
        package: String,
        prerequisite: String,
    },
}
