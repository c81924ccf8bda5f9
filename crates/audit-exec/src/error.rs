//! Error types for audit-exec

/// Result type for audit-exec operations
pub type Result<T> = std::result::Result<T, ExecError>;

/// Errors that can occur when invoking external commands
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    /// The command could not be launched at all
    #[error("failed to launch '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// A scripted runner received a call it has no response for
    #[error("no scripted response for '{program}'")]
    Unscripted { program: String },
}
