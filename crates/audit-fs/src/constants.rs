//! Constants for well-known files in an audited project.

use std::path::Path;

/// Well-known files and directories of an audited Python project,
/// relative to the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectPath {
    /// The `requirements` directory holding the manifest files
    RequirementsDir,
    /// The `setup.py` packaging descriptor
    PackagingDescriptor,
    /// The `uninstall.txt` bookkeeping list inside the requirements directory
    UninstallList,
    /// The `.audit` configuration directory
    ConfigDir,
    /// The `.audit/config.toml` configuration file
    ConfigFile,
}

impl ProjectPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RequirementsDir => "requirements",
            Self::PackagingDescriptor => "setup.py",
            Self::UninstallList => "uninstall.txt",
            Self::ConfigDir => ".audit",
            Self::ConfigFile => ".audit/config.toml",
        }
    }
}

impl AsRef<Path> for ProjectPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for ProjectPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ProjectPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
