//! Configuration loading for Package Audit
//!
//! Projects may carry an `.audit/config.toml`; every key is optional
//! and a missing file yields the defaults, so an unconfigured project
//! behaves like the historical tool.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use audit_fs::ProjectPath;
use audit_manifest::Strictness;

use crate::Result;

fn default_requirements_dir() -> String {
    ProjectPath::RequirementsDir.as_str().to_string()
}

fn default_include_descriptor() -> bool {
    true
}

fn default_registry_manifest() -> PathBuf {
    PathBuf::from(".audit/versions.txt")
}

/// Core settings section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreSection {
    /// Directory holding the requirement manifests, relative to the root
    #[serde(default = "default_requirements_dir")]
    pub requirements_dir: String,

    /// Whether the packaging descriptor joins the upload set
    #[serde(default = "default_include_descriptor")]
    pub include_descriptor: bool,

    /// How the resolver treats unrecognized requirement lines
    #[serde(default)]
    pub strictness: Strictness,
}

impl Default for CoreSection {
    fn default() -> Self {
        Self {
            requirements_dir: default_requirements_dir(),
            include_descriptor: default_include_descriptor(),
            strictness: Strictness::default(),
        }
    }
}

/// Approved-versions registry section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrySection {
    /// Canonical manifest the registry is built from, relative to the root
    #[serde(default = "default_registry_manifest")]
    pub manifest: PathBuf,
}

impl Default for RegistrySection {
    fn default() -> Self {
        Self {
            manifest: default_registry_manifest(),
        }
    }
}

/// One ordering/version rule evaluated by `pkg-audit check`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckRule {
    /// Manifest the rule applies to, relative to the project root
    pub file: PathBuf,

    /// Package that must be pinned at the approved version
    pub package: String,

    /// Packages that must already be listed before it
    #[serde(default)]
    pub after: Vec<String>,
}

/// Parsed `.audit/config.toml`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Core settings
    #[serde(default)]
    pub core: CoreSection,

    /// Registry settings
    #[serde(default)]
    pub registry: RegistrySection,

    /// Ordering/version rules, in declaration order
    #[serde(default, rename = "check")]
    pub checks: Vec<CheckRule>,
}

impl AuditConfig {
    /// Parse a configuration from TOML content.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load the configuration for the project at `root`.
    ///
    /// An absent config file yields the default configuration.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(ProjectPath::ConfigFile.as_str());
        let content = audit_fs::read_text(&path)?;
        if content.is_empty() {
            return Ok(Self::default());
        }
        Self::parse(&content)
    }
}
