//! Approved-versions registry

use std::collections::HashMap;
use std::path::Path;

use crate::resolver::Resolver;
use crate::{Error, Result};

/// Immutable mapping from package name to its approved pinned version.
///
/// Built once during program initialization by resolving the canonical
/// versions manifest, then passed by reference to every consumer.
/// Lookups for packages with no approved version fail loudly.
#[derive(Debug, Clone, Default)]
pub struct VersionRegistry {
    versions: HashMap<String, String>,
}

impl VersionRegistry {
    /// Build the registry by resolving the canonical manifest.
    ///
    /// The first pin wins when a package appears more than once.
    pub fn from_manifest(path: &Path, resolver: &Resolver) -> Result<Self> {
        let mut versions = HashMap::new();
        for entry in resolver.resolve(path)? {
            versions.entry(entry.name).or_insert(entry.version);
        }
        tracing::debug!(path = %path.display(), count = versions.len(), "built version registry");
        Ok(Self { versions })
    }

    /// Approved version for a package.
    ///
    /// An unknown name is a configuration error, not a silent miss.
    pub fn version(&self, name: &str) -> Result<&str> {
        self.versions
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| Error::UnknownPackage {
                name: name.to_string(),
            })
    }

    /// Whether a package has an approved version on record.
    pub fn contains(&self, name: &str) -> bool {
        self.versions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}
