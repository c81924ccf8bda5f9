//! Recursive expansion of requirement manifests
//!
//! Includes are spliced in place, so the resolved sequence preserves
//! the exact order in which pip would encounter each pin.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::line::{LineKind, RequirementEntry, classify};
use crate::{Error, Result};

/// How the resolver treats lines that are neither comments, includes,
/// nor well-formed pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    /// Drop them silently (historical behavior)
    #[default]
    Lenient,
    /// Drop them, but log a warning
    Warn,
    /// Fail resolution
    Strict,
}

impl FromStr for Strictness {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lenient" => Ok(Strictness::Lenient),
            "warn" => Ok(Strictness::Warn),
            "strict" => Ok(Strictness::Strict),
            _ => Err(format!("unknown strictness '{s}'")),
        }
    }
}

impl std::fmt::Display for Strictness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strictness::Lenient => write!(f, "lenient"),
            Strictness::Warn => write!(f, "warn"),
            Strictness::Strict => write!(f, "strict"),
        }
    }
}

/// Resolver for requirement manifests with recursive includes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Resolver {
    strictness: Strictness,
}

impl Resolver {
    pub fn new(strictness: Strictness) -> Self {
        Self { strictness }
    }

    /// Resolve a manifest into its ordered pinned entries.
    ///
    /// Include directives are expanded relative to the directory of the
    /// *including* file and their entries spliced in at the directive's
    /// position. A manifest reached twice on the same include chain is
    /// an [`Error::IncludeCycle`]; reaching the same file on separate
    /// branches is allowed and re-expanded, matching pip's textual
    /// splicing.
    pub fn resolve(&self, path: &Path) -> Result<Vec<RequirementEntry>> {
        let mut entries = Vec::new();
        let mut chain = HashSet::new();
        self.resolve_into(path, &mut chain, &mut entries)?;
        Ok(entries)
    }

    fn resolve_into(
        &self,
        path: &Path,
        chain: &mut HashSet<PathBuf>,
        entries: &mut Vec<RequirementEntry>,
    ) -> Result<()> {
        let key = canonical_key(path);
        if !chain.insert(key.clone()) {
            return Err(Error::IncludeCycle {
                path: path.to_path_buf(),
            });
        }

        for line in audit_fs::read_lines(path)? {
            match classify(&line) {
                LineKind::Comment => {}
                LineKind::Include(target) => {
                    let included = path.parent().unwrap_or(Path::new(".")).join(target);
                    self.resolve_into(&included, chain, entries)?;
                }
                LineKind::Pin => match RequirementEntry::parse(&line) {
                    Some(entry) => entries.push(entry),
                    None => self.on_unrecognized(path, &line)?,
                },
                LineKind::Other => {
                    if !line.is_empty() {
                        self.on_unrecognized(path, &line)?;
                    }
                }
            }
        }

        chain.remove(&key);
        Ok(())
    }

    fn on_unrecognized(&self, path: &Path, line: &str) -> Result<()> {
        match self.strictness {
            Strictness::Lenient => Ok(()),
            Strictness::Warn => {
                tracing::warn!(
                    path = %path.display(),
                    line,
                    "dropping unrecognized requirement line"
                );
                Ok(())
            }
            Strictness::Strict => Err(Error::MalformedLine {
                path: path.to_path_buf(),
                line: line.to_string(),
            }),
        }
    }
}

/// Canonical form of a manifest path for cycle detection.
///
/// Falls back to the raw path when canonicalization fails (e.g. the
/// file does not exist; the extractor then yields no lines anyway).
fn canonical_key(path: &Path) -> PathBuf {
    dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
