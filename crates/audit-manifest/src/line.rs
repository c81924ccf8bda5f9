//! Manifest line classification and pinned requirement entries

/// Classification of a single trimmed manifest line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// A `#` comment
    Comment,
    /// An include directive referencing another manifest
    Include(&'a str),
    /// A line declaring an exact `name==version` pin
    Pin,
    /// Anything else (blank, unpinned requirement, editable install, ...)
    Other,
}

/// Classify a trimmed manifest line.
pub fn classify(line: &str) -> LineKind<'_> {
    if line.starts_with('#') {
        return LineKind::Comment;
    }
    if let Some(target) = include_target(line) {
        return LineKind::Include(target);
    }
    if line.contains("==") {
        return LineKind::Pin;
    }
    LineKind::Other
}

/// Extract the referenced path from a `-r` / `--requirement` directive.
///
/// Accepts the space-separated, attached (`-rfile.txt`), and
/// `=`-separated forms pip understands.
fn include_target(line: &str) -> Option<&str> {
    let rest = line
        .strip_prefix("--requirement")
        .or_else(|| line.strip_prefix("-r"))?;
    let target = rest.strip_prefix('=').unwrap_or(rest).trim();
    (!target.is_empty()).then_some(target)
}

/// A single pinned requirement extracted from a resolved manifest.
///
/// Entries are values: built once by the resolver and never mutated.
/// Their position in the resolved sequence encodes installation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequirementEntry {
    /// Package name (left of `==`)
    pub name: String,
    /// Pinned version, with any trailing environment marker stripped
    pub version: String,
    /// The manifest line the entry was parsed from
    pub source_line: String,
}

impl RequirementEntry {
    /// Parse a line containing `==` into an entry.
    ///
    /// Splits on the first `==` and cuts the version at `;` so
    /// environment markers never take part in comparisons. Returns
    /// `None` when either side is empty.
    pub fn parse(line: &str) -> Option<Self> {
        let (name, rest) = line.split_once("==")?;
        let name = name.trim();
        let version = rest.split(';').next().unwrap_or(rest).trim();
        if name.is_empty() || version.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            version: version.to_string(),
            source_line: line.to_string(),
        })
    }

    /// The `name==version` comparison form.
    pub fn requirement(&self) -> String {
        format!("{}=={}", self.name, self.version)
    }
}
