//! Selection of the manifest files eligible for upload

use std::path::{Path, PathBuf};

use audit_fs::ProjectPath;

use crate::{Error, Result};

/// Extension a manifest must carry to be eligible.
const MANIFEST_EXTENSION: &str = "txt";

/// Enumerate the manifest files to publish, relative to `root`.
///
/// Plain `.txt` files in the requirements directory are eligible, except
/// the reserved uninstall bookkeeping list. The packaging descriptor is
/// prepended when `include_descriptor` is set. The set is rebuilt on
/// every call since the directory may change between runs; entries are
/// sorted for determinism.
pub fn upload_paths(
    root: &Path,
    requirements_dir: &str,
    include_descriptor: bool,
) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    if include_descriptor {
        paths.push(PathBuf::from(ProjectPath::PackagingDescriptor.as_str()));
    }

    let dir = root.join(requirements_dir);
    let entries = std::fs::read_dir(&dir).map_err(|e| Error::Io {
        path: dir.clone(),
        source: e,
    })?;

    let mut selected = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if name == ProjectPath::UninstallList.as_str() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(MANIFEST_EXTENSION) {
            continue;
        }
        selected.push(PathBuf::from(requirements_dir).join(name));
    }
    selected.sort();
    paths.extend(selected);
    Ok(paths)
}
