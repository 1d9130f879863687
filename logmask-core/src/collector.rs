//! Expands an input path into the ordered list of files to process.
//!
//! License: MIT OR Apache-2.0

use std::fs;
use std::path::{Component, Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::errors::MaskError;

/// One file to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRef {
    /// The file on disk, as reachable from the caller's working directory.
    pub file: PathBuf,
    /// Path relative to the input root. For a single-file input this is just
    /// the file name, so its output lands directly under the output root.
    pub relative: PathBuf,
}

/// Sort key for relative paths: components joined with `/`, so ordering is
/// the same on every platform.
fn relative_key(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Collects the files behind `input`.
///
/// A regular file yields exactly one reference. A directory yields every
/// regular file beneath it, recursively, sorted lexicographically by relative
/// path so reports are reproducible whatever order the filesystem lists
/// entries in. Anything else is [`MaskError::InvalidInput`].
pub fn collect(input: &Path) -> Result<Vec<InputRef>, MaskError> {
    let metadata = match fs::metadata(input) {
        Ok(metadata) => metadata,
        Err(e) => {
            debug!("Cannot stat input {}: {}", input.display(), e);
            return Err(MaskError::InvalidInput(input.to_path_buf()));
        }
    };

    if metadata.is_file() {
        let relative = input
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| input.to_path_buf());
        return Ok(vec![InputRef {
            file: input.to_path_buf(),
            relative,
        }]);
    }

    if !metadata.is_dir() {
        return Err(MaskError::InvalidInput(input.to_path_buf()));
    }

    let mut refs = Vec::new();
    for entry in WalkDir::new(input) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(input).to_path_buf();
            MaskError::io(path, e.into())
        })?;
        // Follows symlinks for the file check, not for traversal.
        if !entry.path().is_file() {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(input) else {
            continue;
        };
        refs.push(InputRef {
            file: entry.path().to_path_buf(),
            relative: relative.to_path_buf(),
        });
    }

    refs.sort_by_cached_key(|r| relative_key(&r.relative));
    debug!("Collected {} file(s) under {}.", refs.len(), input.display());
    Ok(refs)
}
