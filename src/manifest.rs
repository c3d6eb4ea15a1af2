//! Asset manifest - discovers before/after pairs in a local directory.
//!
//! Images are paired by file stem: `<name>_a.<ext>` is the "before" image
//! and `<name>_b.<ext>` the "after" image. The manifest is a JSON array of
//! `{name, before, after}` objects; a side without a file is an empty
//! string so incomplete pairs stay visible to whoever maintains the assets.

use crate::constants::{AFTER_SUFFIX, BEFORE_SUFFIX, SUPPORTED_EXTENSIONS};
use crate::error::{SliderError, SliderResult};
use crate::readiness::{ImagePair, ImageRole};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One named pair as stored in the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub name: String,
    #[serde(default)]
    pub before: String,
    #[serde(default)]
    pub after: String,
}

impl ManifestEntry {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            before: String::new(),
            after: String::new(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.before.is_empty() && !self.after.is_empty()
    }

    /// Convert to the pair a slider instance consumes.
    pub fn to_pair(&self) -> SliderResult<ImagePair> {
        for (role, uri) in [(ImageRole::Before, &self.before), (ImageRole::After, &self.after)] {
            if uri.is_empty() {
                return Err(SliderError::InvalidManifest(format!(
                    "pair '{}' has no {} image",
                    self.name, role
                )));
            }
        }
        Ok(ImagePair::new(&self.before, &self.after))
    }
}

/// Classify a file name. Returns the pair name and role, or `None` for
/// files that are not images or carry no role suffix.
pub fn classify(file_name: &str) -> Option<(&str, ImageRole)> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    let ext = ext.to_ascii_lowercase();
    if !SUPPORTED_EXTENSIONS.contains(&ext.as_str()) {
        return None;
    }
    if let Some(name) = stem.strip_suffix(BEFORE_SUFFIX) {
        Some((name, ImageRole::Before))
    } else if let Some(name) = stem.strip_suffix(AFTER_SUFFIX) {
        Some((name, ImageRole::After))
    } else {
        None
    }
}

/// Build manifest entries from a list of file names.
///
/// Names are processed in sorted order so the output is stable; entries
/// appear in the order their first file sorts.
pub fn pair_files<S: AsRef<str>>(file_names: &[S], prefix: &str) -> Vec<ManifestEntry> {
    let mut names: Vec<&str> = file_names.iter().map(|s| s.as_ref()).collect();
    names.sort_unstable();

    let mut entries: Vec<ManifestEntry> = Vec::new();
    for file in names {
        let Some((name, role)) = classify(file) else {
            tracing::debug!(file, "Skipping file without a pair suffix");
            continue;
        };
        let index = match entries.iter().position(|e| e.name == name) {
            Some(i) => i,
            None => {
                entries.push(ManifestEntry::new(name));
                entries.len() - 1
            }
        };
        let uri = if prefix.is_empty() {
            file.to_string()
        } else {
            format!("{}/{}", prefix.trim_end_matches('/'), file)
        };
        let entry = &mut entries[index];
        let slot = match role {
            ImageRole::Before => &mut entry.before,
            ImageRole::After => &mut entry.after,
        };
        if !slot.is_empty() {
            tracing::warn!(pair = %entry.name, %role, file, "Duplicate image for pair, keeping first");
            continue;
        }
        *slot = uri;
    }

    for entry in entries.iter().filter(|e| !e.is_complete()) {
        tracing::warn!(pair = %entry.name, "Incomplete image pair");
    }
    entries
}

/// Scan `dir` (non-recursively) for image pairs.
pub fn scan_directory(dir: &Path, prefix: &str) -> SliderResult<Vec<ManifestEntry>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            files.push(name.to_string());
        } else {
            tracing::warn!(path = %entry.path().display(), "Skipping non UTF-8 file name");
        }
    }
    let entries = pair_files(&files, prefix);
    tracing::info!(dir = %dir.display(), pairs = entries.len(), "Scanned asset directory");
    Ok(entries)
}

pub fn to_json(entries: &[ManifestEntry]) -> SliderResult<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

pub fn parse(json: &str) -> SliderResult<Vec<ManifestEntry>> {
    Ok(serde_json::from_str(json)?)
}

pub fn write_manifest(path: &Path, entries: &[ManifestEntry]) -> SliderResult<()> {
    std::fs::write(path, to_json(entries)?)?;
    Ok(())
}

pub fn load_manifest(path: &Path) -> SliderResult<Vec<ManifestEntry>> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

/// Complete pairs only; incomplete entries are logged and skipped.
pub fn image_pairs(entries: &[ManifestEntry]) -> Vec<ImagePair> {
    entries
        .iter()
        .filter_map(|entry| match entry.to_pair() {
            Ok(pair) => Some(pair),
            Err(e) => {
                tracing::warn!("{}", e);
                None
            }
        })
        .collect()
}
