//! Loading per-version sound datasets from a directory of JSON files.
//!
//! Files are named `<anything> <version>.json`, for example
//! `sounds 1.8.9.json`. Each file maps sound keys to definitions; only
//! definitions carrying a `"sounds"` array are sounds:
//!
//! ```json
//! {
//!   "block.anvil.hit": { "sounds": ["random/anvil_land", { "name": "random/anvil_use", "volume": 0.5 }] },
//!   "music.menu": { "category": "music" }
//! }
//! ```
//!
//! A file that cannot be read or parsed is skipped; the rest still load.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde_json::Value;

use crate::error::{DatasetError, LoadError};
use crate::model::{SoundDataset, Version, VersionedDatasets};

/// Default directory scanned for sound datasets.
pub const DEFAULT_SOUNDS_DIR: &str = "./sounds";

/// Datasets loaded from a directory, plus the files that were passed over.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub datasets: VersionedDatasets,
    pub skipped: Vec<SkippedFile>,
}

/// A `.json` file that did not contribute a dataset.
#[derive(Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: SkipReason,
}

#[derive(Debug)]
pub enum SkipReason {
    /// The file name carries no valid version.
    NoVersion,
    Unreadable(std::io::Error),
    Malformed(DatasetError),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoVersion => f.write_str("file name has no valid version"),
            SkipReason::Unreadable(err) => write!(f, "unreadable: {}", err),
            SkipReason::Malformed(err) => write!(f, "{}", err),
        }
    }
}

/// Extracts the version from a dataset file name.
///
/// The version is the text between the last space and the last `.`:
/// `sounds 1.8.9.json` gives `1.8.9`.
pub fn version_from_file_name(file_name: &str) -> Option<Version> {
    let extension = file_name.rfind('.')?;
    let space = file_name.rfind(' ')?;
    if space >= extension {
        return None;
    }
    Version::parse(&file_name[space + 1..extension]).ok()
}

/// Loads every `* <version>.json` file in `dir`.
///
/// A missing directory yields an empty report. Files are visited in sorted
/// path order; when two files carry equal versions the later one replaces
/// the earlier dataset.
pub fn load_versions(dir: &Path) -> Result<LoadReport, LoadError> {
    let mut report = LoadReport::default();
    if !dir.is_dir() {
        return Ok(report);
    }

    let list_err = |source| LoadError::ListDirectory {
        path: dir.to_path_buf(),
        source,
    };
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(list_err)? {
        let path = entry.map_err(list_err)?.path();
        if path.is_file() && path.to_string_lossy().ends_with(".json") {
            paths.push(path);
        }
    }
    paths.sort();

    for path in paths {
        match load_file(&path) {
            Ok((version, dataset)) => {
                if let Some(previous) = report.datasets.insert(version.clone(), dataset) {
                    warn!(
                        "{} replaces an earlier dataset for version {} ({} sounds)",
                        path.display(),
                        version,
                        previous.len()
                    );
                }
            }
            Err(reason) => {
                warn!("skipping {}: {}", path.display(), reason);
                report.skipped.push(SkippedFile { path, reason });
            }
        }
    }

    info!(
        "loaded {} versions from {} ({} files skipped)",
        report.datasets.len(),
        dir.display(),
        report.skipped.len()
    );

    Ok(report)
}

fn load_file(path: &Path) -> Result<(Version, SoundDataset), SkipReason> {
    let version = path
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(version_from_file_name)
        .ok_or(SkipReason::NoVersion)?;
    let text = fs::read_to_string(path).map_err(SkipReason::Unreadable)?;
    let dataset = parse_sound_dataset(&text).map_err(SkipReason::Malformed)?;
    Ok((version, dataset))
}

/// Parses one sound definitions document.
///
/// Entries without a `"sounds"` array are not sounds and are left out.
/// Array elements are resource ids, either directly as strings or as the
/// `"name"` member of an object.
pub fn parse_sound_dataset(text: &str) -> Result<SoundDataset, DatasetError> {
    let json: Value = serde_json::from_str(text)?;
    let Value::Object(entries) = json else {
        return Err(DatasetError::NotAnObject);
    };

    let mut dataset = SoundDataset::new();
    for (key, definition) in entries {
        let Some(Value::Array(sounds)) = definition.get("sounds") else {
            continue;
        };
        dataset.insert(key, sounds.iter().filter_map(resource_id));
    }

    Ok(dataset)
}

fn resource_id(element: &Value) -> Option<String> {
    match element {
        Value::String(s) => Some(s.clone()),
        Value::Object(obj) => obj.get("name").map(|name| match name {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}
