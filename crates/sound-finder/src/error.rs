//! Error types for version parsing, dataset loading, generation and output.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error raised when a string is not a dotted numeric version.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersionError {
    #[error("'{input}' is not a valid version")]
    Invalid { input: String },

    #[error("version component {component:?} in '{input}' is out of range")]
    ComponentOverflow { input: String, component: String },
}

/// Error that aborts a whole dataset load.
///
/// Individual files that cannot be read or parsed never produce this; they
/// are skipped and listed in [`crate::loader::LoadReport::skipped`].
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unable to list sounds directory {path:?}: {source}")]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Outcome of a generation run that produced nothing to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("no sounds were found")]
    NoSounds,
}

/// Error writing the generated text to disk.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("unable to write output to {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Error turning one JSON document into a sound dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("top-level JSON value is not an object")]
    NotAnObject,
}
