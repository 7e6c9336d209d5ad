//! Sound Finder: cross-references sound definitions published per version.
//!
//! Given one sound dataset per version, this crate works out which sound key
//! every version uses for each sound of a chosen base version, and renders
//! the result as compact enum constant declarations:
//!
//! ```text
//! RANDOM_CLICK("1.7-1.8.9 random.click", "1.9-1.21.11 ui.button.click");
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use sound_finder::{generate, Base, SoundDataset, Version, VersionedDatasets};
//!
//! let dataset: SoundDataset = [("a", ["x"])].into_iter().collect();
//!
//! let mut versions = VersionedDatasets::new();
//! versions.insert(Version::parse("1.7").unwrap(), dataset.clone());
//! versions.insert(Version::parse("1.8").unwrap(), dataset);
//!
//! let base = Base::from_datasets(&versions, &Version::parse("1.7").unwrap()).unwrap();
//! let text = generate(&base, &versions, true).unwrap();
//! assert_eq!(text, r#"A("1.7-1.8 a");"#);
//! ```
//!
//! # Modules
//!
//! - [`model`]: Versions, datasets, resolutions and ranges
//! - [`matcher`]: Finds the equivalent sound in every version
//! - [`collapse`]: Compresses per-version names into version ranges
//! - [`format`]: Renders ranges as enum constants
//! - [`generate`](mod@generate): The whole pipeline
//! - [`loader`]: Reads `* <version>.json` datasets from a directory
//! - [`output`]: Writes the generated text
//! - [`error`]: Error types

pub mod collapse;
pub mod error;
pub mod format;
pub mod generate;
pub mod loader;
pub mod matcher;
pub mod model;
pub mod output;

// Re-export commonly used types at crate root
pub use collapse::{collapse, collapse_pairs};
pub use error::{DatasetError, GenerateError, LoadError, OutputError, VersionError};
pub use format::{format_ranges, SoundRanges};
pub use generate::{collapse_all, generate};
pub use loader::{load_versions, parse_sound_dataset, LoadReport, SkipReason, SkippedFile, DEFAULT_SOUNDS_DIR};
pub use matcher::{canonical_key, match_sounds, resolve_sound, SoundMatches};
pub use model::{is_valid_version, Base, Range, ResolvedMatch, SoundDataset, Version, VersionedDatasets};
pub use output::{write_output, DEFAULT_OUTPUT_PATH};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
