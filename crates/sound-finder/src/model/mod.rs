//! Data model types for Sound Finder.
//!
//! - Versions (parsing and ordering)
//! - Sound datasets and the base selection
//! - Resolution results and version ranges

pub mod dataset;
pub mod range;
pub mod version;

pub use dataset::{Base, SoundDataset, VersionedDatasets};
pub use range::{Range, ResolvedMatch};
pub use version::{is_valid_version, Version};
