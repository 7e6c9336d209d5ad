//! Per-version sound datasets.

use std::collections::BTreeMap;

use crate::model::Version;

/// Sound definitions of one version: sound key to resource identifiers.
///
/// Keys iterate in their natural string order. Resource lists keep their
/// first-seen order and never contain duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SoundDataset {
    sounds: BTreeMap<String, Vec<String>>,
}

impl SoundDataset {
    /// Creates an empty dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a sound, replacing any previous entry with the same key.
    ///
    /// Duplicate resources are dropped, keeping the first occurrence.
    pub fn insert<K, I, R>(&mut self, key: K, resources: I)
    where
        K: Into<String>,
        I: IntoIterator<Item = R>,
        R: Into<String>,
    {
        let mut deduped: Vec<String> = Vec::new();
        for resource in resources {
            let resource = resource.into();
            if !deduped.contains(&resource) {
                deduped.push(resource);
            }
        }
        self.sounds.insert(key.into(), deduped);
    }

    /// Returns the resources of a sound, if present.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.sounds.get(key).map(Vec::as_slice)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.sounds.contains_key(key)
    }

    /// Iterates sounds in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.sounds
            .iter()
            .map(|(key, resources)| (key.as_str(), resources.as_slice()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.sounds.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.sounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sounds.is_empty()
    }
}

impl<K, I, R> FromIterator<(K, I)> for SoundDataset
where
    K: Into<String>,
    I: IntoIterator<Item = R>,
    R: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, I)>>(iter: T) -> Self {
        let mut dataset = Self::new();
        for (key, resources) in iter {
            dataset.insert(key, resources);
        }
        dataset
    }
}

/// Datasets keyed by version, iterated in version order.
///
/// Versions that compare equal (`1.8`, `1.8.0`) share a single slot.
pub type VersionedDatasets = BTreeMap<Version, SoundDataset>;

/// The version whose sound keys name the generated constants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base {
    pub version: Version,
    pub dataset: SoundDataset,
}

impl Base {
    pub fn new(version: Version, dataset: SoundDataset) -> Self {
        Self { version, dataset }
    }

    /// Picks `version` out of `datasets` as the base.
    ///
    /// Returns `None` when no dataset is loaded for that version.
    pub fn from_datasets(datasets: &VersionedDatasets, version: &Version) -> Option<Self> {
        datasets
            .get_key_value(version)
            .map(|(version, dataset)| Self::new(version.clone(), dataset.clone()))
    }
}
