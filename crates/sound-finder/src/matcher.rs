//! Cross-version sound matching.
//!
//! For every sound of the base dataset, each candidate version is searched
//! for the sound that represents it:
//!
//! 1. A sound with the exact same key wins, whatever its resources.
//! 2. Otherwise the first sound (in the candidate's key order) whose
//!    resources are a non-empty subset of the base sound's non-empty
//!    resources is taken.
//!
//! The containment test is one-sided on purpose: a later version may list
//! fewer variants of the same sound. It also means one broad base sound can
//! claim an unrelated candidate; first match wins.

use std::collections::BTreeMap;

use log::debug;
use rustc_hash::FxHashSet;

use crate::model::{Base, ResolvedMatch, SoundDataset, VersionedDatasets};

/// Resolutions keyed by canonical sound key, in key order.
pub type SoundMatches = BTreeMap<String, ResolvedMatch>;

/// Turns a sound key into a constant name: uppercase, `.` becomes `_`.
pub fn canonical_key(key: &str) -> String {
    key.to_uppercase().replace('.', "_")
}

/// Resolves every base sound against every candidate version.
///
/// Base sounds that resolve in no version are left out. Two base keys that
/// canonicalize to the same name share one entry; for versions both resolve,
/// the key that sorts later overwrites the earlier resolution.
pub fn match_sounds(base: &Base, candidates: &VersionedDatasets) -> SoundMatches {
    let mut matches = SoundMatches::new();

    for (key, resources) in base.dataset.iter() {
        let resolved = resolve_sound(key, resources, candidates);
        if resolved.is_empty() {
            debug!("sound '{}' has no match in any version", key);
            continue;
        }

        matches.entry(canonical_key(key)).or_default().extend(resolved);
    }

    matches
}

/// Resolves one base sound against every candidate version.
pub fn resolve_sound(
    key: &str,
    resources: &[String],
    candidates: &VersionedDatasets,
) -> ResolvedMatch {
    let base_resources: FxHashSet<&str> = resources.iter().map(String::as_str).collect();
    let mut resolved = ResolvedMatch::new();

    for (version, dataset) in candidates {
        if dataset.contains_key(key) {
            resolved.insert(version.clone(), key.to_string());
            continue;
        }

        if let Some(found) = find_by_resources(&base_resources, dataset) {
            debug!("sound '{}' resolved to '{}' in {} by resources", key, found, version);
            resolved.insert(version.clone(), found.to_string());
        }
    }

    resolved
}

/// Finds the first sound whose resources are all among `base_resources`.
fn find_by_resources<'a>(
    base_resources: &FxHashSet<&str>,
    dataset: &'a SoundDataset,
) -> Option<&'a str> {
    if base_resources.is_empty() {
        return None;
    }

    dataset
        .iter()
        .find(|(_, resources)| {
            !resources.is_empty()
                && resources
                    .iter()
                    .all(|resource| base_resources.contains(resource.as_str()))
        })
        .map(|(key, _)| key)
}
