//! End-to-end generation: match, collapse, format.

use log::info;

use crate::collapse::collapse;
use crate::error::GenerateError;
use crate::format::{format_ranges, SoundRanges};
use crate::matcher::match_sounds;
use crate::model::{Base, VersionedDatasets};

/// Matches the base against the candidates and renders the collapsed ranges.
///
/// `use_denominator` is the caller's decision; it is normally turned off only
/// when a single candidate version is present. Returns
/// [`GenerateError::NoSounds`] when no base sound resolves anywhere.
pub fn generate(
    base: &Base,
    candidates: &VersionedDatasets,
    use_denominator: bool,
) -> Result<String, GenerateError> {
    let ranges = collapse_all(base, candidates);
    if ranges.is_empty() {
        return Err(GenerateError::NoSounds);
    }

    info!(
        "resolved {} of {} base sounds across {} versions",
        ranges.len(),
        base.dataset.len(),
        candidates.len()
    );

    Ok(format_ranges(&ranges, use_denominator))
}

/// Matches and collapses without rendering.
pub fn collapse_all(base: &Base, candidates: &VersionedDatasets) -> SoundRanges {
    match_sounds(base, candidates)
        .iter()
        .map(|(key, resolved)| (key.clone(), collapse(resolved)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SoundDataset, Version};

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    fn single(key: &str, resources: &[&str]) -> SoundDataset {
        [(key, resources.iter().copied())].into_iter().collect()
    }

    #[test]
    fn test_two_versions_same_sound() {
        let mut candidates = VersionedDatasets::new();
        candidates.insert(v("1.7"), single("a", &["x"]));
        candidates.insert(v("1.8"), single("a", &["x"]));
        let base = Base::from_datasets(&candidates, &v("1.7")).unwrap();

        assert_eq!(generate(&base, &candidates, true).unwrap(), r#"A("1.7-1.8 a");"#);
    }

    #[test]
    fn test_renamed_sound() {
        let mut candidates = VersionedDatasets::new();
        candidates.insert(v("1.7"), single("random.click", &["random/click"]));
        candidates.insert(v("1.7.10"), single("random.click", &["random/click"]));
        candidates.insert(v("1.8"), single("ui.button.click", &["random/click"]));
        let base = Base::from_datasets(&candidates, &v("1.7")).unwrap();

        assert_eq!(
            generate(&base, &candidates, true).unwrap(),
            r#"RANDOM_CLICK("1.7-1.7.10 random.click", "1.8-1.8 ui.button.click");"#
        );
    }

    #[test]
    fn test_single_version_no_denominator() {
        let mut candidates = VersionedDatasets::new();
        candidates.insert(v("1.12"), single("block.note.harp", &["note/harp"]));
        let base = Base::from_datasets(&candidates, &v("1.12")).unwrap();

        assert_eq!(
            generate(&base, &candidates, false).unwrap(),
            r#"BLOCK_NOTE_HARP("block.note.harp");"#
        );
    }

    #[test]
    fn test_base_excluded_from_candidates() {
        let mut candidates = VersionedDatasets::new();
        candidates.insert(v("1.9"), single("entity.anvil.land", &["anvil/land"]));
        let base = Base::new(v("1.7"), single("random.anvil_land", &["anvil/land", "anvil/use"]));

        assert_eq!(
            generate(&base, &candidates, true).unwrap(),
            r#"RANDOM_ANVIL_LAND("1.9-1.9 entity.anvil.land");"#
        );
    }

    #[test]
    fn test_nothing_to_emit() {
        let mut candidates = VersionedDatasets::new();
        candidates.insert(v("1.8"), single("other", &["y"]));
        let base = Base::new(v("1.7"), single("a", &["x"]));

        assert_eq!(generate(&base, &candidates, true), Err(GenerateError::NoSounds));
        assert_eq!(
            generate(&base, &VersionedDatasets::new(), true),
            Err(GenerateError::NoSounds)
        );
    }
}
