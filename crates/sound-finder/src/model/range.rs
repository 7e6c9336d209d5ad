//! Resolution results and the version ranges they collapse into.

use std::collections::BTreeMap;
use std::fmt;

use crate::model::Version;

/// For one base sound, the equivalent sound key found in each version.
///
/// Versions with no equivalent sound are absent.
pub type ResolvedMatch = BTreeMap<Version, String>;

/// A maximal run of consecutive versions sharing one resolved name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    pub start: Version,
    pub end: Version,
    pub name: String,
}

impl Range {
    pub fn new(start: Version, end: Version, name: impl Into<String>) -> Self {
        Self {
            start,
            end,
            name: name.into(),
        }
    }
}

/// Renders `<start>-<end> <name>`; a single-version range still shows both endpoints.
impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} {}", self.start, self.end, self.name)
    }
}
