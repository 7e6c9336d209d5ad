//! Dotted numeric versions and their total ordering.
//!
//! A version is two or more non-negative integer components separated by
//! dots (`1.8`, `1.21.11`). Ordering is component-wise with missing trailing
//! components treated as zero, so `1.8 == 1.8.0` and `1.9 < 1.10`.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::VersionError;

lazy_static! {
    static ref VALID_VERSION: Regex =
        Regex::new(r"^[0-9]+(\.[0-9]+)+$").expect("version pattern is valid");
}

/// Returns true if `s` matches the version grammar.
///
/// This is a purely syntactic check; a matching string can still fail to
/// parse when a component does not fit in a `u64`.
pub fn is_valid_version(s: &str) -> bool {
    VALID_VERSION.is_match(s)
}

/// An immutable, parsed version.
///
/// The original spelling is kept for display, while equality, ordering and
/// hashing only look at the numeric components.
#[derive(Debug, Clone)]
pub struct Version {
    text: String,
    parts: Vec<u64>,
}

impl Version {
    /// Parses a version string.
    pub fn parse(s: &str) -> Result<Self, VersionError> {
        if !is_valid_version(s) {
            return Err(VersionError::Invalid {
                input: s.to_string(),
            });
        }

        let parts = s
            .split('.')
            .map(|component| {
                component
                    .parse::<u64>()
                    .map_err(|_| VersionError::ComponentOverflow {
                        input: s.to_string(),
                        component: component.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            text: s.to_string(),
            parts,
        })
    }

    /// The version as it was spelled on input.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The numeric components, in order.
    pub fn parts(&self) -> &[u64] {
        &self.parts
    }

    /// Components with trailing zeros removed; equal versions share this.
    fn significant_parts(&self) -> &[u64] {
        let len = self
            .parts
            .iter()
            .rposition(|&part| part != 0)
            .map_or(0, |i| i + 1);
        &self.parts[..len]
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.parts.len().max(other.parts.len());
        for i in 0..len {
            let a = self.parts.get(i).copied().unwrap_or(0);
            let b = other.parts.get(i).copied().unwrap_or(0);
            match a.cmp(&b) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant_parts().hash(state);
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = VersionError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}
