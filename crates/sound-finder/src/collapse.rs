//! Run-length collapsing of per-version resolutions into version ranges.

use crate::model::{Range, ResolvedMatch, Version};

/// Collapses a resolution into ranges of consecutive versions sharing a name.
///
/// Every version lands in exactly one range, ranges come out in version
/// order, and no two neighbouring ranges share a name. Runs with the same
/// name that are split by another name stay separate ranges.
pub fn collapse(resolved: &ResolvedMatch) -> Vec<Range> {
    collapse_pairs(resolved.iter().map(|(version, name)| (version, name.as_str())))
}

/// Collapses `(version, name)` pairs that are already in version order.
pub fn collapse_pairs<'a, I>(pairs: I) -> Vec<Range>
where
    I: IntoIterator<Item = (&'a Version, &'a str)>,
{
    let mut ranges = Vec::new();
    let mut open: Option<(&Version, &Version, &str)> = None;

    for (version, name) in pairs {
        open = match open {
            Some((start, _, run_name)) if run_name == name => Some((start, version, run_name)),
            Some((start, end, run_name)) => {
                ranges.push(Range::new(start.clone(), end.clone(), run_name));
                Some((version, version, name))
            }
            None => Some((version, version, name)),
        };
    }

    if let Some((start, end, name)) = open {
        ranges.push(Range::new(start.clone(), end.clone(), name));
    }

    ranges
}
