//! Rendering of collapsed ranges as enum constant declarations.
//!
//! ```text
//! BLOCK_ANVIL_HIT("1.7-1.8.9 random.anvil_land", "1.9-1.21.11 block.anvil.hit"),
//! RANDOM_CLICK("1.7-1.21.11 random.click");
//! ```

use std::collections::BTreeMap;

use crate::model::Range;

/// Ranges per canonical sound key, rendered in key order.
pub type SoundRanges = BTreeMap<String, Vec<Range>>;

/// Renders every sound as `KEY("token", ...)`, separated by `,\n` and
/// terminated by `;`.
///
/// With `use_denominator` each range renders as `"<start>-<end> <name>"`.
/// Without it only `"<name>"` is written, which is meant for single-version
/// output where every sound has exactly one range. An empty map renders as
/// an empty string.
pub fn format_ranges(ranges: &SoundRanges, use_denominator: bool) -> String {
    if ranges.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    for (i, (key, sound_ranges)) in ranges.iter().enumerate() {
        if i > 0 {
            out.push_str("),\n");
        }
        out.push_str(key);
        out.push('(');

        for (j, range) in sound_ranges.iter().enumerate() {
            if j > 0 {
                out.push_str(", ");
            }
            out.push('"');
            if use_denominator {
                out.push_str(&range.to_string());
            } else {
                out.push_str(&range.name);
            }
            out.push('"');
        }
    }
    out.push_str(");");

    out
}
