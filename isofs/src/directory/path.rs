//! Path splitting
//!
//! Paths use `/` or `\` as separators. A leading `<device>:` token such as
//! `cdrom0:` names the drive, not a directory, and is dropped.

use alloc::vec::Vec;

/// Split `path` into the segments to walk from the root
///
/// Runs of separators produce no empty segments.
pub fn segments(path: &str) -> Vec<&str> {
    let mut parts: Vec<&str> = path
        .split(['/', '\\'])
        .filter(|part| !part.is_empty())
        .collect();

    if parts.first().is_some_and(|first| first.ends_with(':')) {
        parts.remove(0);
    }
    parts
}
