//! String handling utilities
//!
//! Identifiers are decoded one byte per character. Joliet descriptors are
//! detected but their UCS-2 names are not reassembled.

use alloc::string::String;

/// Trim trailing spaces from byte slice
pub fn trim_trailing_spaces(bytes: &[u8]) -> &[u8] {
    let mut end = bytes.len();
    while end > 0 && bytes[end - 1] == b' ' {
        end -= 1;
    }
    &bytes[..end]
}

/// Widen each byte to one `char` (Latin-1), without transcoding
pub fn bytes_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Decode a space-padded a/d-character field from a volume descriptor
pub fn padded_field_to_string(bytes: &[u8]) -> String {
    bytes_to_string(trim_trailing_spaces(bytes))
}

/// Strip version suffix from filename (e.g., "FILE.TXT;1" -> "FILE.TXT")
/// Also removes trailing dot if present (e.g., "FILE.;1" -> "FILE")
pub fn strip_version(name: &str) -> &str {
    let base = name.split(';').next().unwrap_or(name);
    if base == "." || base == ".." {
        return base;
    }
    match base.strip_suffix('.') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => base,
    }
}
