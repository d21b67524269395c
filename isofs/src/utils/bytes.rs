//! Little-endian field decoding at fixed byte offsets
//!
//! ISO9660 stores most numbers "both-endian" (LE copy followed by BE copy).
//! Only the little-endian half is read.

/// Read a little-endian `u32` starting at `offset`
///
/// Caller guarantees `offset + 4 <= data.len()`.
pub fn read_u32_le(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

/// Read a little-endian `u16` starting at `offset`
///
/// Caller guarantees `offset + 2 <= data.len()`.
pub fn read_u16_le(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}
