//! Sector arithmetic for extent reads

use crate::types::SECTOR_SIZE;

/// Sector index (relative to extent start) holding `byte_offset`
pub fn byte_to_sector(byte_offset: u32) -> u32 {
    byte_offset / SECTOR_SIZE as u32
}

/// Offset of `byte_offset` inside its sector
pub fn offset_in_sector(byte_offset: u32) -> usize {
    (byte_offset % SECTOR_SIZE as u32) as usize
}

/// Calculate number of sectors needed for byte count
pub fn sectors_for_bytes(byte_count: u32) -> u32 {
    byte_count.div_ceil(SECTOR_SIZE as u32)
}
