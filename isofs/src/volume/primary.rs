//! Primary Volume Descriptor parsing
//!
//! The Primary Volume Descriptor (PVD) carries the root directory record and
//! the basic volume metadata. See ECMA-119 8.4.

use crate::directory::record::DirEntry;
use crate::error::Result;
use crate::types::SECTOR_SIZE;
use crate::utils::bytes::{read_u16_le, read_u32_le};
use crate::utils::string::padded_field_to_string;
use alloc::string::String;

const SYSTEM_ID: core::ops::Range<usize> = 8..40;
const VOLUME_ID: core::ops::Range<usize> = 40..72;
const VOLUME_SPACE_SIZE_OFFSET: usize = 80;
const LOGICAL_BLOCK_SIZE_OFFSET: usize = 128;

/// Offset of the embedded root directory record
pub const ROOT_RECORD_OFFSET: usize = 156;

/// Length of the embedded root directory record
pub const ROOT_RECORD_LENGTH: usize = 34;

/// Fields taken from a primary descriptor
#[derive(Debug, Clone)]
pub struct PrimaryVolumeDescriptor {
    /// System identifier (32 a-characters)
    pub system_id: String,

    /// Volume identifier (32 d-characters)
    pub volume_id: String,

    /// Volume space size in logical blocks
    pub volume_space_size: u32,

    /// Logical block size (usually 2048)
    pub logical_block_size: u16,

    /// Root directory record
    pub root: DirEntry,
}

/// Parse Primary Volume Descriptor from sector data
///
/// The caller has already checked the type code and standard identifier.
pub fn parse(sector: &[u8; SECTOR_SIZE]) -> Result<PrimaryVolumeDescriptor> {
    let root_record = &sector[ROOT_RECORD_OFFSET..ROOT_RECORD_OFFSET + ROOT_RECORD_LENGTH];

    Ok(PrimaryVolumeDescriptor {
        system_id: padded_field_to_string(&sector[SYSTEM_ID]),
        volume_id: padded_field_to_string(&sector[VOLUME_ID]),
        volume_space_size: read_u32_le(sector, VOLUME_SPACE_SIZE_OFFSET),
        logical_block_size: read_u16_le(sector, LOGICAL_BLOCK_SIZE_OFFSET),
        root: DirEntry::parse(root_record)?,
    })
}
