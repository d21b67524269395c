//! Directory Record decoding
//!
//! Directory records describe files and subdirectories. Layout (byte offsets
//! from the start of the record):
//!
//! | Offset | Field |
//! |--------|-------|
//! | 0      | record length |
//! | 2      | extent location (LE u32, BE copy ignored) |
//! | 10     | data length (LE u32, BE copy ignored) |
//! | 18..25 | recording timestamp |
//! | 25     | file flags |
//! | 32     | file identifier length `n` |
//! | 33..   | file identifier (`n` bytes) |

use crate::directory::flags::FileFlags;
use crate::error::{IsoFsError, Result};
use crate::utils::bytes::read_u32_le;
use crate::utils::datetime::RecordTimestamp;
use crate::utils::string::bytes_to_string;
use alloc::string::String;

const LOCATION_OFFSET: usize = 2;
const SIZE_OFFSET: usize = 10;
const TIMESTAMP_OFFSET: usize = 18;
const FLAGS_OFFSET: usize = 25;
const NAME_LEN_OFFSET: usize = 32;
const NAME_OFFSET: usize = 33;

/// Decoded directory record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Extent location (LBA)
    pub location: u32,

    /// Data length (bytes)
    pub size: u32,

    /// Recording date and time
    pub timestamp: RecordTimestamp,

    /// File flags
    pub flags: FileFlags,

    /// File identifier, `.` and `..` for the self and parent records
    pub name: String,

    /// On-disc length of the record this entry came from
    pub record_length: u8,
}

impl DirEntry {
    /// Smallest record carrying a one-byte identifier
    pub const MIN_LENGTH: usize = 34;

    /// Parse one directory record
    ///
    /// `data` must start at the record's length byte. Bytes past the
    /// declared record length are ignored.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let record_length = *data.first().ok_or(IsoFsError::InvalidDirectoryRecord)?;
        let length = record_length as usize;

        if length < Self::MIN_LENGTH || length > data.len() {
            return Err(IsoFsError::InvalidDirectoryRecord);
        }
        let record = &data[..length];

        let name_len = record[NAME_LEN_OFFSET] as usize;
        if name_len == 0 || NAME_OFFSET + name_len > length {
            return Err(IsoFsError::InvalidDirectoryRecord);
        }

        let mut timestamp = [0u8; 7];
        timestamp.copy_from_slice(&record[TIMESTAMP_OFFSET..TIMESTAMP_OFFSET + 7]);

        Ok(Self {
            location: read_u32_le(record, LOCATION_OFFSET),
            size: read_u32_le(record, SIZE_OFFSET),
            timestamp: RecordTimestamp::from_bytes(&timestamp),
            flags: FileFlags::from_byte(record[FLAGS_OFFSET]),
            name: decode_name(&record[NAME_OFFSET..NAME_OFFSET + name_len]),
            record_length,
        })
    }
}

fn decode_name(identifier: &[u8]) -> String {
    match identifier {
        [0x00] => String::from("."),
        [0x01] => String::from(".."),
        _ => bytes_to_string(identifier),
    }
}
