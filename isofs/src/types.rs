//! Common types and constants for ISO9660

use core::fmt;

use crate::directory::record::DirEntry;
use alloc::string::String;

/// ISO9660 sector size (always 2048 bytes)
pub const SECTOR_SIZE: usize = 2048;

/// Volume descriptor set starts at sector 16
pub const VOLUME_DESCRIPTOR_START: u32 = 16;

/// Standard identifier carried by every volume descriptor
pub const STANDARD_IDENTIFIER: &[u8; 5] = b"CD001";

/// Default cap on the number of descriptors scanned before giving up
pub const DEFAULT_DESCRIPTOR_LIMIT: u32 = 100;

/// Volume descriptor type codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum VolumeDescriptorType {
    /// Boot Record (El Torito)
    BootRecord = 0,
    /// Primary Volume Descriptor
    Primary = 1,
    /// Supplementary Volume Descriptor (Joliet)
    Supplementary = 2,
    /// Volume Partition Descriptor
    Partition = 3,
    /// Volume Descriptor Set Terminator
    Terminator = 255,
}

impl VolumeDescriptorType {
    /// Map a raw type byte, `None` for codes this crate does not know
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::BootRecord),
            1 => Some(Self::Primary),
            2 => Some(Self::Supplementary),
            3 => Some(Self::Partition),
            255 => Some(Self::Terminator),
            _ => None,
        }
    }
}

/// Filesystem flavour recorded while scanning volume descriptors
///
/// `Joliet` is a tag only: entry names are decoded the same way for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilesystemKind {
    /// Plain ISO9660
    #[default]
    Iso9660,
    /// A supplementary (Joliet) descriptor was present
    Joliet,
}

impl fmt::Display for FilesystemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iso9660 => write!(f, "ISO9660"),
            Self::Joliet => write!(f, "Joliet"),
        }
    }
}

/// Parsed volume information
#[derive(Debug, Clone)]
pub struct VolumeInfo {
    /// Root directory record from the primary descriptor
    pub root: DirEntry,

    /// ISO9660 or Joliet
    pub kind: FilesystemKind,

    /// System identifier, trailing spaces trimmed
    pub system_id: String,

    /// Volume identifier, trailing spaces trimmed
    pub volume_id: String,

    /// Volume space size (total sectors)
    pub volume_space_size: u32,

    /// Logical block size (usually 2048)
    pub logical_block_size: u16,

    /// El Torito boot catalog LBA (if a boot record was present)
    pub boot_catalog_lba: Option<u32>,

    /// Number of descriptors read, terminator included
    pub descriptor_count: u32,
}

/// Mount-time knobs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountOptions {
    /// Maximum number of descriptor sectors read before the scan stops
    pub descriptor_limit: u32,
}

impl Default for MountOptions {
    fn default() -> Self {
        Self {
            descriptor_limit: DEFAULT_DESCRIPTOR_LIMIT,
        }
    }
}
