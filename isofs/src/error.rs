//! Error types for ISO9660 operations

use core::fmt;

/// Result type for ISO9660 operations
pub type Result<T> = core::result::Result<T, IsoFsError>;

/// Errors that can occur while mounting or walking an ISO9660 image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsoFsError {
    /// A volume descriptor sector does not carry the "CD001" identifier
    CorruptVolume,

    /// The descriptor set ended without a primary volume descriptor
    FileSystemNotFound,

    /// Path segment or file not present in the directory
    FileNotFound,

    /// An intermediate path segment names a file
    NotADirectory,

    /// Positional entry access past the end of the directory
    IndexOutOfRange,

    /// I/O error reported by the sector source
    IoError,

    /// Sector address beyond the end of the image
    SectorOutOfRange,

    /// Corrupted directory record
    InvalidDirectoryRecord,

    /// Read past the end of a data extent
    ExtentOutOfBounds,

    /// Destination buffer cannot hold the requested data
    BufferTooSmall,

    /// Block device sector size does not divide the ISO9660 sector size
    UnsupportedBlockSize,
}

impl fmt::Display for IsoFsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CorruptVolume => write!(f, "Invalid volume descriptor identifier"),
            Self::FileSystemNotFound => write!(f, "No primary volume descriptor found"),
            Self::FileNotFound => write!(f, "File or directory not found"),
            Self::NotADirectory => write!(f, "Path component is not a directory"),
            Self::IndexOutOfRange => write!(f, "Directory entry index out of range"),
            Self::IoError => write!(f, "I/O error reading sector source"),
            Self::SectorOutOfRange => write!(f, "Sector address beyond end of image"),
            Self::InvalidDirectoryRecord => write!(f, "Corrupted directory record"),
            Self::ExtentOutOfBounds => write!(f, "Read past end of data extent"),
            Self::BufferTooSmall => write!(f, "Buffer too small"),
            Self::UnsupportedBlockSize => write!(f, "Unsupported block device sector size"),
        }
    }
}
