//! File flags parsing

/// File flags byte from a directory record (ECMA-119 9.1.6)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FileFlags(u8);

impl FileFlags {
    /// Existence bit: hide from directory listings
    pub const HIDDEN: u8 = 0x01;
    /// Entry describes a directory
    pub const DIRECTORY: u8 = 0x02;
    /// Associated file
    pub const ASSOCIATED: u8 = 0x04;
    /// Record format specified in the extended attribute record
    pub const RECORD: u8 = 0x08;
    /// Owner/group permissions in the extended attribute record
    pub const PROTECTION: u8 = 0x10;
    /// Not the final directory record for this file
    pub const MULTI_EXTENT: u8 = 0x80;

    /// Parse from raw byte
    pub const fn from_byte(byte: u8) -> Self {
        Self(byte)
    }

    /// Raw byte
    pub const fn bits(&self) -> u8 {
        self.0
    }

    /// Is this a directory?
    pub const fn is_directory(&self) -> bool {
        self.0 & Self::DIRECTORY != 0
    }

    /// Hidden file
    pub const fn is_hidden(&self) -> bool {
        self.0 & Self::HIDDEN != 0
    }

    /// Associated file
    pub const fn is_associated(&self) -> bool {
        self.0 & Self::ASSOCIATED != 0
    }

    /// File continues in a further directory record
    pub const fn is_multi_extent(&self) -> bool {
        self.0 & Self::MULTI_EXTENT != 0
    }
}
