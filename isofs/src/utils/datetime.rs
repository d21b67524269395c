//! Date/time parsing
//!
//! Directory records carry a 7-byte binary timestamp.

/// 7-byte directory record timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecordTimestamp {
    /// Absolute year (stored on disc as an offset from 1900)
    pub year: u16,

    /// Month (1-12)
    pub month: u8,

    /// Day (1-31)
    pub day: u8,

    /// Hour (0-23)
    pub hour: u8,

    /// Minute (0-59)
    pub minute: u8,

    /// Second (0-59)
    pub second: u8,

    /// GMT offset in 15-minute intervals (-48 to +52)
    pub gmt_offset: i8,
}

impl RecordTimestamp {
    /// Parse from the 7 raw bytes of a directory record
    pub fn from_bytes(bytes: &[u8; 7]) -> Self {
        Self {
            year: 1900 + bytes[0] as u16,
            month: bytes[1],
            day: bytes[2],
            hour: bytes[3],
            minute: bytes[4],
            second: bytes[5],
            gmt_offset: bytes[6] as i8,
        }
    }

    /// GMT offset in minutes
    pub fn gmt_offset_minutes(&self) -> i16 {
        self.gmt_offset as i16 * 15
    }
}
