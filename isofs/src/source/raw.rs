//! In-memory image source

use super::SectorSource;
use crate::error::{IsoFsError, Result};
use crate::types::SECTOR_SIZE;

/// A disc image already loaded into memory
///
/// A trailing partial sector is treated as out of range.
#[derive(Debug, Clone)]
pub struct RawImage<D: AsRef<[u8]>> {
    data: D,
}

impl<D: AsRef<[u8]>> RawImage<D> {
    /// Wrap raw image bytes
    pub fn new(data: D) -> Self {
        Self { data }
    }

    /// Number of complete sectors in the image
    pub fn sector_count(&self) -> u32 {
        (self.data.as_ref().len() / SECTOR_SIZE) as u32
    }

    /// Give back the image bytes
    pub fn into_inner(self) -> D {
        self.data
    }
}

impl<D: AsRef<[u8]>> SectorSource for RawImage<D> {
    fn read_sector(&self, lba: u32, buffer: &mut [u8; SECTOR_SIZE]) -> Result<()> {
        let data = self.data.as_ref();
        let sector = (lba as usize)
            .checked_mul(SECTOR_SIZE)
            .and_then(|offset| data.get(offset..offset.checked_add(SECTOR_SIZE)?))
            .ok_or(IsoFsError::SectorOutOfRange)?;
        buffer.copy_from_slice(sector);
        Ok(())
    }
}
