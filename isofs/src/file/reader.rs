//! Extent reader implementation

use crate::directory::record::DirEntry;
use crate::error::{IsoFsError, Result};
use crate::file::extent::Extent;
use crate::source::SectorSource;
use crate::types::SECTOR_SIZE;
use crate::utils::sector::{byte_to_sector, offset_in_sector};
use alloc::boxed::Box;

/// Sequential byte stream over one data extent
///
/// Reads cross sector boundaries transparently. The most recently read
/// sector is cached, so small reads walking through a sector hit the
/// source once.
pub struct FileReader<'a, S: SectorSource + ?Sized> {
    source: &'a S,
    extent: Extent,
    position: u32,
    sector: Box<[u8; SECTOR_SIZE]>,
    cached_lba: Option<u32>,
}

impl<'a, S: SectorSource + ?Sized> FileReader<'a, S> {
    /// Create a reader over `size` bytes starting at `lba`
    pub fn new(source: &'a S, lba: u32, size: u32) -> Self {
        Self {
            source,
            extent: Extent::new(lba, size),
            position: 0,
            sector: Box::new([0u8; SECTOR_SIZE]),
            cached_lba: None,
        }
    }

    /// Create a reader over a directory entry's data extent
    pub fn for_entry(source: &'a S, entry: &DirEntry) -> Self {
        Self::new(source, entry.location, entry.size)
    }

    /// Read bytes from current position
    ///
    /// Returns number of bytes read (0 at end of extent)
    pub fn read(&mut self, buffer: &mut [u8]) -> Result<usize> {
        let to_read = buffer.len().min(self.remaining() as usize);
        let mut bytes_read = 0;

        while bytes_read < to_read {
            let lba = self
                .extent
                .lba
                .checked_add(byte_to_sector(self.position))
                .ok_or(IsoFsError::SectorOutOfRange)?;
            self.load_sector(lba)?;

            let offset = offset_in_sector(self.position);
            let chunk = (SECTOR_SIZE - offset).min(to_read - bytes_read);
            buffer[bytes_read..bytes_read + chunk]
                .copy_from_slice(&self.sector[offset..offset + chunk]);

            bytes_read += chunk;
            self.position += chunk as u32;
        }

        Ok(bytes_read)
    }

    /// Fill `buffer` completely or fail with `ExtentOutOfBounds`
    ///
    /// Nothing is consumed when the extent is too short.
    pub fn read_exact(&mut self, buffer: &mut [u8]) -> Result<()> {
        if buffer.len() > self.remaining() as usize {
            return Err(IsoFsError::ExtentOutOfBounds);
        }
        self.read(buffer)?;
        Ok(())
    }

    /// Read a single byte
    pub fn read_u8(&mut self) -> Result<u8> {
        let mut byte = [0u8; 1];
        self.read_exact(&mut byte)?;
        Ok(byte[0])
    }

    /// Seek to position (clamped to the extent size)
    pub fn seek(&mut self, pos: u32) {
        self.position = pos.min(self.extent.length);
    }

    /// Get current position
    pub fn position(&self) -> u32 {
        self.position
    }

    /// Get extent size
    pub fn size(&self) -> u32 {
        self.extent.length
    }

    /// Bytes left before the end of the extent
    pub fn remaining(&self) -> u32 {
        self.extent.length - self.position
    }

    fn load_sector(&mut self, lba: u32) -> Result<()> {
        if self.cached_lba != Some(lba) {
            // A failed read may leave the buffer partially written
            self.cached_lba = None;
            self.source.read_sector(lba, &mut self.sector)?;
            self.cached_lba = Some(lba);
        }
        Ok(())
    }
}
