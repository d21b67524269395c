//! Sector sources
//!
//! Everything above this layer reads the image one 2048-byte logical block
//! at a time through [`SectorSource`]. The trait takes `&self` so that every
//! [`Directory`](crate::directory::Directory) can hold a shared, non-owning
//! handle to the same source.

pub mod block_io;
pub mod raw;

pub use block_io::BlockIoSource;
pub use raw::RawImage;

use crate::error::Result;
use crate::types::SECTOR_SIZE;
use alloc::boxed::Box;

/// Supplier of fixed-size logical blocks
pub trait SectorSource {
    /// Read logical block `lba` into `buffer`
    ///
    /// On success all 2048 bytes are written. Addresses past the end of the
    /// image fail with `SectorOutOfRange`, device failures with `IoError`.
    fn read_sector(&self, lba: u32, buffer: &mut [u8; SECTOR_SIZE]) -> Result<()>;
}

impl<S: SectorSource + ?Sized> SectorSource for &S {
    fn read_sector(&self, lba: u32, buffer: &mut [u8; SECTOR_SIZE]) -> Result<()> {
        (**self).read_sector(lba, buffer)
    }
}

impl<S: SectorSource + ?Sized> SectorSource for Box<S> {
    fn read_sector(&self, lba: u32, buffer: &mut [u8; SECTOR_SIZE]) -> Result<()> {
        (**self).read_sector(lba, buffer)
    }
}
