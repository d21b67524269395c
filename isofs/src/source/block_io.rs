//! `gpt_disk_io` block device adapter

use super::SectorSource;
use crate::error::{IsoFsError, Result};
use crate::types::SECTOR_SIZE;
use core::cell::RefCell;
use gpt_disk_io::BlockIo;
use gpt_disk_types::Lba;

/// Sector source backed by a [`BlockIo`] device
///
/// The device sits in a `RefCell` because `BlockIo` reads take `&mut self`
/// while directories share the source by reference. This makes the adapter
/// `!Sync`; concurrent lookups need one adapter per thread.
pub struct BlockIoSource<B: BlockIo> {
    block_io: RefCell<B>,
    start_sector: u64,
}

impl<B: BlockIo> BlockIoSource<B> {
    /// Wrap a device holding a raw ISO image starting at block 0
    pub fn new(block_io: B) -> Self {
        Self::with_start_sector(block_io, 0)
    }

    /// Wrap a device whose ISO image starts at device block `start_sector`
    pub fn with_start_sector(block_io: B, start_sector: u64) -> Self {
        Self {
            block_io: RefCell::new(block_io),
            start_sector,
        }
    }

    /// Device block where the image starts
    pub fn start_sector(&self) -> u64 {
        self.start_sector
    }

    /// Give back the device
    pub fn into_inner(self) -> B {
        self.block_io.into_inner()
    }
}

impl<B: BlockIo> SectorSource for BlockIoSource<B> {
    fn read_sector(&self, lba: u32, buffer: &mut [u8; SECTOR_SIZE]) -> Result<()> {
        let mut block_io = self.block_io.borrow_mut();

        let block_size = block_io.block_size().to_u32() as usize;
        if block_size == 0 || block_size > SECTOR_SIZE || SECTOR_SIZE % block_size != 0 {
            return Err(IsoFsError::UnsupportedBlockSize);
        }
        let blocks_per_sector = (SECTOR_SIZE / block_size) as u64;

        let first_block = self.start_sector + lba as u64 * blocks_per_sector;
        let num_blocks = block_io.num_blocks().map_err(|e| {
            log::error!("isofs: block device size query failed: {:?}", e);
            IsoFsError::IoError
        })?;
        if first_block + blocks_per_sector > num_blocks {
            return Err(IsoFsError::SectorOutOfRange);
        }

        block_io
            .read_blocks(Lba(first_block), buffer)
            .map_err(|e| {
                log::error!("isofs: read of sector {:#x} failed: {:?}", lba, e);
                IsoFsError::IoError
            })
    }
}
