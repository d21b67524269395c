//! Common test utilities and mock block devices

#![allow(dead_code)]

pub mod builder;
pub use builder::IsoBuilder;

use gpt_disk_io::BlockIo;
use gpt_disk_types::{BlockSize, Lba};
use std::io;

/// In-memory block device for testing
#[derive(Debug, Clone)]
pub struct MemoryBlockDevice {
    pub data: Vec<u8>,
    pub block_size: usize,
    /// Number of `read_blocks` calls served
    pub reads: usize,
    /// Blocks whose reads fail with an I/O error
    pub bad_blocks: Vec<u64>,
}

impl MemoryBlockDevice {
    /// Create a new memory block device from raw data
    pub fn new(data: Vec<u8>) -> Self {
        Self::with_block_size(data, 2048)
    }

    /// Same image exposed through a different device block size
    pub fn with_block_size(data: Vec<u8>, block_size: usize) -> Self {
        Self {
            data,
            block_size,
            reads: 0,
            bad_blocks: Vec::new(),
        }
    }

    /// Create from a file path
    pub fn from_file(path: &str) -> io::Result<Self> {
        let data = std::fs::read(path)?;
        Ok(Self::new(data))
    }

    /// Create a minimal valid ISO9660 volume for testing
    ///
    /// 16: PVD, 17: terminator, 18: root directory holding "." and ".."
    pub fn create_minimal_iso() -> Self {
        let mut data = vec![0u8; 64 * 2048];

        write_descriptor(&mut data, 16, 1);
        let pvd_offset = 16 * 2048;
        data[pvd_offset + 8..pvd_offset + 19].copy_from_slice(b"TEST SYSTEM");
        data[pvd_offset + 19..pvd_offset + 40].fill(b' ');
        data[pvd_offset + 40..pvd_offset + 51].copy_from_slice(b"TEST VOLUME");
        data[pvd_offset + 51..pvd_offset + 72].fill(b' ');
        data[pvd_offset + 80..pvd_offset + 84].copy_from_slice(&64u32.to_le_bytes());
        data[pvd_offset + 84..pvd_offset + 88].copy_from_slice(&64u32.to_be_bytes());
        data[pvd_offset + 128..pvd_offset + 130].copy_from_slice(&2048u16.to_le_bytes());
        data[pvd_offset + 130..pvd_offset + 132].copy_from_slice(&2048u16.to_be_bytes());
        write_record(&mut data, pvd_offset + 156, 18, 2048, 0x02, &[0x00]);

        write_descriptor(&mut data, 17, 255);

        let root = 18 * 2048;
        write_record(&mut data, root, 18, 2048, 0x02, &[0x00]);
        write_record(&mut data, root + 34, 18, 2048, 0x02, &[0x01]);

        Self::new(data)
    }
}

/// Stamp a descriptor header (type, "CD001", version 1) onto sector `lba`
pub fn write_descriptor(data: &mut [u8], lba: usize, type_code: u8) {
    let offset = lba * 2048;
    data[offset..offset + 2048].fill(0);
    data[offset] = type_code;
    data[offset + 1..offset + 6].copy_from_slice(b"CD001");
    data[offset + 6] = 1;
}

/// Length of a directory record carrying an `name_len`-byte identifier
pub fn record_len(name_len: usize) -> usize {
    let len = 33 + name_len;
    len + len % 2
}

/// Write one directory record at byte `offset`, returning its length
pub fn write_record(
    data: &mut [u8],
    offset: usize,
    lba: u32,
    size: u32,
    flags: u8,
    name: &[u8],
) -> usize {
    let len = record_len(name.len());
    let rec = &mut data[offset..offset + len];
    rec.fill(0);
    rec[0] = len as u8;
    rec[2..6].copy_from_slice(&lba.to_le_bytes());
    rec[6..10].copy_from_slice(&lba.to_be_bytes());
    rec[10..14].copy_from_slice(&size.to_le_bytes());
    rec[14..18].copy_from_slice(&size.to_be_bytes());
    rec[18..25].copy_from_slice(&IsoBuilder::TIMESTAMP);
    rec[25] = flags;
    rec[28] = 1; // Volume sequence number
    rec[31] = 1;
    rec[32] = name.len() as u8;
    rec[33..33 + name.len()].copy_from_slice(name);
    len
}

impl BlockIo for MemoryBlockDevice {
    type Error = io::Error;

    fn block_size(&self) -> BlockSize {
        BlockSize::new(self.block_size as u32).expect("valid block size")
    }

    fn num_blocks(&mut self) -> Result<u64, Self::Error> {
        Ok((self.data.len() / self.block_size) as u64)
    }

    fn read_blocks(&mut self, start_lba: Lba, dst: &mut [u8]) -> Result<(), Self::Error> {
        self.reads += 1;

        let count = (dst.len() / self.block_size) as u64;
        if self
            .bad_blocks
            .iter()
            .any(|&bad| bad >= start_lba.0 && bad < start_lba.0 + count)
        {
            return Err(io::Error::new(io::ErrorKind::Other, "injected media error"));
        }

        let offset = start_lba.0 as usize * self.block_size;
        if offset + dst.len() > self.data.len() {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "read beyond end of device",
            ));
        }
        dst.copy_from_slice(&self.data[offset..offset + dst.len()]);
        Ok(())
    }

    fn write_blocks(&mut self, _start_lba: Lba, _src: &[u8]) -> Result<(), Self::Error> {
        Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "disc images are read-only",
        ))
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
