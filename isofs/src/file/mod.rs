//! File reading and extent management

pub mod extent;
pub mod metadata;
pub mod reader;

use crate::directory::record::DirEntry;
use crate::error::{IsoFsError, Result};
use crate::source::SectorSource;
use alloc::vec::Vec;
use reader::FileReader;

/// Read file contents
///
/// # Arguments
/// * `source` - Sector source
/// * `file` - Entry to read
/// * `buffer` - Buffer to read into
///
/// # Returns
/// Number of bytes read
pub fn read_file<S: SectorSource + ?Sized>(
    source: &S,
    file: &DirEntry,
    buffer: &mut [u8],
) -> Result<usize> {
    let file_size = file.size as usize;

    if buffer.len() < file_size {
        return Err(IsoFsError::BufferTooSmall);
    }

    let mut reader = FileReader::for_entry(source, file);
    reader.read_exact(&mut buffer[..file_size])?;
    Ok(file_size)
}

/// Read file into new Vec
pub fn read_file_vec<S: SectorSource + ?Sized>(source: &S, file: &DirEntry) -> Result<Vec<u8>> {
    let mut buffer = alloc::vec![0u8; file.size as usize];
    read_file(source, file, &mut buffer)?;
    Ok(buffer)
}
