//! Read-only ISO9660 directory tree
//!
//! A `no_std` parser that turns a sector-addressable disc image into a
//! navigable directory tree, for disc-drive emulation that needs to resolve
//! boot and data paths without mounting the image on the host.
//!
//! # Overview
//!
//! - Volume descriptor scan (Primary, Supplementary, Boot Record)
//! - Directory record decoding
//! - Lazy directory loading during path resolution
//! - Sequential reads from extent-based storage
//!
//! Joliet supplementary descriptors are detected and reported through
//! [`FilesystemKind`], but file identifiers are always decoded one byte per
//! character. Rock Ridge, UDF and writing are not supported.
//!
//! # Architecture
//!
//! The implementation is layered:
//! 1. **Source layer** - [`SectorSource`] supplies 2048-byte logical blocks
//! 2. **Volume layer** - Parses volume descriptors from sectors 16+
//! 3. **Directory layer** - Decodes directory records and resolves paths
//! 4. **File layer** - Streams data extents across sector boundaries
//!
//! # Usage
//!
//! ```ignore
//! use isofs::{mount, read_file_vec, BlockIoSource};
//!
//! // Wrap a block device holding the image
//! let source = BlockIoSource::new(block_io);
//!
//! // Scan descriptors and load the root directory
//! let root = mount(&source)?;
//!
//! // Resolve a path, device prefix allowed
//! let cnf = root.find_file("cdrom0:\\SYSTEM.CNF;1")?;
//!
//! // Read file contents
//! let data = read_file_vec(&source, &cnf)?;
//! ```

#![no_std]
#![warn(missing_docs)]

extern crate alloc;

pub mod directory;
pub mod error;
pub mod file;
pub mod source;
pub mod types;
pub mod utils;
pub mod volume;

pub use directory::flags::FileFlags;
pub use directory::record::DirEntry;
pub use directory::Directory;
pub use error::{IsoFsError, Result};
pub use file::reader::FileReader;
pub use file::{read_file, read_file_vec};
pub use source::{BlockIoSource, RawImage, SectorSource};
pub use types::{FilesystemKind, MountOptions, VolumeInfo, SECTOR_SIZE};
pub use utils::datetime::RecordTimestamp;

/// Mount an image and load its root directory
///
/// Shorthand for [`Directory::mount`].
pub fn mount<S: SectorSource + ?Sized>(source: &S) -> Result<Directory<'_, S>> {
    Directory::mount(source)
}
