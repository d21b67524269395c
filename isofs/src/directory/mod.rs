//! Directory objects and path resolution
//!
//! A [`Directory`] holds the decoded entries of one directory level, in
//! on-disc order. The root is built once at mount time from the volume
//! descriptor set; subdirectories are opened on demand while resolving a
//! path and dropped as soon as the walk moves past them.

pub mod flags;
pub mod path;
pub mod record;

use crate::error::{IsoFsError, Result};
use crate::file::reader::FileReader;
use crate::source::SectorSource;
use crate::types::{FilesystemKind, MountOptions, VolumeInfo};
use crate::volume;
use alloc::vec::Vec;
use record::DirEntry;

/// Remaining extent bytes below which enumeration stops
const MIN_RECORD_SPAN: u32 = 4;

/// How a directory object came to be
#[derive(Debug, Clone)]
enum Origin {
    Root(VolumeInfo),
    Subdirectory,
}

/// Decoded entries of one directory level
///
/// Holds a shared, non-owning handle to the sector source; the source must
/// outlive every directory built from it.
pub struct Directory<'a, S: SectorSource + ?Sized> {
    source: &'a S,
    kind: FilesystemKind,
    entries: Vec<DirEntry>,
    origin: Origin,
}

impl<'a, S: SectorSource + ?Sized> Directory<'a, S> {
    /// Mount an image: scan the volume descriptors and load the root
    ///
    /// # Example
    /// ```ignore
    /// use isofs::{BlockIoSource, Directory};
    ///
    /// let source = BlockIoSource::new(device);
    /// let root = Directory::mount(&source)?;
    /// let cnf = root.find_file("cdrom0:\\SYSTEM.CNF;1")?;
    /// ```
    pub fn mount(source: &'a S) -> Result<Self> {
        Self::mount_with(source, &MountOptions::default())
    }

    /// Mount with explicit options
    pub fn mount_with(source: &'a S, options: &MountOptions) -> Result<Self> {
        let volume = volume::scan(source, options)?;
        let entries = read_entries(source, &volume.root)?;

        Ok(Self {
            source,
            kind: volume.kind,
            entries,
            origin: Origin::Root(volume),
        })
    }

    /// Load the subdirectory described by `entry`
    ///
    /// Fails with `NotADirectory` when the entry's directory flag is clear.
    pub fn open(source: &'a S, entry: &DirEntry) -> Result<Self> {
        if !entry.flags.is_directory() {
            return Err(IsoFsError::NotADirectory);
        }
        log::debug!(
            "isofs: opening directory '{}' at {:#x} ({} bytes)",
            entry.name,
            entry.location,
            entry.size
        );

        Ok(Self {
            source,
            kind: FilesystemKind::Iso9660,
            entries: read_entries(source, entry)?,
            origin: Origin::Subdirectory,
        })
    }

    /// Filesystem flavour; subdirectories always report ISO9660
    pub fn kind(&self) -> FilesystemKind {
        self.kind
    }

    /// Volume information, present on the root directory only
    pub fn volume(&self) -> Option<&VolumeInfo> {
        match &self.origin {
            Origin::Root(volume) => Some(volume),
            Origin::Subdirectory => None,
        }
    }

    /// Is this the root built at mount time?
    pub fn is_root(&self) -> bool {
        matches!(self.origin, Origin::Root(_))
    }

    /// The sector source this directory reads through
    pub fn source(&self) -> &'a S {
        self.source
    }

    /// All entries, in on-disc order
    pub fn entries(&self) -> &[DirEntry] {
        &self.entries
    }

    /// Iterate over entries
    pub fn iter(&self) -> core::slice::Iter<'_, DirEntry> {
        self.entries.iter()
    }

    /// Number of entries, "." and ".." included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the directory holds no entries at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`
    pub fn entry(&self, index: usize) -> Result<&DirEntry> {
        self.entries.get(index).ok_or(IsoFsError::IndexOutOfRange)
    }

    /// Position of the entry named exactly `name` (case-sensitive)
    pub fn index_of(&self, name: &str) -> Result<usize> {
        self.entries
            .iter()
            .position(|entry| entry.name == name)
            .ok_or(IsoFsError::FileNotFound)
    }

    /// Entry named exactly `name` (case-sensitive)
    pub fn entry_by_name(&self, name: &str) -> Result<&DirEntry> {
        self.entry(self.index_of(name)?)
    }

    /// Resolve a path relative to this directory
    ///
    /// Separators are `/` and `\`; a leading `<device>:` segment is ignored.
    /// "." and ".." resolve through the on-disc records of the same name.
    ///
    /// # Errors
    /// * `FileNotFound` - empty path or a missing segment
    /// * `NotADirectory` - an intermediate segment names a file
    pub fn find_file(&self, path: &str) -> Result<DirEntry> {
        if path.is_empty() {
            return Err(IsoFsError::FileNotFound);
        }

        let segments = path::segments(path);
        let (last, parents) = segments.split_last().ok_or(IsoFsError::FileNotFound)?;

        // Transient subdirectory; replaced (and the old one dropped) per segment
        let mut current: Option<Directory<'a, S>> = None;

        for segment in parents {
            let dir = current.as_ref().unwrap_or(self);
            let entry = dir.entry_by_name(segment)?;
            let next = Directory::open(self.source, entry)?;
            current = Some(next);
        }

        let dir = current.as_ref().unwrap_or(self);
        dir.entry_by_name(last).cloned()
    }

    /// Does `path` name a file? An empty path answers `false`.
    pub fn is_file(&self, path: &str) -> Result<bool> {
        if path.is_empty() {
            return Ok(false);
        }
        Ok(!self.find_file(path)?.flags.is_directory())
    }

    /// Does `path` name a directory? An empty path answers `false`.
    pub fn is_dir(&self, path: &str) -> Result<bool> {
        if path.is_empty() {
            return Ok(false);
        }
        Ok(self.find_file(path)?.flags.is_directory())
    }

    /// Size in bytes of the entry at `path`
    pub fn file_size(&self, path: &str) -> Result<u32> {
        Ok(self.find_file(path)?.size)
    }

    /// Open the subdirectory at `path`
    pub fn open_dir(&self, path: &str) -> Result<Directory<'a, S>> {
        let entry = self.find_file(path)?;
        Directory::open(self.source, &entry)
    }
}

impl<'d, 'a, S: SectorSource + ?Sized> IntoIterator for &'d Directory<'a, S> {
    type Item = &'d DirEntry;
    type IntoIter = core::slice::Iter<'d, DirEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Decode every record in a directory's data extent
///
/// A zero length byte marks padding and ends the listing. The loop also
/// stops once fewer than four bytes of the extent remain.
fn read_entries<S: SectorSource + ?Sized>(source: &S, dir: &DirEntry) -> Result<Vec<DirEntry>> {
    let mut stream = FileReader::for_entry(source, dir);
    let mut remaining = dir.size;
    let mut record = [0u8; 256];
    let mut entries = Vec::new();

    while remaining >= MIN_RECORD_SPAN {
        let length = stream.read_u8()?;
        if length == 0 {
            break;
        }
        record[0] = length;
        remaining = remaining.saturating_sub(length as u32);

        stream.read_exact(&mut record[1..length as usize])?;
        entries.push(DirEntry::parse(&record[..length as usize])?);
    }

    Ok(entries)
}
