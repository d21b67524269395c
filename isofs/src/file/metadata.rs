//! File metadata helpers

use crate::directory::record::DirEntry;
use crate::file::extent::Extent;
use crate::utils::string;

impl DirEntry {
    /// Get file name as string
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name without the `;N` version suffix
    pub fn base_name(&self) -> &str {
        string::strip_version(&self.name)
    }

    /// Get file extension
    pub fn extension(&self) -> Option<&str> {
        let base = self.base_name();
        base.rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty())
    }

    /// Is this a regular file?
    pub fn is_file(&self) -> bool {
        !self.flags.is_directory()
    }

    /// Is this a directory?
    pub fn is_directory(&self) -> bool {
        self.flags.is_directory()
    }

    /// Data extent described by this entry
    pub fn extent(&self) -> Extent {
        Extent::new(self.location, self.size)
    }
}
