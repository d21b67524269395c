//! Volume descriptor parsing
//!
//! ISO9660 volume descriptors start at sector 16 and describe the filesystem layout.
//! Multiple descriptors may be present (Primary, Supplementary, Boot Record).

pub mod boot_record;
pub mod primary;

use crate::error::{IsoFsError, Result};
use crate::source::SectorSource;
use crate::types::{
    FilesystemKind, MountOptions, VolumeDescriptorType, VolumeInfo, SECTOR_SIZE,
    STANDARD_IDENTIFIER, VOLUME_DESCRIPTOR_START,
};
use alloc::boxed::Box;

/// Scan the volume descriptor set
///
/// Reads descriptors starting at sector 16 until the set terminator and
/// returns the root record of the last primary descriptor seen.
///
/// # Errors
/// * `CorruptVolume` - a descriptor sector lacks the "CD001" identifier
/// * `FileSystemNotFound` - no primary descriptor before the terminator
/// * any error from the sector source, unchanged
pub fn scan<S: SectorSource + ?Sized>(source: &S, options: &MountOptions) -> Result<VolumeInfo> {
    let mut sector = Box::new([0u8; SECTOR_SIZE]);
    let mut kind = FilesystemKind::Iso9660;
    let mut boot_catalog_lba = None;
    let mut primary_descriptor = None;
    let mut descriptor_count = 0;

    let mut lba = VOLUME_DESCRIPTOR_START;
    loop {
        if descriptor_count >= options.descriptor_limit {
            log::warn!(
                "isofs: no terminator after {} descriptors, stopping at block {:#x}",
                descriptor_count,
                lba
            );
            break;
        }

        source.read_sector(lba, &mut sector)?;
        descriptor_count += 1;

        if &sector[1..6] != STANDARD_IDENTIFIER {
            log::error!(
                "isofs: invalid volume descriptor at block {:#x}: {:02x?}",
                lba,
                &sector[1..6]
            );
            return Err(IsoFsError::CorruptVolume);
        }

        match VolumeDescriptorType::from_code(sector[0]) {
            Some(VolumeDescriptorType::BootRecord) => {
                log::debug!("isofs: block {:#x}: boot record", lba);
                if let Some(catalog) = boot_record::catalog_lba(&sector) {
                    boot_catalog_lba = Some(catalog);
                }
            }
            Some(VolumeDescriptorType::Primary) => {
                log::debug!("isofs: block {:#x}: primary volume descriptor", lba);
                primary_descriptor = Some(primary::parse(&sector)?);
            }
            Some(VolumeDescriptorType::Supplementary) => {
                // Root stays the primary one; names are not decoded as UCS-2
                log::debug!("isofs: block {:#x}: supplementary (Joliet) descriptor", lba);
                kind = FilesystemKind::Joliet;
            }
            Some(VolumeDescriptorType::Terminator) => break,
            Some(VolumeDescriptorType::Partition) | None => {
                log::warn!(
                    "isofs: unknown volume descriptor type {} at block {:#x}",
                    sector[0],
                    lba
                );
            }
        }

        lba += 1;
    }

    let pvd = primary_descriptor.ok_or(IsoFsError::FileSystemNotFound)?;
    log::debug!("isofs: filesystem is {}", kind);

    Ok(VolumeInfo {
        root: pvd.root,
        kind,
        system_id: pvd.system_id,
        volume_id: pvd.volume_id,
        volume_space_size: pvd.volume_space_size,
        logical_block_size: pvd.logical_block_size,
        boot_catalog_lba,
        descriptor_count,
    })
}
