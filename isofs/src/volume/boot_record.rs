//! Boot Record Volume Descriptor (El Torito)
//!
//! Points to the El Torito boot catalog which describes bootable images.

use crate::types::SECTOR_SIZE;
use crate::utils::bytes::read_u32_le;

/// El Torito magic string at the start of the boot system identifier
pub const EL_TORITO_MAGIC: &[u8; 23] = b"EL TORITO SPECIFICATION";

const BOOT_SYSTEM_ID_OFFSET: usize = 7;
const CATALOG_LBA_OFFSET: usize = 0x47;

/// Boot catalog LBA if this boot record follows El Torito
pub fn catalog_lba(sector: &[u8; SECTOR_SIZE]) -> Option<u32> {
    let system_id = &sector[BOOT_SYSTEM_ID_OFFSET..BOOT_SYSTEM_ID_OFFSET + EL_TORITO_MAGIC.len()];
    if system_id == EL_TORITO_MAGIC {
        Some(read_u32_le(sector, CATALOG_LBA_OFFSET))
    } else {
        None
    }
}
