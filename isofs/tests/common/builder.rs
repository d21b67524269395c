use crate::common::{record_len, write_descriptor, write_record, MemoryBlockDevice};

const SECTOR: usize = 2048;
const FIRST_DESCRIPTOR: usize = 16;

enum Node {
    File(Vec<u8>),
    Dir(Vec<(String, Node)>),
}

struct Placed {
    name: String,
    lba: u32,
    size: u32,
    flags: u8,
    content: Option<Vec<u8>>,
    children: Vec<Placed>,
}

/// Lays out a small ISO9660 image in memory
///
/// Descriptors are written from sector 16 in this order: boot record (if
/// any), primary, unknown types (if any), supplementary (if Joliet), then
/// the terminator. Directories and files follow, in insertion order.
pub struct IsoBuilder {
    root: Vec<(String, Node)>,
    joliet: bool,
    boot_catalog: Option<u32>,
    unknown_descriptors: Vec<u8>,
}

impl IsoBuilder {
    /// Recording timestamp stamped on every record: 2004-03-21 13:45:09 GMT
    pub const TIMESTAMP: [u8; 7] = [104, 3, 21, 13, 45, 9, 0];

    pub fn new() -> Self {
        Self {
            root: Vec::new(),
            joliet: false,
            boot_catalog: None,
            unknown_descriptors: Vec::new(),
        }
    }

    /// Add a file, creating parent directories as needed ("DIR1/FILE2.TXT")
    pub fn add_file(&mut self, path: &str, content: &[u8]) -> &mut Self {
        let (parents, name) = split(path);
        let dir = Self::dir_mut(&mut self.root, &parents);
        dir.push((name.to_string(), Node::File(content.to_vec())));
        self
    }

    /// Add an empty directory, creating parents as needed
    pub fn add_dir(&mut self, path: &str) -> &mut Self {
        let parts: Vec<&str> = path.split('/').filter(|p| !p.is_empty()).collect();
        Self::dir_mut(&mut self.root, &parts);
        self
    }

    /// Emit a supplementary (Joliet) descriptor
    pub fn joliet(&mut self) -> &mut Self {
        self.joliet = true;
        self
    }

    /// Emit an El Torito boot record pointing at `catalog_lba`
    pub fn boot_record(&mut self, catalog_lba: u32) -> &mut Self {
        self.boot_catalog = Some(catalog_lba);
        self
    }

    /// Emit a descriptor with an arbitrary type code after the primary
    pub fn unknown_descriptor(&mut self, type_code: u8) -> &mut Self {
        self.unknown_descriptors.push(type_code);
        self
    }

    pub fn build(&self) -> MemoryBlockDevice {
        MemoryBlockDevice::new(self.build_image())
    }

    /// Raw image bytes
    pub fn build_image(&self) -> Vec<u8> {
        let descriptor_count = 2
            + self.boot_catalog.is_some() as usize
            + self.unknown_descriptors.len()
            + self.joliet as usize;
        let mut next_lba = (FIRST_DESCRIPTOR + descriptor_count) as u32;

        let root = Self::place(".", &self.root, &mut next_lba);
        let mut data = vec![0u8; next_lba as usize * SECTOR + SECTOR];

        // Descriptors
        let mut lba = FIRST_DESCRIPTOR;
        if let Some(catalog) = self.boot_catalog {
            write_descriptor(&mut data, lba, 0);
            let offset = lba * SECTOR;
            data[offset + 7..offset + 30].copy_from_slice(b"EL TORITO SPECIFICATION");
            data[offset + 0x47..offset + 0x4B].copy_from_slice(&catalog.to_le_bytes());
            lba += 1;
        }

        write_descriptor(&mut data, lba, 1);
        let pvd = lba * SECTOR;
        data[pvd + 8..pvd + 40].fill(b' ');
        data[pvd + 8..pvd + 19].copy_from_slice(b"PLAYSTATION");
        data[pvd + 40..pvd + 72].fill(b' ');
        data[pvd + 40..pvd + 49].copy_from_slice(b"TEST_DISC");
        data[pvd + 80..pvd + 84].copy_from_slice(&next_lba.to_le_bytes());
        data[pvd + 84..pvd + 88].copy_from_slice(&next_lba.to_be_bytes());
        data[pvd + 128..pvd + 130].copy_from_slice(&2048u16.to_le_bytes());
        data[pvd + 130..pvd + 132].copy_from_slice(&2048u16.to_be_bytes());
        write_record(&mut data, pvd + 156, root.lba, root.size, 0x02, &[0x00]);
        lba += 1;

        for &type_code in &self.unknown_descriptors {
            write_descriptor(&mut data, lba, type_code);
            lba += 1;
        }

        if self.joliet {
            write_descriptor(&mut data, lba, 2);
            let offset = lba * SECTOR;
            data[offset + 88..offset + 91].copy_from_slice(b"%/E");
            lba += 1;
        }

        write_descriptor(&mut data, lba, 255);

        Self::write_dir(&mut data, &root, &root);
        data
    }

    fn dir_mut<'a>(
        mut dir: &'a mut Vec<(String, Node)>,
        parts: &[&str],
    ) -> &'a mut Vec<(String, Node)> {
        for part in parts {
            let index = match dir.iter().position(|(name, _)| name == part) {
                Some(index) => index,
                None => {
                    dir.push((part.to_string(), Node::Dir(Vec::new())));
                    dir.len() - 1
                }
            };
            dir = match &mut dir[index].1 {
                Node::Dir(children) => children,
                Node::File(_) => panic!("{} is a file", part),
            };
        }
        dir
    }

    /// Bytes a directory's records occupy, records never straddling sectors
    fn dir_size(children: &[(String, Node)]) -> u32 {
        let mut lengths = vec![record_len(1), record_len(1)];
        lengths.extend(children.iter().map(|(name, _)| record_len(name.len())));

        let mut sectors = 1;
        let mut used = 0;
        for len in lengths {
            if used + len > SECTOR {
                sectors += 1;
                used = 0;
            }
            used += len;
        }
        (sectors * SECTOR) as u32
    }

    fn place(name: &str, children: &[(String, Node)], next_lba: &mut u32) -> Placed {
        let size = Self::dir_size(children);
        let lba = *next_lba;
        *next_lba += size / SECTOR as u32;

        let placed = children
            .iter()
            .map(|(child_name, node)| match node {
                Node::Dir(grandchildren) => Self::place(child_name, grandchildren, next_lba),
                Node::File(content) => {
                    let file_lba = *next_lba;
                    *next_lba += (content.len().div_ceil(SECTOR)).max(1) as u32;
                    Placed {
                        name: child_name.clone(),
                        lba: file_lba,
                        size: content.len() as u32,
                        flags: 0x00,
                        content: Some(content.clone()),
                        children: Vec::new(),
                    }
                }
            })
            .collect();

        Placed {
            name: name.to_string(),
            lba,
            size,
            flags: 0x02,
            content: None,
            children: placed,
        }
    }

    fn write_dir(data: &mut [u8], dir: &Placed, parent: &Placed) {
        let start = dir.lba as usize * SECTOR;
        let mut offset = start;

        offset += write_record(data, offset, dir.lba, dir.size, 0x02, &[0x00]);
        offset += write_record(data, offset, parent.lba, parent.size, 0x02, &[0x01]);

        for child in &dir.children {
            let len = record_len(child.name.len());
            let used = (offset - start) % SECTOR;
            if used + len > SECTOR {
                offset += SECTOR - used;
            }
            offset += write_record(data, offset, child.lba, child.size, child.flags, child.name.as_bytes());
        }

        for child in &dir.children {
            match &child.content {
                Some(content) => {
                    let file_offset = child.lba as usize * SECTOR;
                    data[file_offset..file_offset + content.len()].copy_from_slice(content);
                }
                None => Self::write_dir(data, child, dir),
            }
        }
    }
}

fn split(path: &str) -> (Vec<&str>, &str) {
    let mut parts: Vec<&str> = path.split('/').filter(|p| !p.is_empty()).collect();
    let name = parts.pop().expect("non-empty path");
    (parts, name)
}
