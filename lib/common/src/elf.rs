use core::ops::Range;
use crate::read_le;

// ELF Magic numbers
pub const ELFMAG: u32 = u32::from_le_bytes([0x7F, b'E', b'L', b'F']);

pub const EI_CLASS: usize = 4;
pub const ELFCLASS32: u8 = 1;
pub const ELFCLASS64: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElfClass {
    Elf32,
    Elf64
}

impl TryFrom<u8> for ElfClass {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            ELFCLASS32 => Ok(ElfClass::Elf32),
            ELFCLASS64 => Ok(ElfClass::Elf64),
            other => Err(other)
        }
    }
}

impl ElfClass {
    pub fn layout(self) -> &'static ElfLayout {
        match self {
            ElfClass::Elf32 => &ELF32_LAYOUT,
            ElfClass::Elf64 => &ELF64_LAYOUT
        }
    }
}

/// A little-endian integer at a fixed position inside a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub offset: usize,
    pub width: usize
}

impl Field {
    pub const fn new(offset: usize, width: usize) -> Self {
        Self { offset, width }
    }

    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.width
    }

    /// Reads the field out of `record`, or `None` if the record is too short.
    pub fn read(&self, record: &[u8]) -> Option<u64> {
        record.get(self.range()).map(read_le::<u64>)
    }
}

/// Byte positions of everything the realigner touches, for one ELF class.
#[derive(Debug, PartialEq, Eq)]
pub struct ElfLayout {
    pub ehdr_size: usize,
    pub e_phoff: Field,
    pub e_phentsize: Field,
    pub e_phnum: Field,
    // Relative to the start of a program header entry
    pub p_align: Field
}

pub const ELF32_LAYOUT: ElfLayout = ElfLayout {
    ehdr_size: 52,
    e_phoff: Field::new(28, 4),
    e_phentsize: Field::new(42, 2),
    e_phnum: Field::new(44, 2),
    p_align: Field::new(28, 4)
};

pub const ELF64_LAYOUT: ElfLayout = ElfLayout {
    ehdr_size: 64,
    e_phoff: Field::new(32, 8),
    e_phentsize: Field::new(54, 2),
    e_phnum: Field::new(56, 2),
    p_align: Field::new(48, 8)
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramHeaderTable {
    pub phoff: u64,
    pub phentsize: u16,
    pub phnum: u16
}

impl ProgramHeaderTable {
    /// Decodes the table location from an ELF header image. Returns `None`
    /// when `header` is shorter than the class header size.
    pub fn decode(header: &[u8], layout: &ElfLayout) -> Option<Self> {
        if header.len() < layout.ehdr_size {
            return None;
        }

        Some(Self {
            phoff: layout.e_phoff.read(header)?,
            phentsize: layout.e_phentsize.read(header)? as u16,
            phnum: layout.e_phnum.read(header)? as u16
        })
    }

    pub fn entry_offset(&self, index: u16) -> Option<u64> {
        (index as u64)
            .checked_mul(self.phentsize as u64)
            .and_then(|rel| self.phoff.checked_add(rel))
    }

    /// File offset of the p_align field of entry `index`.
    pub fn align_offset(&self, index: u16, layout: &ElfLayout) -> Option<u64> {
        self.entry_offset(index)?.checked_add(layout.p_align.offset as u64)
    }
}
