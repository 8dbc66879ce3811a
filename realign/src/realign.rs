#[cfg(test)]
mod tests;
mod batch;
mod error;

pub use batch::*;
pub use error::{RealignError, Result};

use common::{elf::*, *};
use log::debug;
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

pub const LEGACY_ALIGN: u64 = 0x1000;
pub const TARGET_ALIGN: u64 = 0x4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElfProbe {
    Elf,
    NotElf,
    Unreadable
}

/// Sniffs the ELF magic. A readable file shorter than the magic is `NotElf`.
pub fn probe(path: impl AsRef<Path>) -> ElfProbe {
    let mut magic = [0u8; 4];
    match File::open(path).and_then(|mut file| file.read_exact(&mut magic)) {
        Ok(()) if u32::from_le_bytes(magic) == ELFMAG => ElfProbe::Elf,
        Ok(()) => ElfProbe::NotElf,
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => ElfProbe::NotElf,
        Err(_) => ElfProbe::Unreadable
    }
}

pub fn classify(path: impl AsRef<Path>) -> bool {
    probe(path) == ElfProbe::Elf
}

/// Returns the raw EI_CLASS byte, without checking it against the known classes.
pub fn read_class(path: impl AsRef<Path>) -> Result<u8> {
    let mut file = File::open(path)?;
    let mut class = [0u8; 1];

    file.seek(SeekFrom::Start(EI_CLASS as u64))?;
    file.read_exact(&mut class)?;
    Ok(class[0])
}

/// Rewrites every 4KB p_align to 16KB in place. Non-ELF files are left alone
/// and reported as unmodified.
pub fn patch(path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    if !classify(path) {
        debug!("{} has no ELF signature", path.display());
        return Ok(false);
    }

    let class = read_class(path)?;
    let mut file = OpenOptions::new().read(true).write(true).open(path)?;

    patch_image(&mut file, class)
}

// Entries are written one at a time, so a failure part way through leaves the
// earlier entries patched.
pub fn patch_image<S: Read + Write + Seek>(image: &mut S, class: u8) -> Result<bool> {
    let layout = ElfClass::try_from(class)
        .map_err(RealignError::UnknownClass)?
        .layout();

    let mut header_buf = [0u8; 64];
    let header = &mut header_buf[..layout.ehdr_size];
    image.seek(SeekFrom::Start(0))?;
    image.read_exact(header)?;

    let table = ProgramHeaderTable::decode(header, layout)
        .ok_or_else(|| RealignError::Io(io::ErrorKind::UnexpectedEof.into()))?;

    debug!("Class: {}, phoff: {:#X}, phentsize: {}, phnum: {}", class, table.phoff, table.phentsize, table.phnum);

    let width = layout.p_align.width;
    let mut current_buf = [0u8; 8];
    let current = &mut current_buf[..width];
    let mut target_buf = [0u8; 8];
    let target = &mut target_buf[..width];
    write_le(TARGET_ALIGN, target);

    let mut modified = false;
    for index in 0..table.phnum {
        let offset = table
            .align_offset(index, layout)
            .ok_or(RealignError::OffsetOverflow { index })?;

        image.seek(SeekFrom::Start(offset))?;
        image.read_exact(current)?;

        let align = read_le::<u64>(current);
        if align != LEGACY_ALIGN {
            continue;
        }

        image.seek(SeekFrom::Start(offset))?;
        image.write_all(target)?;
        debug!("Program header {}: p_align {:#X} -> {:#X}", index, align, TARGET_ALIGN);
        modified = true;
    }

    if modified {
        image.flush()?;
    }

    Ok(modified)
}
