use crate::elf::*;
use crate::{read_le, write_le};

tests::init_test_logger!(common);

fn elf64_header(phoff: u64, phentsize: u16, phnum: u16) -> Vec<u8> {
    let mut header = vec![0u8; 64];
    header[..4].copy_from_slice(&ELFMAG.to_le_bytes());
    header[EI_CLASS] = ELFCLASS64;
    header[32..40].copy_from_slice(&phoff.to_le_bytes());
    header[54..56].copy_from_slice(&phentsize.to_le_bytes());
    header[56..58].copy_from_slice(&phnum.to_le_bytes());
    header
}

#[test]
fn le_helpers() {
    assert_eq!(read_le::<u64>(&[0x00, 0x10, 0x00, 0x00]), 0x1000);
    assert_eq!(read_le::<u16>(&[0x38, 0x00]), 56);
    // Trailing bytes beyond u16 are not folded in
    assert_eq!(read_le::<u16>(&[0x01, 0x02, 0xff, 0xff]), 0x0201);

    let mut buf = [0xaau8; 4];
    write_le(0x4000u64, &mut buf);
    assert_eq!(buf, [0x00, 0x40, 0x00, 0x00]);

    let mut wide = [0xaau8; 8];
    write_le(0x4000u64, &mut wide);
    assert_eq!(wide, 0x4000u64.to_le_bytes());
}

#[test]
fn class_tag() {
    assert_eq!(ElfClass::try_from(1), Ok(ElfClass::Elf32));
    assert_eq!(ElfClass::try_from(2), Ok(ElfClass::Elf64));
    assert_eq!(ElfClass::try_from(0), Err(0));
    assert_eq!(ElfClass::try_from(7), Err(7));

    assert_eq!(ElfClass::Elf32.layout(), &ELF32_LAYOUT);
    assert_eq!(ElfClass::Elf64.layout().p_align, Field::new(48, 8));
}

#[test]
fn decode_elf64_table() {
    let header = elf64_header(64, 56, 3);
    let table = ProgramHeaderTable::decode(&header, &ELF64_LAYOUT).unwrap();
    assert_eq!(table, ProgramHeaderTable { phoff: 64, phentsize: 56, phnum: 3 });

    assert_eq!(table.entry_offset(0), Some(64));
    assert_eq!(table.align_offset(0, &ELF64_LAYOUT), Some(64 + 48));
    assert_eq!(table.align_offset(2, &ELF64_LAYOUT), Some(64 + 2 * 56 + 48));
}

#[test]
fn decode_elf32_table() {
    let mut header = vec![0u8; 52];
    header[EI_CLASS] = ELFCLASS32;
    header[28..32].copy_from_slice(&52u32.to_le_bytes());
    header[42..44].copy_from_slice(&32u16.to_le_bytes());
    header[44..46].copy_from_slice(&5u16.to_le_bytes());

    let table = ProgramHeaderTable::decode(&header, &ELF32_LAYOUT).unwrap();
    assert_eq!(table, ProgramHeaderTable { phoff: 52, phentsize: 32, phnum: 5 });
    assert_eq!(table.align_offset(1, &ELF32_LAYOUT), Some(52 + 32 + 28));
}

#[test]
fn short_header_rejected() {
    let header = elf64_header(64, 56, 3);
    assert_eq!(ProgramHeaderTable::decode(&header[..58], &ELF64_LAYOUT), None);
    // A 52 byte image is a full header only for the 32 bit layout
    assert!(ProgramHeaderTable::decode(&header[..52], &ELF32_LAYOUT).is_some());
}

#[test]
fn offset_overflow() {
    let table = ProgramHeaderTable { phoff: u64::MAX - 10, phentsize: 56, phnum: 2 };
    assert_eq!(table.entry_offset(0), Some(u64::MAX - 10));
    assert_eq!(table.entry_offset(1), None);
    assert_eq!(table.align_offset(0, &ELF64_LAYOUT), None);
}
