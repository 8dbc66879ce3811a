use core::mem::size_of;
use num_traits::{PrimInt, Unsigned};

// Bytes past the width of T are ignored
pub fn read_le<T: PrimInt + Unsigned + From<u8>>(bytes: &[u8]) -> T {
    bytes.iter().take(size_of::<T>()).enumerate().fold(T::zero(), |value, (idx, &byte)| {
        value | (<T as From<u8>>::from(byte) << (idx * 8))
    })
}

// Writes the low out.len() bytes of value
pub fn write_le<T: PrimInt + Unsigned + From<u8>>(value: T, out: &mut [u8]) {
    let mask = <T as From<u8>>::from(0xff);
    for (idx, byte) in out.iter_mut().take(size_of::<T>()).enumerate() {
        *byte = ((value >> (idx * 8)) & mask).to_u8().unwrap_or(0);
    }
}
