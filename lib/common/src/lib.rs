#![cfg_attr(not(test), no_std)]

#[cfg(test)]
mod tests;
mod utils;
pub mod elf;

pub use utils::*;
