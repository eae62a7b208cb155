//! CRC-32C constants and the table builders derived from them.
//!
//! Everything here is a pure function of [`POLYNOMIAL`]. The builders are
//! `const fn`, so the same tables can be produced at compile time (see
//! [`CONST_TABLE`]) or once at startup by the engine.
//!
//! # Cache Alignment
//!
//! [`ValueTable`] and [`ShiftTable`] are 64-byte (cache line) aligned so a
//! row never straddles two lines during lookups.

pub mod gf2;
pub mod shift;
pub mod tables;

pub use shift::{ShiftTable, shift_operator};
pub use tables::ValueTable;

/// CRC-32C polynomial in reflected (bit-reversed) form.
///
/// The normal form is `0x1EDC6F41`. The reflected form matches LSB-first
/// processing and the hardware `crc32c` instructions.
pub const POLYNOMIAL: u32 = 0x82F6_3B78;

/// Block length in bytes of each stream in the long interleaved phase.
pub const LONG: usize = 8192;

/// Block length in bytes of each stream in the short interleaved phase.
pub const SHORT: usize = 256;

/// Pre/post conditioning applied at the public `append` boundary.
pub const XOR_OUT: u32 = 0xFFFF_FFFF;

const _: () = assert!(LONG.is_power_of_two() && SHORT.is_power_of_two());
const _: () = assert!(LONG % SHORT == 0);

/// Slice-by-16 table evaluated at compile time.
pub static CONST_TABLE: ValueTable = ValueTable::build(POLYNOMIAL);
