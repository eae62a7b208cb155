//! "Append N zero bytes" operators and their byte-sliced tables.
//!
//! The hardware engine runs three independent streams and then has to move
//! one partial CRC past a whole block of the others' data. Because that move
//! is linear, it is precomputed once per block length as a [`ShiftTable`]:
//! four 256-entry rows, one per byte of the register.

// SAFETY: Indexing uses loop indices bounded by the array lengths (0..4,
// 0..256) or values masked with `& 0xFF`.
#![allow(clippy::indexing_slicing)]

use super::gf2::Gf2Matrix32;

/// Build the operator that appends `len` zero bytes.
///
/// `len` should be a power of two. Any other value behaves like the largest
/// power of two not above it, and `0` behaves like `1`.
///
/// The squaring alternates between two buffers: starting from four zero bits,
/// each halving of `len` doubles the shift, so the first square yields one
/// zero byte.
#[must_use]
pub const fn shift_operator(poly: u32, len: usize) -> Gf2Matrix32 {
  let mut odd = Gf2Matrix32::one_zero_bit(poly);
  let mut even = odd.square();
  odd = even.square();

  let mut len = len;
  loop {
    even = odd.square();
    len >>= 1;
    if len == 0 {
      return even;
    }
    odd = even.square();
    len >>= 1;
    if len == 0 {
      return odd;
    }
  }
}

/// A shift operator decomposed into four byte lookups.
#[derive(Clone, PartialEq, Eq)]
#[repr(align(64))]
pub struct ShiftTable {
  rows: [[u32; 256]; 4],
  block_len: usize,
}

impl ShiftTable {
  /// Tabulate the operator for `len` zero bytes.
  #[must_use]
  pub const fn build(poly: u32, len: usize) -> Self {
    let op = shift_operator(poly, len);
    let mut rows = [[0u32; 256]; 4];
    let mut n = 0;
    while n < 256 {
      let v = n as u32;
      rows[0][n] = op.mul_vec(v);
      rows[1][n] = op.mul_vec(v << 8);
      rows[2][n] = op.mul_vec(v << 16);
      rows[3][n] = op.mul_vec(v << 24);
      n += 1;
    }
    Self { rows, block_len: len }
  }

  /// Shift a raw register past `block_len` zero bytes.
  #[inline(always)]
  #[must_use]
  pub const fn apply(&self, crc: u32) -> u32 {
    self.rows[0][(crc & 0xFF) as usize]
      ^ self.rows[1][((crc >> 8) & 0xFF) as usize]
      ^ self.rows[2][((crc >> 16) & 0xFF) as usize]
      ^ self.rows[3][(crc >> 24) as usize]
  }

  /// The block length this table was built for, as requested.
  #[inline]
  #[must_use]
  pub const fn block_len(&self) -> usize {
    self.block_len
  }

  /// The four byte-position rows.
  #[inline]
  #[must_use]
  pub const fn rows(&self) -> &[[u32; 256]; 4] {
    &self.rows
  }
}

impl core::fmt::Debug for ShiftTable {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("ShiftTable").field("block_len", &self.block_len).finish_non_exhaustive()
  }
}
