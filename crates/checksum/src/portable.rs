//! Table-driven software CRC-32C (slice-by-16 and slice-by-8).
//!
//! Kernels here operate on the raw register: the caller applies the
//! pre/post conditioning XOR exactly once at the API boundary.
//!
//! Reads are split into a byte-wise prefix up to the block alignment, whole
//! aligned blocks, and a byte-wise tail.

use crate::constants::{ValueTable, XOR_OUT};

// ─────────────────────────────────────────────────────────────────────────────
// Raw-register kernels
// ─────────────────────────────────────────────────────────────────────────────

#[inline]
fn bytewise(mut crc: u32, data: &[u8], table: &ValueTable) -> u32 {
  for &b in data {
    crc = table.byte(crc, b);
  }
  crc
}

/// Split `data` at the first address aligned to `align`.
#[inline]
fn split_aligned(data: &[u8], align: usize) -> (&[u8], &[u8]) {
  let head = data.as_ptr().align_offset(align).min(data.len());
  data.split_at(head)
}

/// Slice-by-16 over the raw register.
///
/// Byte `i` of each 16-byte block is looked up in row `15 - i`; the register
/// is mixed into bytes 0..3.
#[inline]
#[allow(clippy::indexing_slicing)] // row indices are constants < 16, byte indices masked to 0..=255
pub(crate) fn fold16(crc: u32, data: &[u8], table: &ValueTable) -> u32 {
  let t = table.rows();
  let (head, body) = split_aligned(data, 16);
  let mut crc = bytewise(crc, head, table);

  let (blocks, tail) = body.as_chunks::<16>();
  for block in blocks {
    let a = u32::from_le_bytes([block[0], block[1], block[2], block[3]]) ^ crc;
    crc = t[15][(a & 0xFF) as usize]
      ^ t[14][((a >> 8) & 0xFF) as usize]
      ^ t[13][((a >> 16) & 0xFF) as usize]
      ^ t[12][(a >> 24) as usize]
      ^ t[11][block[4] as usize]
      ^ t[10][block[5] as usize]
      ^ t[9][block[6] as usize]
      ^ t[8][block[7] as usize]
      ^ t[7][block[8] as usize]
      ^ t[6][block[9] as usize]
      ^ t[5][block[10] as usize]
      ^ t[4][block[11] as usize]
      ^ t[3][block[12] as usize]
      ^ t[2][block[13] as usize]
      ^ t[1][block[14] as usize]
      ^ t[0][block[15] as usize];
  }

  bytewise(crc, tail, table)
}

/// Slice-by-8 over the raw register, using rows 0..7 of the same table.
#[inline]
#[allow(clippy::indexing_slicing)] // row indices are constants < 8, byte indices masked to 0..=255
pub(crate) fn fold8(crc: u32, data: &[u8], table: &ValueTable) -> u32 {
  let t = table.rows();
  let (head, body) = split_aligned(data, 8);
  let mut crc = bytewise(crc, head, table);

  let (blocks, tail) = body.as_chunks::<8>();
  for block in blocks {
    let a = u32::from_le_bytes([block[0], block[1], block[2], block[3]]) ^ crc;
    crc = t[7][(a & 0xFF) as usize]
      ^ t[6][((a >> 8) & 0xFF) as usize]
      ^ t[5][((a >> 16) & 0xFF) as usize]
      ^ t[4][(a >> 24) as usize]
      ^ t[3][block[4] as usize]
      ^ t[2][block[5] as usize]
      ^ t[1][block[6] as usize]
      ^ t[0][block[7] as usize];
  }

  bytewise(crc, tail, table)
}

// ─────────────────────────────────────────────────────────────────────────────
// Conditioned entry points
// ─────────────────────────────────────────────────────────────────────────────

/// Continue `crc` over `data` with slice-by-16.
#[inline]
#[must_use]
pub fn append(crc: u32, data: &[u8], table: &ValueTable) -> u32 {
  fold16(crc ^ XOR_OUT, data, table) ^ XOR_OUT
}

/// Continue `crc` over `data` with slice-by-8.
///
/// Produces the same result as [`append`]; kept as a second software
/// schedule for cross-checking.
#[inline]
#[must_use]
pub fn append_slice8(crc: u32, data: &[u8], table: &ValueTable) -> u32 {
  fold8(crc ^ XOR_OUT, data, table) ^ XOR_OUT
}
