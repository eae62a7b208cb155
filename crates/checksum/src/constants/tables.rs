//! Slice-by-16 value table generation.
//!
//! # Table Structure
//!
//! 16 tables of 256 entries (16 KiB):
//! - Table 0: the CRC of each single byte value (eight division steps)
//! - Table k: the contribution of a byte that sits `k` positions before the
//!   end of a 16-byte block
//!
//! Table k is table k-1 pushed through one more zero byte, which is what
//! lets the software engine fold 16 bytes with one XOR reduction.

// SAFETY: All array indexing in this module uses bounded loop indices (0..16,
// 0..256) or values masked with `& 0xFF`. Clippy cannot prove this in const fn
// contexts.
#![allow(clippy::indexing_slicing)]

/// Rows in the slice-by-16 table.
pub const ROWS: usize = 16;

/// One division step over a single byte value, bit at a time.
#[must_use]
pub const fn table_entry(poly: u32, byte: u8) -> u32 {
  let mut crc = byte as u32;
  let mut j = 0;
  while j < 8 {
    crc = if crc & 1 != 0 { (crc >> 1) ^ poly } else { crc >> 1 };
    j += 1;
  }
  crc
}

/// The `[[u32; 256]; 16]` slice-by-16 table.
#[derive(Clone, PartialEq, Eq)]
#[repr(align(64))]
pub struct ValueTable([[u32; 256]; ROWS]);

impl ValueTable {
  /// Build all 16 rows for the reflected polynomial `poly`.
  #[must_use]
  pub const fn build(poly: u32) -> Self {
    let mut rows = [[0u32; 256]; ROWS];

    let mut n = 0;
    while n < 256 {
      rows[0][n] = table_entry(poly, n as u8);
      n += 1;
    }

    let mut k = 1;
    while k < ROWS {
      let mut n = 0;
      while n < 256 {
        let prev = rows[k - 1][n];
        rows[k][n] = rows[0][(prev & 0xFF) as usize] ^ (prev >> 8);
        n += 1;
      }
      k += 1;
    }

    Self(rows)
  }

  /// All rows.
  #[inline]
  #[must_use]
  pub const fn rows(&self) -> &[[u32; 256]; ROWS] {
    &self.0
  }

  /// Fold one byte into a raw register using row 0.
  #[inline(always)]
  #[must_use]
  pub const fn byte(&self, crc: u32, b: u8) -> u32 {
    self.0[0][((crc ^ b as u32) & 0xFF) as usize] ^ (crc >> 8)
  }
}

impl core::fmt::Debug for ValueTable {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("ValueTable")
      .field("rows", &ROWS)
      .field("t0[1]", &format_args!("{:#010x}", self.0[0][1]))
      .finish_non_exhaustive()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::POLYNOMIAL;

  #[test]
  fn test_known_entries() {
    let t = ValueTable::build(POLYNOMIAL);
    assert_eq!(t.rows()[0][0], 0);
    assert_eq!(t.rows()[0][1], 0xF26B_8303);
    assert_eq!(t.rows()[0][128], POLYNOMIAL);
    assert_eq!(t.rows()[0][255], 0xAD7D_5351);
  }

  #[test]
  fn test_rows_are_linear() {
    let t = ValueTable::build(POLYNOMIAL);
    for row in t.rows() {
      assert_eq!(row[0], 0);
      for a in 0..256usize {
        for b in [1usize, 2, 0x40, 0x81] {
          assert_eq!(row[a ^ b], row[a] ^ row[b]);
        }
      }
    }
  }

  #[test]
  fn test_row_k_is_one_more_zero_byte() {
    let t = ValueTable::build(POLYNOMIAL);
    for k in 1..ROWS {
      for n in 0..256 {
        assert_eq!(t.rows()[k][n], t.byte(t.rows()[k - 1][n], 0));
      }
    }
  }

  #[test]
  fn test_const_and_runtime_match() {
    assert_eq!(crate::constants::CONST_TABLE, ValueTable::build(POLYNOMIAL));
  }
}
