//! CRC-32C combination.
//!
//! Computes `crc(A || B)` from `crc(A)`, `crc(B)` and `len(B)` in
//! O(log len(B)) matrix squarings, without touching the data.
//!
//! Appending `B` to `A` moves `crc(A)` past `len(B)` zero bytes and XORs in
//! `crc(B)`. The move is the one-zero-byte operator raised to `len(B)`, done
//! by square-and-multiply over the byte length. Because the entry and exit
//! conditioning are the same constant, this holds for finalized values.

use crate::constants::{POLYNOMIAL, shift_operator};

/// Combine two CRC-32C values.
///
/// Given `crc_a = crc(A)` and `crc_b = crc(B)`, returns `crc(A || B)`.
///
/// ```
/// let (a, b) = b"123456789".split_at(4);
/// let crc = crc32c::combine(crc32c::append(0, a), crc32c::append(0, b), b.len());
/// assert_eq!(crc, 0xE306_9283);
/// ```
#[must_use]
pub const fn combine(crc_a: u32, crc_b: u32, len_b: usize) -> u32 {
  if len_b == 0 {
    return crc_a;
  }

  let mut op = shift_operator(POLYNOMIAL, 1);
  let mut crc = crc_a;
  let mut len = len_b;
  loop {
    if len & 1 != 0 {
      crc = op.mul_vec(crc);
    }
    len >>= 1;
    if len == 0 {
      break;
    }
    op = op.square();
  }

  crc ^ crc_b
}
