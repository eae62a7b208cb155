//! Table-less, bit-at-a-time CRC-32C.
//!
//! This is the slowest path and the oracle every other path is tested
//! against. It works directly on the finalized CRC value: the conditioning
//! XOR is folded into each step, so callers pass and receive the same value
//! the public [`append`](crate::append) uses.

use crate::constants::POLYNOMIAL;

/// Continue the CRC-32C `crc` over `data`, one bit at a time.
///
/// ```
/// assert_eq!(crc32c::bitwise::append(0, b"123456789"), 0xE306_9283);
/// ```
#[inline]
#[must_use]
pub fn append(crc: u32, data: &[u8]) -> u32 {
  data.iter().fold(crc, |crc, &b| append_byte(crc, b))
}

/// Fold one byte into a finalized CRC value.
///
/// Each bit step is the register update `(r >> 1) ^ (r & 1) * POLY` rewritten
/// for `crc = !r`; `wrapping_mul` by a 0/1 bit selects the polynomial without a
/// branch.
#[inline]
#[must_use]
pub const fn append_byte(mut crc: u32, byte: u8) -> u32 {
  crc ^= byte as u32;
  let mut i = 0;
  while i < 8 {
    crc = (crc >> 1) ^ 0x8000_0000 ^ (!crc & 1).wrapping_mul(POLYNOMIAL);
    i += 1;
  }
  crc
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_check_value() {
    assert_eq!(append(0, b"123456789"), 0xE306_9283);
  }

  #[test]
  fn test_empty() {
    assert_eq!(append(0, b""), 0);
    assert_eq!(append(0xDEAD_BEEF, b""), 0xDEAD_BEEF);
  }

  #[test]
  fn test_known_vectors() {
    assert_eq!(append(0, &[0u8]), 0x527D_5351);
    assert_eq!(append(0, &[0u8; 32]), 0x8A91_36AA);
    assert_eq!(append(0, &[0xFFu8; 32]), 0x62A8_AB43);
  }

  #[test]
  fn test_chained() {
    let data = b"The quick brown fox jumps over the lazy dog";
    let (a, b) = data.split_at(17);
    assert_eq!(append(append(0, a), b), append(0, data));
  }

  #[test]
  fn test_const_evaluable() {
    const ZERO: u32 = append_byte(0, 0);
    assert_eq!(ZERO, 0x527D_5351);
  }
}
