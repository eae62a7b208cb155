//! GF(2) matrix arithmetic for CRC-32C shift operators.
//!
//! A CRC register update is linear over GF(2), so the effect of appending a
//! run of zero bits to any register state is a fixed 32x32 bit matrix. These
//! helpers build and compose such matrices; everything is `const fn` so the
//! operators can be evaluated at compile time as well as at startup.
//!
//! # Representation
//!
//! A matrix is 32 `u32` rows. Row `i` is the image of the basis state
//! `1 << i`, so applying the matrix to a vector XORs together the rows picked
//! out by the vector's set bits.

// SAFETY: All array indexing in this module uses bounded loop indices (0..32).
// Clippy cannot prove this in const fn contexts, but the bounds are statically
// guaranteed by the loop conditions.
#![allow(clippy::indexing_slicing)]

/// Rows (and columns) in a CRC-32 operator.
pub const DIM: usize = 32;

/// Apply `mat` to `vec`: XOR of the rows selected by the set bits of `vec`.
///
/// Bits are examined from the least significant upwards and row `i` is paired
/// with bit `i`; all 32 rows are visited whether or not their bit is set.
#[inline]
#[must_use]
pub const fn matrix_vector(mat: &[u32; DIM], vec: u32) -> u32 {
  let mut sum = 0u32;
  let mut i = 0;
  while i < DIM {
    if (vec >> i) & 1 != 0 {
      sum ^= mat[i];
    }
    i += 1;
  }
  sum
}

/// Square `mat` over GF(2): `out[n] = mat * mat[n]`.
///
/// If `mat` appends `k` zero bits, the result appends `2k`.
#[must_use]
pub const fn matrix_square(mat: &[u32; DIM]) -> [u32; DIM] {
  let mut out = [0u32; DIM];
  let mut n = 0;
  while n < DIM {
    out[n] = matrix_vector(mat, mat[n]);
    n += 1;
  }
  out
}

/// A 32x32 GF(2) matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gf2Matrix32([u32; DIM]);

impl Gf2Matrix32 {
  /// Create the identity matrix (appends nothing).
  #[must_use]
  pub const fn identity() -> Self {
    let mut m = [0u32; DIM];
    let mut i = 0;
    while i < DIM {
      m[i] = 1 << i;
      i += 1;
    }
    Self(m)
  }

  /// Wrap raw rows.
  #[inline]
  #[must_use]
  pub const fn from_rows(rows: [u32; DIM]) -> Self {
    Self(rows)
  }

  /// The matrix rows.
  #[inline]
  #[must_use]
  pub const fn rows(&self) -> &[u32; DIM] {
    &self.0
  }

  /// The operator for one zero bit under the reflected polynomial `poly`.
  ///
  /// One reflected step is `crc = (crc >> 1) ^ (crc & 1 ? poly : 0)`, so bit 0
  /// maps to `poly` and bit `j > 0` maps to bit `j - 1`.
  #[must_use]
  pub const fn one_zero_bit(poly: u32) -> Self {
    let mut m = [0u32; DIM];
    m[0] = poly;
    let mut row = 1u32;
    let mut n = 1;
    while n < DIM {
      m[n] = row;
      row <<= 1;
      n += 1;
    }
    Self(m)
  }

  /// Multiply the matrix by a vector.
  #[inline]
  #[must_use]
  pub const fn mul_vec(&self, vec: u32) -> u32 {
    matrix_vector(&self.0, vec)
  }

  /// Multiply two matrices (`self * other`): apply `other`, then `self`.
  #[must_use]
  pub const fn mul_mat(&self, other: &Self) -> Self {
    let mut out = [0u32; DIM];
    let mut n = 0;
    while n < DIM {
      out[n] = self.mul_vec(other.0[n]);
      n += 1;
    }
    Self(out)
  }

  /// Square the matrix.
  #[inline]
  #[must_use]
  pub const fn square(&self) -> Self {
    Self(matrix_square(&self.0))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::constants::POLYNOMIAL;

  /// One reflected CRC step per bit, on the raw register.
  fn step_bits(mut crc: u32, bits: u32) -> u32 {
    for _ in 0..bits {
      crc = if crc & 1 != 0 { (crc >> 1) ^ POLYNOMIAL } else { crc >> 1 };
    }
    crc
  }

  #[test]
  fn test_identity() {
    let id = Gf2Matrix32::identity();
    for v in [0u32, 1, 0x8000_0000, 0xDEAD_BEEF, u32::MAX] {
      assert_eq!(id.mul_vec(v), v);
    }
    assert_eq!(id.square(), id);
  }

  #[test]
  fn test_matrix_vector_visits_every_row() {
    let mut rows = [0u32; DIM];
    for (i, row) in rows.iter_mut().enumerate() {
      *row = 1 << (DIM - 1 - i);
    }
    // Bit reversal: high bits of `vec` must pick the low rows' images.
    assert_eq!(matrix_vector(&rows, 0x8000_0000), 1);
    assert_eq!(matrix_vector(&rows, 1), 0x8000_0000);
    assert_eq!(matrix_vector(&rows, 0x0000_00F0), 0x0F00_0000);
  }

  #[test]
  fn test_one_zero_bit_matches_bit_step() {
    let op = Gf2Matrix32::one_zero_bit(POLYNOMIAL);
    for v in [0u32, 1, 2, 3, 0x8000_0001, 0x1234_5678, u32::MAX] {
      assert_eq!(op.mul_vec(v), step_bits(v, 1));
    }
  }

  #[test]
  fn test_square_doubles_shift() {
    let one = Gf2Matrix32::one_zero_bit(POLYNOMIAL);
    let two = one.square();
    let four = two.square();
    let eight = four.square();
    for v in [1u32, 0xFFFF_FFFF, 0x0BAD_F00D] {
      assert_eq!(two.mul_vec(v), step_bits(v, 2));
      assert_eq!(four.mul_vec(v), step_bits(v, 4));
      assert_eq!(eight.mul_vec(v), step_bits(v, 8));
    }
  }

  #[test]
  fn test_mul_mat_composes() {
    let one = Gf2Matrix32::one_zero_bit(POLYNOMIAL);
    let three = one.mul_mat(&one.square());
    assert_eq!(three.mul_vec(0xCAFE_BABE), step_bits(0xCAFE_BABE, 3));
    assert_eq!(one.mul_mat(&one), one.square());
  }

  #[test]
  fn test_const_evaluable() {
    const EIGHT: Gf2Matrix32 = Gf2Matrix32::one_zero_bit(POLYNOMIAL).square().square().square();
    assert_eq!(EIGHT.mul_vec(0x55), step_bits(0x55, 8));
  }
}
