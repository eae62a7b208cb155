//! CPU capability bitset.
//!
//! [`Caps`] answers one question: "which CRC-relevant instructions can legally
//! run on this machine?" Bits are architecture-specific but the API is uniform
//! across targets.
//!
//! # Bit Layout
//!
//! - Bits 0-31: x86/x86_64 features
//! - Bits 32-63: aarch64 features

/// CPU capabilities as a 64-bit feature set.
///
/// `Caps` is `Copy`, `Send`, and `Sync`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Caps(pub(crate) u64);

impl Caps {
  /// Empty capability set (no features).
  pub const NONE: Self = Self(0);

  /// Create a capability set with a single bit set.
  #[inline]
  #[must_use]
  pub const fn bit(bit: u8) -> Self {
    Self(1u64 << (bit % 64))
  }

  /// Create a capability set from raw bits.
  ///
  /// Intended for tests and fuzzing; normal code uses the named constants.
  #[inline]
  #[must_use]
  pub const fn from_bits(bits: u64) -> Self {
    Self(bits)
  }

  /// Raw bits of the set.
  #[inline]
  #[must_use]
  pub const fn bits(self) -> u64 {
    self.0
  }

  /// Check if all features in `required` are present.
  #[inline(always)]
  #[must_use]
  pub const fn has(self, required: Self) -> bool {
    (self.0 & required.0) == required.0
  }

  /// Union of two capability sets.
  #[inline]
  #[must_use]
  pub const fn union(self, other: Self) -> Self {
    Self(self.0 | other.0)
  }

  /// Features in `self` that are not in `other`.
  #[inline]
  #[must_use]
  pub const fn difference(self, other: Self) -> Self {
    Self(self.0 & !other.0)
  }

  /// Check if the capability set is empty.
  #[inline]
  #[must_use]
  pub const fn is_empty(self) -> bool {
    self.0 == 0
  }

  /// Whether a single-word CRC-32C instruction is available for the
  /// architecture this crate was compiled for.
  #[inline]
  #[must_use]
  pub const fn has_crc32c(self) -> bool {
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    {
      self.has(x86::CRC32C_READY)
    }
    #[cfg(target_arch = "aarch64")]
    {
      self.has(aarch64::CRC_READY)
    }
    #[cfg(not(any(target_arch = "x86_64", target_arch = "x86", target_arch = "aarch64")))]
    {
      false
    }
  }

  /// Names of the features present, for diagnostics.
  pub fn names(self) -> impl Iterator<Item = &'static str> {
    NAMED.iter().filter(move |(_, cap)| self.has(*cap)).map(|(name, _)| *name)
  }
}

impl core::ops::BitOr for Caps {
  type Output = Self;

  #[inline]
  fn bitor(self, rhs: Self) -> Self {
    self.union(rhs)
  }
}

impl core::ops::BitOrAssign for Caps {
  #[inline]
  fn bitor_assign(&mut self, rhs: Self) {
    *self = self.union(rhs);
  }
}

impl core::fmt::Debug for Caps {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_set().entries(self.names()).finish()
  }
}

const NAMED: [(&str, Caps); 4] = [
  ("sse2", x86::SSE2),
  ("sse4.2", x86::SSE42),
  ("neon", aarch64::NEON),
  ("crc", aarch64::CRC),
];

// ─────────────────────────────────────────────────────────────────────────────
// x86/x86_64 Features (bits 0-31)
// ─────────────────────────────────────────────────────────────────────────────

/// x86/x86_64 CPU features.
pub mod x86 {
  use super::Caps;

  pub const SSE2: Caps = Caps::bit(0);
  pub const SSE42: Caps = Caps::bit(4);

  /// CRC32C-ready: SSE4.2 provides `crc32{b,w,l,q}` with the Castagnoli polynomial.
  pub const CRC32C_READY: Caps = SSE42;
}

// ─────────────────────────────────────────────────────────────────────────────
// aarch64 Features (bits 32-63)
// ─────────────────────────────────────────────────────────────────────────────

/// aarch64 CPU features.
pub mod aarch64 {
  use super::Caps;

  pub const NEON: Caps = Caps::bit(32);
  pub const CRC: Caps = Caps::bit(33);

  /// CRC32C-ready: CRC extension (`crc32c{b,h,w,x}`).
  pub const CRC_READY: Caps = CRC;
}
