//! CPU feature detection.
//!
//! - Compile-time detection via `cfg!(target_feature = "...")`
//! - Runtime detection via `is_*_feature_detected!` (std only)
//! - Caching via `OnceLock` (std); without std only compile-time caps exist
//! - Miri always sees portable-only caps

use crate::caps::Caps;

/// Returns CPU capabilities known at compile time.
///
/// Detects features enabled via `-C target-feature=...` or
/// `-C target-cpu=native`. The compiler folds every branch.
///
/// ```
/// const CAPS: platform::Caps = platform::caps_static();
///
/// #[cfg(target_arch = "x86_64")]
/// assert!(CAPS.has(platform::caps::x86::SSE2));
/// ```
#[inline(always)]
#[must_use]
pub const fn caps_static() -> Caps {
  #[allow(unused_mut)]
  let mut result = Caps::NONE;

  #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
  {
    use crate::caps::x86;
    if cfg!(target_feature = "sse2") {
      result = result.union(x86::SSE2);
    }
    if cfg!(target_feature = "sse4.2") {
      result = result.union(x86::SSE42);
    }
  }

  #[cfg(target_arch = "aarch64")]
  {
    use crate::caps::aarch64;
    if cfg!(target_feature = "neon") {
      result = result.union(aarch64::NEON);
    }
    if cfg!(target_feature = "crc") {
      result = result.union(aarch64::CRC);
    }
  }

  result
}

#[cfg(all(feature = "std", not(miri)))]
fn detect_runtime() -> Caps {
  #[allow(unused_mut)]
  let mut caps = caps_static();

  #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
  {
    use crate::caps::x86;
    if std::arch::is_x86_feature_detected!("sse2") {
      caps |= x86::SSE2;
    }
    if std::arch::is_x86_feature_detected!("sse4.2") {
      caps |= x86::SSE42;
    }
  }

  #[cfg(target_arch = "aarch64")]
  {
    use crate::caps::aarch64;
    if std::arch::is_aarch64_feature_detected!("neon") {
      caps |= aarch64::NEON;
    }
    if std::arch::is_aarch64_feature_detected!("crc") {
      caps |= aarch64::CRC;
    }
  }

  caps
}

#[cfg(all(feature = "std", not(miri)))]
pub(crate) fn caps() -> Caps {
  use std::sync::OnceLock;
  static CAPS: OnceLock<Caps> = OnceLock::new();
  *CAPS.get_or_init(detect_runtime)
}

#[cfg(all(not(feature = "std"), not(miri)))]
pub(crate) fn caps() -> Caps {
  caps_static()
}

#[cfg(miri)]
pub(crate) fn caps() -> Caps {
  Caps::NONE
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  #[cfg(not(miri))]
  fn test_runtime_is_superset_of_static() {
    assert!(caps().has(caps_static()));
  }

  #[test]
  fn test_caps_is_stable() {
    assert_eq!(caps(), caps());
  }

  #[test]
  #[cfg(all(target_arch = "x86_64", not(miri)))]
  fn test_x86_64_has_sse2() {
    use crate::caps::x86;
    assert!(caps().has(x86::SSE2));
  }

  #[test]
  #[cfg(all(target_arch = "x86_64", feature = "std", not(miri)))]
  fn test_x86_64_sse42_matches_std() {
    use crate::caps::x86;
    assert_eq!(caps().has(x86::SSE42), std::arch::is_x86_feature_detected!("sse4.2"));
  }

  #[test]
  #[cfg(miri)]
  fn test_miri_returns_portable() {
    assert!(caps().is_empty());
  }
}
