//! CPU capability detection for the CRC-32C engine.
//!
//! This crate answers one question for the checksum crate: can this machine
//! run a single-word hardware CRC-32C instruction? It is the only place that
//! queries CPUID/auxv, so the engine sees the result as a plain [`Caps`] value.
//!
//! ```
//! let caps = platform::caps();
//! if caps.has_crc32c() {
//!   // SSE4.2 `crc32` or the ARMv8 CRC extension is usable.
//! }
//! ```
//!
//! With `std`, runtime detection is cached in a `OnceLock`. Without it only
//! compile-time target features are reported. Under Miri the set is empty.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod caps;
mod detect;

pub use caps::Caps;
pub use detect::caps_static;

/// Get the detected CPU capabilities.
#[inline]
#[must_use]
pub fn caps() -> Caps {
  detect::caps()
}
