//! CRC-32C (Castagnoli) checksums with software and hardware engines.
//!
//! Two paths produce bit-identical results:
//!
//! | Path | Technique | Tables |
//! |------|-----------|--------|
//! | Software | slice-by-16 table lookups | 16 KiB value table |
//! | Hardware | three interleaved `crc32` streams, merged with shift tables | 2 x 4 KiB shift tables |
//!
//! The hardware path uses SSE4.2 `crc32` on x86/x86_64 and the ARMv8 CRC
//! extension on aarch64. It is picked automatically when the CPU supports it.
//!
//! # Example
//!
//! ```rust
//! // One-shot computation.
//! assert_eq!(crc32c::append(0, b"123456789"), 0xE306_9283);
//!
//! // Continue from an earlier result.
//! let crc = crc32c::append(0, b"1234");
//! assert_eq!(crc32c::append(crc, b"56789"), 0xE306_9283);
//!
//! // Combine independently computed parts.
//! let a = crc32c::append(0, b"1234");
//! let b = crc32c::append(0, b"56789");
//! assert_eq!(crc32c::combine(a, b, 5), 0xE306_9283);
//! ```
//!
//! # Configuration
//!
//! The process-wide engine reads `CRC32C_FORCE` once (see [`config`]). An
//! explicit [`Engine`] can be built with any [`Config`] or [`Backend`].
//!
//! # no_std Support
//!
//! Without the `std` feature there is no process-wide engine; build an
//! [`Engine`] and keep it. Hardware detection then relies on compile-time
//! target features only.
//!
//! ```toml
//! [dependencies]
//! crc32c = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod bitwise;
#[cfg(feature = "std")]
pub mod codegen;
mod combine;
pub mod config;
pub mod constants;
mod dispatch;
mod error;
mod hwcrc;
pub mod portable;

pub use combine::combine;
pub use config::{Config, Force};
#[cfg(feature = "std")]
pub use dispatch::{append, hardware_available, initialize};
pub use dispatch::{Backend, Engine, Tables};
pub use error::Error;
