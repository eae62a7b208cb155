//! x86/x86_64 CRC-32C using the SSE4.2 `crc32` instruction.
//!
//! Words are 8 bytes on x86_64 (`crc32q`) and 4 bytes on 32-bit x86 (`crc32l`).
//!
//! Safety:
//! - This file is allowed to use `unsafe` for ISA-specific intrinsics.
//! - All unsafe is contained within this module.

#![allow(unsafe_code)]

#[cfg(target_arch = "x86")]
use core::arch::x86::{_mm_crc32_u8, _mm_crc32_u32};
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::{_mm_crc32_u8, _mm_crc32_u64};

use super::fold_interleaved;
use crate::constants::ShiftTable;

/// Three-way interleaved fold with SSE4.2.
///
/// # Safety
/// Caller must ensure the CPU supports the `sse4.2` target feature.
#[target_feature(enable = "sse4.2")]
unsafe fn fold_sse42(crc: u32, data: &[u8], long: &ShiftTable, short: &ShiftTable) -> u32 {
  #[cfg(target_arch = "x86_64")]
  let word = |c: u32, w: [u8; 8]| {
    // SAFETY: only reached from `fold_sse42`, which requires sse4.2.
    unsafe { _mm_crc32_u64(u64::from(c), u64::from_le_bytes(w)) as u32 }
  };
  #[cfg(target_arch = "x86")]
  let word = |c: u32, w: [u8; 4]| {
    // SAFETY: only reached from `fold_sse42`, which requires sse4.2.
    unsafe { _mm_crc32_u32(c, u32::from_le_bytes(w)) }
  };
  let byte = |c: u32, b: u8| {
    // SAFETY: only reached from `fold_sse42`, which requires sse4.2.
    unsafe { _mm_crc32_u8(c, b) }
  };

  fold_interleaved(crc, data, long, short, word, byte)
}

#[inline]
pub(super) fn fold_sse42_runtime(crc: u32, data: &[u8], long: &ShiftTable, short: &ShiftTable) -> u32 {
  // SAFETY: `hwcrc::select` hands this out only when caps report sse4.2.
  unsafe { fold_sse42(crc, data, long, short) }
}
