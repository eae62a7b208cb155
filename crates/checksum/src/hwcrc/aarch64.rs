//! aarch64 CRC-32C using the ARMv8 CRC extension (`crc32cx`, `crc32cb`).
//!
//! Safety:
//! - This file is allowed to use `unsafe` for ISA-specific intrinsics.
//! - All unsafe is contained within this module.

#![allow(unsafe_code)]

use core::arch::aarch64::{__crc32cb, __crc32cd};

use super::fold_interleaved;
use crate::constants::ShiftTable;

/// Three-way interleaved fold with the CRC extension.
///
/// # Safety
/// Caller must ensure the CPU supports the `crc` target feature.
#[target_feature(enable = "crc")]
unsafe fn fold_crc(crc: u32, data: &[u8], long: &ShiftTable, short: &ShiftTable) -> u32 {
  let word = |c: u32, w: [u8; 8]| {
    // SAFETY: only reached from `fold_crc`, which requires the crc extension.
    unsafe { __crc32cd(c, u64::from_le_bytes(w)) }
  };
  let byte = |c: u32, b: u8| {
    // SAFETY: only reached from `fold_crc`, which requires the crc extension.
    unsafe { __crc32cb(c, b) }
  };

  fold_interleaved(crc, data, long, short, word, byte)
}

#[inline]
pub(super) fn fold_crc_runtime(crc: u32, data: &[u8], long: &ShiftTable, short: &ShiftTable) -> u32 {
  // SAFETY: `hwcrc::select` hands this out only when caps report the crc extension.
  unsafe { fold_crc(crc, data, long, short) }
}
