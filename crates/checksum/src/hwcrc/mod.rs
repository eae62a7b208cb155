//! Three-way interleaved CRC-32C on a single-word hardware instruction.
//!
//! The hardware `crc32` step has a latency of several cycles but a throughput
//! of one per cycle. Running three independent streams over adjacent blocks
//! keeps the unit busy; the partial results are then merged with the
//! precomputed [`ShiftTable`]s:
//!
//! ```text
//! data:  [ head ][ A | B | C ]*  (LONG)   [ A | B | C ]*  (SHORT)  [ words ][ tail ]
//! merge: crc0 = shift(crc0) ^ crc1; crc0 = shift(crc0) ^ crc2
//! ```
//!
//! The schedule is generic over the word step so the arch modules only
//! supply the instruction, and tests can drive it with a table step.

use platform::Caps;

use crate::constants::ShiftTable;

#[cfg(target_arch = "aarch64")]
mod aarch64;
#[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
mod x86;

/// A raw-register hardware kernel: `(crc, data, long, short) -> crc`.
pub(crate) type Kernel = fn(u32, &[u8], &ShiftTable, &ShiftTable) -> u32;

/// Pick the hardware kernel for `caps`, if the instruction is present.
#[must_use]
#[cfg_attr(
  not(any(target_arch = "x86_64", target_arch = "x86", target_arch = "aarch64")),
  allow(unused_variables)
)]
pub(crate) fn select(caps: Caps) -> Option<Kernel> {
  #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
  if caps.has(platform::caps::x86::CRC32C_READY) {
    return Some(x86::fold_sse42_runtime as Kernel);
  }

  #[cfg(target_arch = "aarch64")]
  if caps.has(platform::caps::aarch64::CRC_READY) {
    return Some(aarch64::fold_crc_runtime as Kernel);
  }

  None
}

/// Name of the kernel [`select`] would pick, for diagnostics.
#[must_use]
pub(crate) const fn kernel_name() -> &'static str {
  if cfg!(any(target_arch = "x86_64", target_arch = "x86")) {
    "x86/sse4.2"
  } else if cfg!(target_arch = "aarch64") {
    "aarch64/crc"
  } else {
    "none"
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Schedule
// ─────────────────────────────────────────────────────────────────────────────

/// Fold `data` into the raw register `crc`.
///
/// `word` folds `W` little-endian bytes, `byte` folds one byte. Both must be
/// the same CRC-32C register update the shift tables were built for.
#[inline(always)]
pub(crate) fn fold_interleaved<const W: usize>(
  crc: u32,
  data: &[u8],
  long: &ShiftTable,
  short: &ShiftTable,
  word: impl Fn(u32, [u8; W]) -> u32,
  byte: impl Fn(u32, u8) -> u32,
) -> u32 {
  let head = data.as_ptr().align_offset(W).min(data.len());
  let (head, mut rest) = data.split_at(head);
  let mut crc0 = head.iter().fold(crc, |c, &b| byte(c, b));

  for table in [long, short] {
    let block = table.block_len();
    while let Some((lanes, tail)) = rest.split_at_checked(3 * block) {
      crc0 = three_way(crc0, lanes, table, &word);
      rest = tail;
    }
  }

  let (words, tail) = rest.as_chunks::<W>();
  for w in words {
    crc0 = word(crc0, *w);
  }
  tail.iter().fold(crc0, |c, &b| byte(c, b))
}

/// Fold three adjacent blocks of `table.block_len()` bytes and merge them.
#[inline(always)]
fn three_way<const W: usize>(crc0: u32, lanes: &[u8], table: &ShiftTable, word: &impl Fn(u32, [u8; W]) -> u32) -> u32 {
  let (words, _) = lanes.as_chunks::<W>();
  let per_lane = table.block_len() / W;
  let (a, bc) = words.split_at(per_lane);
  let (b, c) = bc.split_at(per_lane);

  let (mut crc0, mut crc1, mut crc2) = (crc0, 0u32, 0u32);
  for ((x, y), z) in a.iter().zip(b).zip(c) {
    crc0 = word(crc0, *x);
    crc1 = word(crc1, *y);
    crc2 = word(crc2, *z);
  }

  crc0 = table.apply(crc0) ^ crc1;
  table.apply(crc0) ^ crc2
}
