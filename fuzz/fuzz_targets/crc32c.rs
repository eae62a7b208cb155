//! Fuzz target for the CRC-32C engine.
//!
//! Tests that:
//! - No panics on arbitrary input
//! - Chained appends produce the same result as one-shot
//! - Combine reproduces the one-shot result at any split

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  split_point: usize,
  init: u32,
}

fuzz_target!(|input: Input| {
  let data = &input.data;
  let split = input.split_point % (data.len() + 1);

  let oneshot = crc32c::append(0, data);

  let (a, b) = data.split_at(split);
  let crc_a = crc32c::append(0, a);
  assert_eq!(oneshot, crc32c::append(crc_a, b), "chained mismatch");

  let crc_b = crc32c::append(0, b);
  assert_eq!(oneshot, crc32c::combine(crc_a, crc_b, b.len()), "combine mismatch");

  // Arbitrary starting values continue the same way.
  let resumed = crc32c::append(crc32c::append(input.init, a), b);
  assert_eq!(resumed, crc32c::append(input.init, data), "resume mismatch");
});
