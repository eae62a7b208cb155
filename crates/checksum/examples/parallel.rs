//! Parallel CRC-32C using `combine`.
//!
//! Given crc(A), crc(B) and len(B), `combine` yields crc(A || B) without the
//! data, so chunks can be checksummed on different threads and merged.
//!
//! Run with: `cargo run --example parallel -p crc32c`

use std::thread;

fn main() {
  println!("=== Parallel CRC-32C Examples ===\n");

  combine_basics();
  scoped_threads();
}

fn combine_basics() {
  println!("--- Combine Basics ---\n");

  let data = b"hello world";
  let (part_a, part_b) = data.split_at(6);

  let crc_a = crc32c::append(0, part_a);
  let crc_b = crc32c::append(0, part_b);
  println!("Part A (\"hello \"): 0x{crc_a:08X}");
  println!("Part B (\"world\"):  0x{crc_b:08X}");

  let combined = crc32c::combine(crc_a, crc_b, part_b.len());
  let expected = crc32c::append(0, data);
  println!("Combined:           0x{combined:08X}");
  assert_eq!(combined, expected);
  println!("Match!\n");
}

/// Checksum fixed-size chunks on scoped threads, then fold them together.
fn scoped_threads() {
  println!("--- Scoped Threads ---\n");

  let data: Vec<u8> = (0..4_000_000u32).map(|i| (i.wrapping_mul(17) % 256) as u8).collect();
  let num_threads = 4;
  let chunk_size = data.len().div_ceil(num_threads);

  let sequential = crc32c::append(0, &data);
  println!("Sequential: 0x{sequential:08X}");

  let parts: Vec<(u32, usize)> = thread::scope(|s| {
    let handles: Vec<_> = data
      .chunks(chunk_size)
      .map(|chunk| s.spawn(move || (crc32c::append(0, chunk), chunk.len())))
      .collect();
    handles.into_iter().map(|h| h.join().expect("thread panicked")).collect()
  });

  let combined = parts.iter().fold(0u32, |acc, &(crc, len)| crc32c::combine(acc, crc, len));
  println!("Threaded:   0x{combined:08X}");
  assert_eq!(sequential, combined);
  println!("Match! (used {} threads)\n", parts.len());
}
