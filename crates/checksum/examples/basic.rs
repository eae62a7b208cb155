//! Basic CRC-32C usage: one-shot, continued, and explicit engines.
//!
//! Run with: `cargo run --example basic -p crc32c`

use crc32c::{Backend, Config, Engine, Force};

fn main() {
  println!("=== CRC-32C Basic Examples ===\n");

  one_shot_example();
  continue_example();
  engine_example();
}

/// One-shot computation on the process-wide engine.
fn one_shot_example() {
  println!("--- One-Shot Computation ---\n");

  let crc = crc32c::append(0, b"123456789");
  println!("CRC-32C:          0x{crc:08X}");
  assert_eq!(crc, 0xE306_9283);

  println!("Hardware in use:  {}", crc32c::hardware_available());
  println!();
}

/// Continue from a saved checksum.
fn continue_example() {
  println!("--- Continue from Saved Value ---\n");

  let part1 = b"first part of data";
  let part2 = b" and the second part";

  let saved = crc32c::append(0, part1);
  println!("Saved after part1: 0x{saved:08X}");

  let final_crc = crc32c::append(saved, part2);
  println!("Final after part2: 0x{final_crc:08X}");

  let mut full = Vec::with_capacity(part1.len() + part2.len());
  full.extend_from_slice(part1);
  full.extend_from_slice(part2);
  assert_eq!(final_crc, crc32c::append(0, &full));
  println!("Verified: matches full computation");

  println!();
}

/// Explicit engines with a chosen backend.
fn engine_example() {
  println!("--- Explicit Engines ---\n");

  let software = Engine::with_config(Config::new(Force::Software));
  println!("{software:?}");
  assert_eq!(software.append(0, b"123456789"), 0xE306_9283);

  match Engine::with_backend(Backend::Hardware) {
    Ok(hw) => println!("hardware engine:  0x{:08X}", hw.append(0, b"123456789")),
    Err(err) => println!("hardware engine:  {err}"),
  }

  println!();
}
