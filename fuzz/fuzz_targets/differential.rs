//! Differential fuzzing across every CRC-32C path and against `crc-fast`.

#![no_main]

use crc32c::{bitwise, portable};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  let engine = crc32c::initialize();
  let reference = bitwise::append(0, data);

  let software = engine.append_software(0, data);
  assert_eq!(software, reference, "software mismatch: len={}", data.len());

  let slice8 = portable::append_slice8(0, data, engine.tables().value());
  assert_eq!(slice8, reference, "slice8 mismatch: len={}", data.len());

  if let Some(hw) = engine.append_hardware(0, data) {
    assert_eq!(hw, reference, "hardware mismatch: len={}", data.len());
  }

  let external = crc_fast::checksum(crc_fast::CrcAlgorithm::Crc32Iscsi, data) as u32;
  assert_eq!(
    reference, external,
    "differential mismatch: ours={reference:#010x}, crc-fast={external:#010x}, len={}",
    data.len()
  );
});
