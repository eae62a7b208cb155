//! Tests verifying the software engine is always reachable.
//!
//! Forcing software (programmatically or through `CRC32C_FORCE`) must work on
//! every platform, and a hardware request must never fail the checksum path.

use crc32c::{Backend, Config, Engine, Error, Force, config::ENV_FORCE};

const CHECK_STRING: &[u8] = b"123456789";
const CRC32C_CHECK: u32 = 0xE306_9283;

#[test]
fn forced_software_produces_correct_result() {
  let engine = Engine::with_config(Config::new(Force::Software));
  assert_eq!(engine.backend(), Backend::Software);
  let result = engine.append(0, CHECK_STRING);
  assert_eq!(
    result, CRC32C_CHECK,
    "CRC-32C mismatch: got {result:#010X}, expected {CRC32C_CHECK:#010X}"
  );
}

#[test]
fn forced_hardware_clamps_instead_of_failing() {
  let engine = Engine::with_config(Config::new(Force::Hardware));
  assert_eq!(engine.config().force, Force::Hardware);
  assert_eq!(engine.hardware_available(), platform::caps().has_crc32c());
  assert_eq!(engine.append(0, CHECK_STRING), CRC32C_CHECK);
}

#[test]
fn strict_hardware_request_is_typed() {
  match Engine::with_backend(Backend::Hardware) {
    Ok(engine) => assert_eq!(engine.append(0, CHECK_STRING), CRC32C_CHECK),
    Err(err) => {
      assert!(matches!(err, Error::HardwareUnavailable { .. }));
      assert!(err.to_string().contains("not available"));
    }
  }
}

#[test]
fn env_override_forces_software() {
  // SAFETY: this is the only test in the binary that touches the environment,
  // and it sets the variable before anything reads it.
  unsafe { std::env::set_var(ENV_FORCE, " Portable ") };
  assert_eq!(Config::from_env().force, Force::Software);

  let engine = crc32c::initialize();
  assert_eq!(engine.backend(), Backend::Software);
  assert!(!crc32c::hardware_available());
  assert_eq!(crc32c::append(0, CHECK_STRING), CRC32C_CHECK);
}
