//! CRC-32C runtime configuration.
//!
//! The only knob is which backend the engine should use. It can be set
//! programmatically or through the `CRC32C_FORCE` environment variable:
//!
//! | Value | Effect |
//! |-------|--------|
//! | `auto` (or unset) | hardware when the CPU has it, else software |
//! | `software`, `portable`, `table` | always the slice-by-16 table engine |
//! | `hardware`, `hwcrc`, `sse4.2`, `crc` | hardware engine, clamped to detected capability |
//!
//! Values are trimmed and matched case-insensitively; anything else means `auto`.

/// Environment variable read by [`Config::from_env`].
pub const ENV_FORCE: &str = "CRC32C_FORCE";

/// Requested backend selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub enum Force {
  /// Use hardware when available.
  #[default]
  Auto,
  /// Force the table-driven software engine.
  Software,
  /// Request the hardware engine.
  ///
  /// - x86/x86_64: SSE4.2 `crc32`
  /// - aarch64: ARMv8 CRC extension
  Hardware,
}

impl Force {
  /// Canonical name, accepted back by [`Force::parse`].
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Auto => "auto",
      Self::Software => "software",
      Self::Hardware => "hardware",
    }
  }

  /// Parse a force value. Returns `None` for blank or unknown input.
  #[must_use]
  pub fn parse(value: &str) -> Option<Self> {
    let value = value.trim();
    if value.is_empty() {
      return None;
    }

    if value.eq_ignore_ascii_case("auto") {
      return Some(Self::Auto);
    }
    if value.eq_ignore_ascii_case("software")
      || value.eq_ignore_ascii_case("portable")
      || value.eq_ignore_ascii_case("table")
    {
      return Some(Self::Software);
    }
    if value.eq_ignore_ascii_case("hardware")
      || value.eq_ignore_ascii_case("hwcrc")
      || value.eq_ignore_ascii_case("sse4.2")
      || value.eq_ignore_ascii_case("crc")
    {
      return Some(Self::Hardware);
    }

    None
  }
}

impl core::fmt::Display for Force {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Engine configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub struct Config {
  /// Requested backend.
  pub force: Force,
}

impl Config {
  /// Configuration requesting `force`.
  #[must_use]
  pub const fn new(force: Force) -> Self {
    Self { force }
  }

  /// Read overrides from the environment.
  #[cfg(feature = "std")]
  #[must_use]
  pub fn from_env() -> Self {
    let force = std::env::var(ENV_FORCE).ok().as_deref().and_then(Force::parse).unwrap_or_default();
    Self { force }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_aliases() {
    assert_eq!(Force::parse("auto"), Some(Force::Auto));
    assert_eq!(Force::parse("  Portable "), Some(Force::Software));
    assert_eq!(Force::parse("TABLE"), Some(Force::Software));
    assert_eq!(Force::parse("software"), Some(Force::Software));
    assert_eq!(Force::parse("hwcrc"), Some(Force::Hardware));
    assert_eq!(Force::parse("SSE4.2"), Some(Force::Hardware));
    assert_eq!(Force::parse("crc"), Some(Force::Hardware));
    assert_eq!(Force::parse("hardware\n"), Some(Force::Hardware));
  }

  #[test]
  fn test_parse_rejects() {
    assert_eq!(Force::parse(""), None);
    assert_eq!(Force::parse("   "), None);
    assert_eq!(Force::parse("avx512"), None);
  }

  #[test]
  fn test_as_str_round_trips() {
    for force in [Force::Auto, Force::Software, Force::Hardware] {
      assert_eq!(Force::parse(force.as_str()), Some(force));
    }
  }

  #[test]
  fn test_default_is_auto() {
    assert_eq!(Config::default().force, Force::Auto);
  }
}
