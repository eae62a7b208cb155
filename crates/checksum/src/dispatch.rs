//! Backend selection and the CRC-32C engine.
//!
//! An [`Engine`] owns every table the checksum paths need plus the backend
//! chosen when it was built. It is immutable afterwards, so one instance can
//! be shared freely across threads.
//!
//! With `std`, a process-wide engine is built lazily on first use behind a
//! `OnceLock`: concurrent first callers block until it is complete, and every
//! later call is a plain read.

use tracing::{debug, warn};

use crate::{
  config::{Config, Force},
  constants::{LONG, POLYNOMIAL, SHORT, ShiftTable, ValueTable, XOR_OUT},
  error::Error,
  hwcrc, portable,
};

// ─────────────────────────────────────────────────────────────────────────────
// Backend
// ─────────────────────────────────────────────────────────────────────────────

/// The path an engine routes `append` through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Backend {
  /// Slice-by-16 table engine.
  Software,
  /// Three-way interleaved hardware engine.
  Hardware,
}

impl Backend {
  /// Short label for logs and diagnostics.
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Software => "software/slice16",
      Self::Hardware => hwcrc::kernel_name(),
    }
  }
}

impl core::fmt::Display for Backend {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str(self.as_str())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tables
// ─────────────────────────────────────────────────────────────────────────────

/// The derived lookup tables: slice-by-16 value table plus the long and
/// short shift tables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tables {
  value: ValueTable,
  long: ShiftTable,
  short: ShiftTable,
}

impl Tables {
  /// Build every table for [`POLYNOMIAL`].
  #[must_use]
  pub const fn new() -> Self {
    Self {
      value: ValueTable::build(POLYNOMIAL),
      long: ShiftTable::build(POLYNOMIAL, LONG),
      short: ShiftTable::build(POLYNOMIAL, SHORT),
    }
  }

  /// Slice-by-16 value table.
  #[inline]
  #[must_use]
  pub const fn value(&self) -> &ValueTable {
    &self.value
  }

  /// Shift table for [`LONG`] zero bytes.
  #[inline]
  #[must_use]
  pub const fn long(&self) -> &ShiftTable {
    &self.long
  }

  /// Shift table for [`SHORT`] zero bytes.
  #[inline]
  #[must_use]
  pub const fn short(&self) -> &ShiftTable {
    &self.short
  }
}

impl Default for Tables {
  fn default() -> Self {
    Self::new()
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Engine
// ─────────────────────────────────────────────────────────────────────────────

/// A fully initialized CRC-32C engine.
///
/// ```
/// use crc32c::{Config, Engine, Force};
///
/// let engine = Engine::with_config(Config::new(Force::Software));
/// assert_eq!(engine.append(0, b"123456789"), 0xE306_9283);
/// ```
pub struct Engine {
  tables: Tables,
  hw: Option<hwcrc::Kernel>,
  backend: Backend,
  config: Config,
}

impl Engine {
  /// Build an engine that uses hardware when the CPU has it.
  #[must_use]
  pub fn new() -> Self {
    Self::with_config(Config::default())
  }

  /// Build an engine honouring `config`.
  ///
  /// A hardware request on a CPU without the instruction is clamped to the
  /// software backend with a warning; use [`Engine::with_backend`] to treat
  /// that as an error instead.
  #[must_use]
  pub fn with_config(config: Config) -> Self {
    let hw = hwcrc::select(platform::caps());
    let backend = match (config.force, hw) {
      (Force::Software, _) | (Force::Auto, None) => Backend::Software,
      (Force::Auto | Force::Hardware, Some(_)) => Backend::Hardware,
      (Force::Hardware, None) => {
        warn!(
          requested = config.force.as_str(),
          kernel = hwcrc::kernel_name(),
          "hardware CRC-32C unavailable; using software"
        );
        Backend::Software
      }
    };
    Self::build(config, hw, backend)
  }

  /// Build an engine on exactly `backend`.
  ///
  /// # Errors
  ///
  /// Returns [`Error::HardwareUnavailable`] if `backend` is
  /// [`Backend::Hardware`] and the CPU lacks the instruction.
  pub fn with_backend(backend: Backend) -> Result<Self, Error> {
    let hw = hwcrc::select(platform::caps());
    let force = match backend {
      Backend::Software => Force::Software,
      Backend::Hardware if hw.is_some() => Force::Hardware,
      Backend::Hardware => {
        return Err(Error::HardwareUnavailable {
          kernel: hwcrc::kernel_name(),
        });
      }
    };
    Ok(Self::build(Config::new(force), hw, backend))
  }

  fn build(config: Config, hw: Option<hwcrc::Kernel>, backend: Backend) -> Self {
    let engine = Self {
      tables: Tables::new(),
      hw,
      backend,
      config,
    };
    debug!(
      backend = backend.as_str(),
      force = config.force.as_str(),
      hardware_detected = hw.is_some(),
      "crc32c engine ready"
    );
    engine
  }

  /// Continue the CRC-32C `crc` over `data`.
  ///
  /// Pass `0` to start a fresh checksum. Empty input returns `crc` unchanged.
  #[inline]
  #[must_use]
  pub fn append(&self, crc: u32, data: &[u8]) -> u32 {
    match (self.backend, self.hw) {
      (Backend::Hardware, Some(kernel)) => self.run_hardware(kernel, crc, data),
      _ => self.append_software(crc, data),
    }
  }

  /// Continue `crc` over `data` on the slice-by-16 table engine.
  #[inline]
  #[must_use]
  pub fn append_software(&self, crc: u32, data: &[u8]) -> u32 {
    portable::append(crc, data, &self.tables.value)
  }

  /// Continue `crc` over `data` on the hardware engine, or `None` if this
  /// CPU lacks the instruction.
  #[inline]
  #[must_use]
  pub fn append_hardware(&self, crc: u32, data: &[u8]) -> Option<u32> {
    self.hw.map(|kernel| self.run_hardware(kernel, crc, data))
  }

  #[inline]
  fn run_hardware(&self, kernel: hwcrc::Kernel, crc: u32, data: &[u8]) -> u32 {
    kernel(crc ^ XOR_OUT, data, &self.tables.long, &self.tables.short) ^ XOR_OUT
  }

  /// The backend `append` routes through.
  #[inline]
  #[must_use]
  pub const fn backend(&self) -> Backend {
    self.backend
  }

  /// Whether `append` runs on the hardware engine.
  #[inline]
  #[must_use]
  pub const fn hardware_available(&self) -> bool {
    matches!(self.backend, Backend::Hardware)
  }

  /// Whether the CPU has the hardware instruction, regardless of the
  /// configured backend.
  #[inline]
  #[must_use]
  pub const fn hardware_detected(&self) -> bool {
    self.hw.is_some()
  }

  /// The tables this engine was built with.
  #[inline]
  #[must_use]
  pub const fn tables(&self) -> &Tables {
    &self.tables
  }

  /// The configuration this engine was built from.
  #[inline]
  #[must_use]
  pub const fn config(&self) -> Config {
    self.config
  }
}

impl Default for Engine {
  fn default() -> Self {
    Self::new()
  }
}

impl core::fmt::Debug for Engine {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Engine")
      .field("backend", &self.backend)
      .field("hardware_detected", &self.hw.is_some())
      .field("config", &self.config)
      .finish_non_exhaustive()
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Process-wide engine
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "std")]
static ENGINE: std::sync::OnceLock<Engine> = std::sync::OnceLock::new();

/// Build the process-wide engine if needed and return it.
///
/// The first call reads [`Config::from_env`] and detects CPU features; later
/// calls return the same instance.
#[cfg(feature = "std")]
#[inline]
pub fn initialize() -> &'static Engine {
  ENGINE.get_or_init(|| Engine::with_config(Config::from_env()))
}

/// Continue the CRC-32C `crc` over `data` on the process-wide engine.
///
/// ```
/// assert_eq!(crc32c::append(0, b"123456789"), 0xE306_9283);
///
/// let part = crc32c::append(0, b"1234");
/// assert_eq!(crc32c::append(part, b"56789"), 0xE306_9283);
/// ```
#[cfg(feature = "std")]
#[inline]
#[must_use]
pub fn append(crc: u32, data: &[u8]) -> u32 {
  initialize().append(crc, data)
}

/// Whether the process-wide engine runs on the hardware engine.
#[cfg(feature = "std")]
#[inline]
#[must_use]
pub fn hardware_available() -> bool {
  initialize().hardware_available()
}
