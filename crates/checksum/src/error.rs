//! Error types.

/// Errors surfaced by engine construction and the constant generator.
///
/// The checksum path itself never fails.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
  /// The hardware backend was requested but this CPU lacks the instruction.
  #[error("hardware CRC-32C requested but not available (kernel: {kernel})")]
  HardwareUnavailable {
    /// Kernel that would have been used on this architecture.
    kernel: &'static str,
  },

  /// Writing generated constants failed.
  #[cfg(feature = "std")]
  #[error("failed to write {}", .path.display())]
  Io {
    path: std::path::PathBuf,
    #[source]
    source: std::io::Error,
  },
}
