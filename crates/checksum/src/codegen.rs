//! Render the CRC-32C tables as Rust source.
//!
//! The output is a standalone module with `POLYNOMIAL`, `LONG`, `SHORT` and
//! three `static` array-of-arrays of hex literals: `TABLE` (16 x 256),
//! `LONG_SHIFTS` and `SHORT_SHIFTS` (4 x 256 each).

use std::{
  fs::File,
  io::{self, BufWriter, Write},
  path::Path,
};

use crate::{
  constants::{LONG, POLYNOMIAL, SHORT},
  dispatch::Tables,
  error::Error,
};

/// Default output file of the `crc32c-constants` binary.
pub const DEFAULT_OUTPUT: &str = "generated_constants.rs";

const PER_LINE: usize = 8;

fn render_rows<W: Write>(out: &mut W, name: &str, rows: &[[u32; 256]]) -> io::Result<()> {
  writeln!(out, "pub static {name}: [[u32; 256]; {}] = [", rows.len())?;
  for row in rows {
    writeln!(out, "  [")?;
    for line in row.chunks(PER_LINE) {
      write!(out, "   ")?;
      for v in line {
        write!(out, " {v:#010x},")?;
      }
      writeln!(out)?;
    }
    writeln!(out, "  ],")?;
  }
  writeln!(out, "];")
}

/// Write the generated module to `out`.
///
/// # Errors
///
/// Propagates any error from `out`.
pub fn render<W: Write>(out: &mut W, tables: &Tables) -> io::Result<()> {
  writeln!(out, "// @generated by crc32c-constants. Do not edit.")?;
  writeln!(out)?;
  writeln!(out, "pub const POLYNOMIAL: u32 = {POLYNOMIAL:#010x};")?;
  writeln!(out, "pub const LONG: usize = {LONG};")?;
  writeln!(out, "pub const SHORT: usize = {SHORT};")?;
  writeln!(out)?;
  render_rows(out, "TABLE", tables.value().rows())?;
  writeln!(out)?;
  render_rows(out, "LONG_SHIFTS", tables.long().rows())?;
  writeln!(out)?;
  render_rows(out, "SHORT_SHIFTS", tables.short().rows())?;
  out.flush()
}

/// Render the tables into the file at `path`, replacing it.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be created or written.
pub fn write_file(path: impl AsRef<Path>, tables: &Tables) -> Result<(), Error> {
  let path = path.as_ref();
  let io_err = |source| Error::Io {
    path: path.to_path_buf(),
    source,
  };
  let file = File::create(path).map_err(io_err)?;
  render(&mut BufWriter::new(file), tables).map_err(io_err)
}

#[cfg(test)]
mod tests {
  extern crate std;

  use std::{string::String, vec::Vec};

  use super::*;

  fn rendered() -> String {
    let mut buf = Vec::new();
    render(&mut buf, &Tables::new()).unwrap();
    String::from_utf8(buf).unwrap()
  }

  #[test]
  fn test_header_constants() {
    let src = rendered();
    assert!(src.contains("pub const POLYNOMIAL: u32 = 0x82f63b78;"));
    assert!(src.contains("pub const LONG: usize = 8192;"));
    assert!(src.contains("pub const SHORT: usize = 256;"));
  }

  #[test]
  fn test_table_shapes() {
    let src = rendered();
    assert!(src.contains("pub static TABLE: [[u32; 256]; 16] = ["));
    assert!(src.contains("pub static LONG_SHIFTS: [[u32; 256]; 4] = ["));
    assert!(src.contains("pub static SHORT_SHIFTS: [[u32; 256]; 4] = ["));
    // 256 literals per row, 24 rows, plus the polynomial.
    assert_eq!(src.matches("0x").count(), 24 * 256 + 1);
  }

  #[test]
  fn test_first_row_values() {
    let src = rendered();
    assert!(src.contains("    0x00000000, 0xf26b8303, 0xe13b70f7, 0x1350f3f4,"));
  }

  #[test]
  fn test_write_file_reports_path() {
    let dir = std::env::temp_dir().join("crc32c-codegen-missing-dir");
    let path = dir.join("nested").join("out.rs");
    match write_file(&path, &Tables::new()) {
      Err(Error::Io { path: p, .. }) => assert_eq!(p, path),
      other => panic!("expected Io error, got {other:?}"),
    }
  }

  #[test]
  fn test_write_file_round_trip() {
    let path = std::env::temp_dir().join(std::format!("crc32c-codegen-{}.rs", std::process::id()));
    write_file(&path, &Tables::new()).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(written, rendered());
  }
}
