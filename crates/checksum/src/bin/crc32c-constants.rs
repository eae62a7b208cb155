//! Generate the CRC-32C lookup tables as Rust source.
//!
//! Usage: `crc32c-constants [--out PATH]` (default `generated_constants.rs`).
//! Set `RUST_LOG=debug` for progress output on stderr.

use std::{env, path::PathBuf, process::ExitCode};

use crc32c::{Tables, codegen};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: crc32c-constants [--out PATH]";

enum Args {
  Run { out: PathBuf },
  Help,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
  let mut out = PathBuf::from(codegen::DEFAULT_OUTPUT);
  while let Some(arg) = args.next() {
    match arg.as_str() {
      "-h" | "--help" => return Ok(Args::Help),
      "-o" | "--out" => {
        out = args.next().map(PathBuf::from).ok_or_else(|| format!("{arg} needs a path"))?;
      }
      other if !other.starts_with('-') => out = PathBuf::from(other),
      other => return Err(format!("unknown argument: {other}")),
    }
  }
  Ok(Args::Run { out })
}

fn main() -> ExitCode {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(std::io::stderr)
    .init();

  let out = match parse_args(env::args().skip(1)) {
    Ok(Args::Run { out }) => out,
    Ok(Args::Help) => {
      println!("{USAGE}");
      return ExitCode::SUCCESS;
    }
    Err(msg) => {
      eprintln!("{msg}\n{USAGE}");
      return ExitCode::from(2);
    }
  };

  let tables = Tables::new();
  match codegen::write_file(&out, &tables) {
    Ok(()) => {
      info!(path = %out.display(), "wrote CRC-32C constants");
      ExitCode::SUCCESS
    }
    Err(err) => {
      error!(%err, "constant generation failed");
      eprintln!("error: {err}");
      ExitCode::FAILURE
    }
  }
}
