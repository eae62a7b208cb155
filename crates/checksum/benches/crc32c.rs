//! CRC-32C benchmarks.
//!
//! Run: `cargo bench -p crc32c`
//! Native: `RUSTFLAGS='-C target-cpu=native' cargo bench -p crc32c`
//!
//! This benchmarks:
//! - Main dispatch path (auto-selects the backend)
//! - Software slice-by-16 and slice-by-8 schedules
//! - Hardware interleaved engine (when the CPU has it)
//! - Bitwise reference, table initialization, and combine

use crc32c::{Engine, Tables, portable};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Standard benchmark sizes. 24 KiB is the first size that enters the long phase.
const SIZES: [usize; 8] = [64, 256, 768, 4096, 16384, 24576, 65536, 1048576];

/// Smaller sizes for the bitwise reference.
const BITWISE_SIZES: [usize; 4] = [16, 64, 256, 1024];

fn bench_dispatch(c: &mut Criterion) {
  let mut group = c.benchmark_group("crc32c/dispatch");
  eprintln!("crc32c backend: {}", crc32c::initialize().backend());

  for size in SIZES {
    let data = vec![0u8; size];
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
      b.iter(|| core::hint::black_box(crc32c::append(0, data)));
    });
  }

  group.finish();
}

fn bench_software(c: &mut Criterion) {
  let engine = Engine::new();
  let value = engine.tables().value();

  let mut group = c.benchmark_group("crc32c/software");
  for size in SIZES {
    let data = vec![0x5Au8; size];
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::new("slice16", size), &data, |b, data| {
      b.iter(|| core::hint::black_box(portable::append(0, data, value)));
    });
    group.bench_with_input(BenchmarkId::new("slice8", size), &data, |b, data| {
      b.iter(|| core::hint::black_box(portable::append_slice8(0, data, value)));
    });
  }
  group.finish();
}

/// Benchmark the hardware engine directly (bypasses dispatch).
///
/// Skipped when the CPU lacks the instruction.
fn bench_hardware(c: &mut Criterion) {
  let engine = Engine::new();
  if engine.append_hardware(0, &[]).is_none() {
    eprintln!("Skipping crc32c/hardware: instruction not available");
    return;
  }

  let mut group = c.benchmark_group("crc32c/hardware");
  for size in SIZES {
    let data = vec![0xA5u8; size];
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
      b.iter(|| core::hint::black_box(engine.append_hardware(0, data)));
    });
  }
  group.finish();
}

fn bench_bitwise(c: &mut Criterion) {
  let mut group = c.benchmark_group("crc32c/bitwise");

  for size in BITWISE_SIZES {
    let data = vec![0xABu8; size];
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
      b.iter(|| core::hint::black_box(crc32c::bitwise::append(0, data)));
    });
  }

  group.finish();
}

fn bench_setup(c: &mut Criterion) {
  let mut group = c.benchmark_group("crc32c/setup");
  group.bench_function("tables", |b| b.iter(|| core::hint::black_box(Tables::new())));
  group.bench_function("combine/1MiB", |b| {
    b.iter(|| {
      let len = core::hint::black_box(1usize << 20);
      core::hint::black_box(crc32c::combine(0xDEAD_BEEF, 0x1234_5678, len))
    })
  });
  group.finish();
}

criterion_group!(
  benches,
  bench_dispatch,
  bench_software,
  bench_hardware,
  bench_bitwise,
  bench_setup
);
criterion_main!(benches);
