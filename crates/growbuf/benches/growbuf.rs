// Copyright (c) The Growbuf Project Authors.
// Licensed under the MIT License.

#![expect(missing_docs, reason = "Benchmark code")]

use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use growbuf::{GrowBuf, ReadAt, WriteAt};

criterion_group!(benches, entrypoint);
criterion_main!(benches);

// "Network message sized" test data. Small enough that growth events dominate
// the append benchmarks rather than memcpy throughput.
const TEST_DATA: &[u8] = &[88_u8; 1024];

const APPEND_CHUNK: &[u8] = &[42_u8; 16];
const APPEND_COUNT: usize = 256;

fn entrypoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("GrowBuf");

    group.bench_function("new", |b| {
        b.iter(GrowBuf::new);
    });

    group.bench_function("copied_from_slice", |b| {
        b.iter(|| GrowBuf::copied_from_slice(black_box(TEST_DATA)));
    });

    group.bench_function("append_with_growth", |b| {
        b.iter_batched_ref(
            GrowBuf::new,
            |buf| {
                for i in 0..APPEND_COUNT {
                    buf.write_slice(i * APPEND_CHUNK.len(), APPEND_CHUNK);
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("append_preallocated", |b| {
        b.iter_batched_ref(
            || GrowBuf::copied_from_slice_with_capacity(&[], APPEND_COUNT * APPEND_CHUNK.len()),
            |buf| {
                for i in 0..APPEND_COUNT {
                    buf.write_slice(i * APPEND_CHUNK.len(), APPEND_CHUNK);
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("write_num_le", |b| {
        b.iter_batched_ref(
            || GrowBuf::zeroed(8),
            |buf| buf.write_num_le(0, black_box(0x1234_5678_u64)),
            BatchSize::SmallInput,
        );
    });

    group.bench_function("read_num_le", |b| {
        let buf = GrowBuf::copied_from_slice(TEST_DATA);

        b.iter(|| buf.read_num_le::<u64>(black_box(0)));
    });

    group.bench_function("read_slice", |b| {
        let buf = GrowBuf::copied_from_slice(TEST_DATA);

        b.iter(|| buf.read_slice(black_box(0), black_box(TEST_DATA.len())));
    });

    group.bench_function("cursor_encode", |b| {
        b.iter_batched_ref(
            GrowBuf::new,
            |buf| {
                buf.write_at(0, |cursor| {
                    for _ in 0..64 {
                        cursor.write_num_be(0xDEAD_BEEF_u32);
                        cursor.write_num_le(0xCAFE_u16);
                    }
                });
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("cursor_decode", |b| {
        let buf = GrowBuf::copied_from_slice(TEST_DATA);

        b.iter(|| {
            buf.read_at(0, |cursor| {
                let mut sum = 0_u64;

                for _ in 0..64 {
                    sum = sum.wrapping_add(u64::from(cursor.read_num_be::<u32>()));
                    sum = sum.wrapping_add(u64::from(cursor.read_num_le::<u16>()));
                }

                sum
            })
        });
    });

    group.bench_function("visualize", |b| {
        let buf = GrowBuf::copied_from_slice(TEST_DATA);

        b.iter(|| buf.visualize());
    });

    group.finish();
}
