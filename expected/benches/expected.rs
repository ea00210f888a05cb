//
// Copyright (c) 2023 ZettaScale Technology
//
// This program and the accompanying materials are made available under the
// terms of the Eclipse Public License 2.0 which is available at
// http://www.eclipse.org/legal/epl-2.0, or the Apache License, Version 2.0
// which is available at https://www.apache.org/licenses/LICENSE-2.0.
//
// SPDX-License-Identifier: EPL-2.0 OR Apache-2.0
//
// Contributors:
//   Pierre Avital, <pierre.avital@me.com>
//

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use expected::Expected;
use rand::{Rng, SeedableRng};

const N: usize = 100000;

fn bench_chains(c: &mut Criterion) {
    let mut rng = rand::rngs::StdRng::seed_from_u64(0);
    let inputs: Vec<(u32, bool)> = (0..N).map(|_| (rng.gen_range(0..=100u32), rng.gen_bool(0.2))).collect();

    let mut group = c.benchmark_group("map_and_then_chain");
    group.bench_function("expected", |b| {
        b.iter(|| {
            let mut acc = 0u64;
            for &(v, fail) in &inputs {
                let r: Expected<u32, u32> = if fail {
                    Expected::from_error(v)
                } else {
                    Expected::new(v)
                };
                acc += r
                    .map(|v| v.wrapping_mul(3))
                    .and_then(|v| {
                        if v % 7 == 0 {
                            Expected::from_error(v)
                        } else {
                            Expected::new(v)
                        }
                    })
                    .unwrap_or(0) as u64;
            }
            black_box(acc)
        })
    });
    group.bench_function("core_result", |b| {
        b.iter(|| {
            let mut acc = 0u64;
            for &(v, fail) in &inputs {
                let r: Result<u32, u32> = if fail { Err(v) } else { Ok(v) };
                acc += r
                    .map(|v| v.wrapping_mul(3))
                    .and_then(|v| if v % 7 == 0 { Err(v) } else { Ok(v) })
                    .unwrap_or(0) as u64;
            }
            black_box(acc)
        })
    });
    group.finish();
}

fn bench_channel_switches(c: &mut Criterion) {
    let mut rng = rand::rngs::StdRng::seed_from_u64(1);
    let flips: Vec<bool> = (0..N).map(|_| rng.gen_bool(0.5)).collect();

    let mut group = c.benchmark_group("channel_switch");
    group.bench_function("insert", |b| {
        b.iter(|| {
            let mut r: Expected<u64, u32> = Expected::new(0);
            for (i, &flip) in flips.iter().enumerate() {
                if flip {
                    r.insert_error(i as u32);
                } else {
                    r.insert(i as u64);
                }
            }
            black_box(r.has_value())
        })
    });
    group.bench_function("swap", |b| {
        let mut a: Expected<u64, u32> = Expected::new(1);
        let mut e: Expected<u64, u32> = Expected::from_error(2);
        b.iter(|| {
            for _ in 0..flips.len() {
                a.swap(&mut e);
            }
            black_box(a.has_value())
        })
    });
    group.finish();
}

criterion_group!(benches, bench_chains, bench_channel_switches);
criterion_main!(benches);
