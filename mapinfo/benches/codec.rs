// Copyright 2024 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use mapinfo::{FILE_LEN, MapHeader, MapInfo};

fn sample() -> MapInfo {
    let mut map = MapInfo::new(MapHeader::new(192, 128));
    // Roughly one region in three enabled
    for id in (0..=u16::MAX).step_by(3) {
        map.regions.set_by_id(id, true);
    }
    map
}

fn codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    group.throughput(Throughput::Bytes(FILE_LEN as u64));

    let map = sample();
    let bytes = map.to_bytes();

    group.bench_function("encode", |b| {
        let mut out = Vec::with_capacity(FILE_LEN);
        b.iter(|| {
            out.clear();
            mapinfo::encode(black_box(&map), &mut out).unwrap();
        });
    });
    group.bench_function("decode", |b| {
        b.iter(|| mapinfo::decode(black_box(bytes.as_slice())).unwrap());
    });
    group.bench_function("synchronize", |b| {
        let ids: Vec<i16> = (0..5000).collect();
        let mut regions = map.regions.clone();
        b.iter(|| {
            mapinfo::synchronize(&mut regions, black_box(&ids).iter().copied());
        });
    });

    group.finish();
}

criterion_group!(benches, codec);
criterion_main!(benches);
