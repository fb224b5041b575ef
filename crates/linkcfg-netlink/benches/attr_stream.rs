//! Attribute stream encode/decode benchmarks.
//!
//! Measures the cost of building and walking route netlink attribute
//! streams of the sizes the link codecs produce.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use linkcfg_netlink::{rtnl, AttrDecoder, AttrEncoder};
use std::hint::black_box;

/// Builds the five-attribute stream a fully populated bridge record emits.
fn build_bridge_stream() -> Vec<u8> {
    let mut enc = AttrEncoder::new();
    enc.put_u32(rtnl::IFLA_BR_STP_STATE, 1);
    enc.put_u8(rtnl::IFLA_BR_VLAN_FILTERING, 1);
    enc.put_u16(rtnl::IFLA_BR_VLAN_DEFAULT_PVID, 42);
    enc.put_u8(rtnl::IFLA_BR_VLAN_STATS_ENABLED, 0);
    enc.put_u8(rtnl::IFLA_BR_VLAN_STATS_PER_PORT, 1);
    enc.finish().expect("valid attribute stream")
}

/// Builds a stream of `count` u32 attributes with cycling type codes.
fn build_wide_stream(count: usize) -> Vec<u8> {
    let mut enc = AttrEncoder::new();
    for i in 0..count {
        enc.put_u32((i % 64) as u16 + 1, i as u32);
    }
    enc.finish().expect("valid attribute stream")
}

/// Walks a stream end to end, summing the attribute type codes.
fn walk_stream(stream: &[u8]) -> u64 {
    let mut dec = AttrDecoder::new(stream).expect("valid attribute stream");
    let mut sum = 0u64;
    while dec.advance() {
        sum += u64::from(dec.kind());
    }
    sum
}

/// Benchmark encoding the bridge-sized stream
fn bench_encode_bridge(c: &mut Criterion) {
    c.bench_function("encode_bridge_stream", |b| {
        b.iter(|| {
            let stream = build_bridge_stream();
            black_box(stream);
        });
    });
}

/// Benchmark a full decode pass over the bridge-sized stream
fn bench_decode_bridge(c: &mut Criterion) {
    let stream = build_bridge_stream();

    c.bench_function("decode_bridge_stream", |b| {
        b.iter(|| {
            let mut dec = AttrDecoder::new(black_box(&stream)).expect("valid attribute stream");
            let mut stp = 0u32;
            let mut pvid = 0u16;
            while dec.advance() {
                match dec.kind() {
                    rtnl::IFLA_BR_STP_STATE => stp = dec.get_u32(),
                    rtnl::IFLA_BR_VLAN_DEFAULT_PVID => pvid = dec.get_u16(),
                    _ => {
                        dec.get_u8();
                    }
                }
            }
            dec.finish().expect("valid attribute stream");
            black_box((stp, pvid));
        });
    });
}

/// Benchmark decoding streams of increasing attribute counts
fn bench_decode_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_attr_batch");

    for count in [10, 50, 100, 500] {
        let stream = build_wide_stream(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &stream, |b, stream| {
            b.iter(|| {
                let sum = walk_stream(stream);
                black_box(sum);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_encode_bridge,
    bench_decode_bridge,
    bench_decode_batch
);
criterion_main!(benches);
