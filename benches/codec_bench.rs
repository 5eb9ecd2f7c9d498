#![allow(clippy::unwrap_used, clippy::uninlined_format_args)]

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use pgp_wire_util::core::checksum::calc_checksum;
use pgp_wire_util::core::consttime::{double, double_block, shift_right};
use pgp_wire_util::core::mpi::{read_mpi, take_left_bits, to_mpi};
use pgp_wire_util::encoding::base64::{b64_to_bytes, bytes_to_b64};
use pgp_wire_util::encoding::hex::{bytes_to_hex, hex_to_bytes};
use pgp_wire_util::encoding::zbase32::{decode_zbase32, encode_zbase32};
use rand::Rng;

fn random_bytes(size: usize) -> Vec<u8> {
    let mut data = vec![0u8; size];
    rand::rng().fill(&mut data[..]);
    data
}

fn bench_text_codecs(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_codecs");
    let sizes = [20usize, 256, 4096, 65536];

    for &size in &sizes {
        let data = random_bytes(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_function(format!("hex_encode_{}b", size), |b| {
            b.iter(|| bytes_to_hex(black_box(&data)))
        });
        let hex = bytes_to_hex(&data);
        group.bench_function(format!("hex_decode_{}b", size), |b| {
            b.iter(|| hex_to_bytes(black_box(&hex)).unwrap())
        });

        group.bench_function(format!("base64_encode_{}b", size), |b| {
            b.iter(|| bytes_to_b64(black_box(&data), false))
        });
        let b64 = bytes_to_b64(&data, false);
        group.bench_function(format!("base64_decode_{}b", size), |b| {
            b.iter(|| b64_to_bytes(black_box(&b64)).unwrap())
        });

        group.bench_function(format!("zbase32_encode_{}b", size), |b| {
            b.iter(|| encode_zbase32(black_box(&data)))
        });
        let z32 = encode_zbase32(&data);
        group.bench_function(format!("zbase32_decode_{}b", size), |b| {
            b.iter(|| decode_zbase32(black_box(&z32)).unwrap())
        });
    }

    group.finish();
}

fn bench_mpi(c: &mut Criterion) {
    let mut group = c.benchmark_group("mpi");
    // RSA modulus sizes
    let sizes = [256usize, 384, 512];

    for &size in &sizes {
        let mut magnitude = random_bytes(size);
        magnitude[0] |= 0x80;
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_function(format!("to_mpi_{}b", size), |b| {
            b.iter(|| to_mpi(black_box(&magnitude)).unwrap())
        });
        let framed = to_mpi(&magnitude).unwrap();
        group.bench_function(format!("read_mpi_{}b", size), |b| {
            b.iter(|| read_mpi(black_box(&framed)).unwrap())
        });
    }

    let digest = random_bytes(66);
    group.bench_function("take_left_bits_521", |b| {
        b.iter(|| take_left_bits(black_box(&digest), 521).unwrap())
    });

    group.finish();
}

fn bench_consttime(c: &mut Criterion) {
    let mut group = c.benchmark_group("consttime");
    let block: [u8; 16] = random_bytes(16).try_into().unwrap();

    group.bench_function("double_block", |b| b.iter(|| double_block(black_box(&block))));
    group.bench_function("double_slice_16b", |b| {
        b.iter(|| double(black_box(&block)).unwrap())
    });
    group.bench_function("shift_right_4096b", |b| {
        b.iter_batched(
            || random_bytes(4096),
            |mut data| shift_right(&mut data, 3).unwrap(),
            BatchSize::SmallInput,
        )
    });

    let key = random_bytes(4096);
    group.throughput(Throughput::Bytes(key.len() as u64));
    group.bench_function("checksum_4096b", |b| b.iter(|| calc_checksum(black_box(&key))));

    group.finish();
}

criterion_group!(benches, bench_text_codecs, bench_mpi, bench_consttime);
criterion_main!(benches);
