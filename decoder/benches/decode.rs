use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use decoder::{decode_bytes, ColorOrder};
use format::HEADER_SIZE;

/// A deterministic satin-fill style pattern with a color change every
/// `run` stitches and a jump every fourth run.
fn synthetic_file(records: usize, run: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; HEADER_SIZE];
    for i in 0..records {
        let record = if i % run == run - 1 {
            if (i / run) % 4 == 3 {
                [0x81, 0, 40]
            } else {
                [0x88, 0, 0]
            }
        } else if i % 2 == 0 {
            [0xC0, 9, 3]
        } else {
            [0xA0, 9, 0]
        };
        bytes.extend_from_slice(&record);
    }
    bytes
}

fn bench_decode(c: &mut Criterion) {
    let order = ColorOrder::default();
    let mut group = c.benchmark_group("decode");
    for records in [1_000usize, 100_000] {
        let file = synthetic_file(records, 250);
        group.throughput(Throughput::Bytes(file.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(records), &file, |b, file| {
            b.iter(|| decode_bytes(black_box(file), &order).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
