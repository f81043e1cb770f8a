//! `wrap`/`unwrap` benchmarks.
use belt_dwp::{unwrap, wrap};
use criterion::{BenchmarkId, Throughput, criterion_group, criterion_main};

mod utils;
use utils::{Benchmarker, config};

const KEY: [u8; 32] = [0x42; 32];
const IV: [u8; 16] = [0x24; 16];

fn bench(c: &mut Benchmarker) {
    let mut group = c.benchmark_group("wrap");

    for size in &[16, 256, 1024, 16384] {
        let buf = vec![0u8; *size];

        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_function(BenchmarkId::new("wrap", size), |b| {
            b.iter(|| {
                let mut payload = buf.clone();
                wrap(&mut payload, &[], &KEY, &IV).unwrap();
            });
        });

        group.bench_function(BenchmarkId::new("unwrap", size), |b| {
            let mut ciphertext = buf.clone();
            let tag = wrap(&mut ciphertext, &[], &KEY, &IV).unwrap();

            b.iter(|| {
                let mut buffer = ciphertext.clone();
                unwrap(&mut buffer, &[], &tag, &KEY, &IV).unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(
    name = benches;
    config = config();
    targets = bench
);

criterion_main!(benches);
