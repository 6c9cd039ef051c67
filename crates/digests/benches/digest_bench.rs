use criterion::{criterion_group, criterion_main, Criterion};

use digests::{md5, sha1, sha256};

fn bench_digests(c: &mut Criterion) {
    let data = vec![0xabu8; 16 * 1024];

    let mut group = c.benchmark_group("digests");
    group.bench_function("md5_16k", |b| b.iter(|| md5::hash(&data)));
    group.bench_function("sha1_16k", |b| b.iter(|| sha1::hash(&data)));
    group.bench_function("sha256_16k", |b| b.iter(|| sha256::hash(&data)));
    group.finish();
}

criterion_group!(benches, bench_digests);
criterion_main!(benches);
