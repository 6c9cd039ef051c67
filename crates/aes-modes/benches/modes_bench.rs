use criterion::{criterion_group, criterion_main, Criterion};
use rand::RngCore;

use aes_core::Aes256Key;
use aes_modes::{encrypt_cbc, encrypt_cfb, encrypt_ecb};

fn bench_modes(c: &mut Criterion) {
    let key = Aes256Key::from([0u8; 32]);
    let iv = [0u8; 16];
    let mut data = vec![0u8; 16 * 1024];
    rand::thread_rng().fill_bytes(&mut data);

    let mut group = c.benchmark_group("modes");
    group.bench_function("ecb_encrypt_16k", |b| b.iter(|| encrypt_ecb(&data, &key)));
    group.bench_function("cbc_encrypt_16k", |b| {
        b.iter(|| encrypt_cbc(&data, &key, &iv))
    });
    group.bench_function("cfb_encrypt_16k", |b| {
        b.iter(|| encrypt_cfb(&data, &key, &iv))
    });
    group.finish();
}

criterion_group!(benches, bench_modes);
criterion_main!(benches);
