use criterion::{criterion_group, criterion_main, Criterion};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use aes_core::{decrypt_block, encrypt_block, expand_key, AesKey};

fn bench_key_schedule(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
    let mut key128 = [0u8; 16];
    rng.fill_bytes(&mut key128);
    let mut key256 = [0u8; 32];
    rng.fill_bytes(&mut key256);

    let mut group = c.benchmark_group("key_schedule");
    group.bench_function("expand_key_128", |b| {
        b.iter(|| expand_key(&AesKey::from(key128)));
    });
    group.bench_function("expand_key_256", |b| {
        b.iter(|| expand_key(&AesKey::from(key256)));
    });
    group.finish();
}

fn bench_block(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([2u8; 32]);
    let mut key128 = [0u8; 16];
    rng.fill_bytes(&mut key128);
    let mut key256 = [0u8; 32];
    rng.fill_bytes(&mut key256);
    let rks128 = expand_key(&AesKey::from(key128));
    let rks256 = expand_key(&AesKey::from(key256));

    let mut block = [0u8; 16];
    rng.fill_bytes(&mut block);
    let ct128 = encrypt_block(&block, &rks128);
    let ct256 = encrypt_block(&block, &rks256);

    let mut group = c.benchmark_group("block");
    group.bench_function("encrypt_block_128", |b| {
        b.iter(|| encrypt_block(&block, &rks128));
    });
    group.bench_function("decrypt_block_128", |b| {
        b.iter(|| decrypt_block(&ct128, &rks128));
    });
    group.bench_function("encrypt_block_256", |b| {
        b.iter(|| encrypt_block(&block, &rks256));
    });
    group.bench_function("decrypt_block_256", |b| {
        b.iter(|| decrypt_block(&ct256, &rks256));
    });
    group.finish();
}

criterion_group!(benches, bench_key_schedule, bench_block);
criterion_main!(benches);
