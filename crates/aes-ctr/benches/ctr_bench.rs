use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use aes_core::{encrypt_block, expand_key, Aes128Key};
use aes_ctr::{process, process_with_config, CtrConfig};

const KEY: [u8; 16] = *b"\xa1\xf6%\x8c\x87}_\xcd\x89dHE8\xbf\xc9,";

fn bench_block(c: &mut Criterion) {
    let round_keys = expand_key(&Aes128Key::from(KEY));
    let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
    let mut block = [0u8; 16];
    rng.fill_bytes(&mut block);

    let mut group = c.benchmark_group("block");
    group.bench_function("expand_key", |b| b.iter(|| expand_key(&Aes128Key::from(KEY))));
    group.bench_function("encrypt_block", |b| {
        b.iter(|| encrypt_block(&block, &round_keys))
    });
    group.finish();
}

fn bench_ctr(c: &mut Criterion) {
    let cleartext = b"This is a test. What could possibly go wrong? ".repeat(500);

    let mut group = c.benchmark_group("ctr");
    group.sample_size(20);
    group.throughput(Throughput::Bytes(cleartext.len() as u64));
    group.bench_function("encrypt_decrypt_default", |b| {
        b.iter(|| {
            let ct = process(&KEY, &cleartext, 0).expect("encrypt");
            process(&KEY, &ct, 0).expect("decrypt")
        })
    });
    for (name, config) in [
        ("sequential", CtrConfig::sequential()),
        (
            "parallel",
            CtrConfig {
                parallel: true,
                min_parallel_blocks: 1,
                ..CtrConfig::default()
            },
        ),
    ] {
        group.bench_with_input(BenchmarkId::new("process", name), &config, |b, config| {
            b.iter(|| process_with_config(&KEY, &cleartext, 0, config).expect("process"))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_block, bench_ctr);
criterion_main!(benches);
