use credal::{CredentialService, Options};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_options() -> Options {
    Options {
        time: 1,
        memory: 4096,
        threads: 1,
        key_len: 32,
    }
}

pub fn bench_hash_password(c: &mut Criterion) {
    let service = CredentialService::argon2id();
    let options = bench_options();

    c.bench_function("hash_password m=4096 t=1 p=1", |b| {
        b.iter(|| {
            service
                .hash_password(black_box("password"), black_box("benchsalt"), &options)
                .unwrap()
        })
    });
}

pub fn bench_verify_password(c: &mut Criterion) {
    let service = CredentialService::argon2id();
    let credential = service
        .hash_password("password", "benchsalt", &bench_options())
        .unwrap();

    c.bench_function("verify_password m=4096 t=1 p=1", |b| {
        b.iter(|| {
            service
                .verify_password(black_box("password"), black_box(&credential))
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_hash_password, bench_verify_password);
criterion_main!(benches);
