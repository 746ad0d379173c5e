use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use rand::{rngs::StdRng, SeedableRng};

use lms_core::{LmOtsAlgorithm, LmsAlgorithm, LmsPrivateKey, LmsPublicKey};

fn bench_keygen(c: &mut Criterion) {
    let mut group = c.benchmark_group("lms_keygen");
    group.bench_function("keygen_h10", |b| {
        b.iter_batched(
            || StdRng::seed_from_u64(1),
            |mut rng| {
                let _private = LmsPrivateKey::generate(
                    LmsAlgorithm::Sha256M32H10,
                    LmOtsAlgorithm::Sha256N32W8,
                    b"benchmark seed material",
                    &mut rng,
                )
                .unwrap();
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_sign(c: &mut Criterion) {
    let mut group = c.benchmark_group("lms_sign");
    let msg_sizes = [32usize, 1024, 64 * 1024];

    for &m in &msg_sizes {
        group.throughput(Throughput::Elements(1));
        group.bench_function(format!("sign_m{m}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(2);
                    let private = LmsPrivateKey::generate(
                        LmsAlgorithm::Sha256M32H10,
                        LmOtsAlgorithm::Sha256N32W8,
                        b"benchmark seed material",
                        &mut rng,
                    )
                    .unwrap();
                    let mut msg = vec![0u8; m];
                    for (i, byte) in msg.iter_mut().enumerate() {
                        *byte = (i as u8).wrapping_mul(31).wrapping_add(7);
                    }
                    (private, msg, rng)
                },
                |(mut private, msg, mut rng)| {
                    let _sig = private.sign(&msg, &mut rng).unwrap();
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("lms_verify");
    let msg_sizes = [32usize, 1024];

    for &m in &msg_sizes {
        group.throughput(Throughput::Elements(1));
        group.bench_function(format!("verify_m{m}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(3);
                    let mut private = LmsPrivateKey::generate(
                        LmsAlgorithm::Sha256M32H10,
                        LmOtsAlgorithm::Sha256N32W8,
                        b"benchmark seed material",
                        &mut rng,
                    )
                    .unwrap();
                    let public = LmsPublicKey::derive(&private);
                    let mut msg = vec![0u8; m];
                    for (i, byte) in msg.iter_mut().enumerate() {
                        *byte = (i as u8).wrapping_mul(17).wrapping_add(3);
                    }
                    let sig = private.sign(&msg, &mut rng).unwrap();
                    (public, msg, sig.to_bytes())
                },
                |(public, msg, sig_bytes)| {
                    public.verify(&msg, &sig_bytes).unwrap();
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_keygen, bench_sign, bench_verify);
criterion_main!(benches);
