use criterion::{criterion_group, criterion_main, Criterion};
use envelope::{Blob, BlobTx};
use rand::{rngs::StdRng, Rng, SeedableRng};
use square_size_estimator::{ParsedTransaction, SquareEstimator, SquareSizeConstraints};

const NUM_TXS: usize = 2_000;

fn random_txs(rng: &mut StdRng) -> Vec<ParsedTransaction> {
    (0..NUM_TXS)
        .map(|_| {
            let tx = vec![0xCC; rng.random_range(100..1_000)];
            if rng.random_bool(0.5) {
                return ParsedTransaction::Plain { tx };
            }

            let blobs = (0..rng.random_range(1..4))
                .map(|_| Blob {
                    namespace_id: vec![0xAA; 28],
                    data: vec![0xBB; rng.random_range(1..10_000)],
                    share_version: 0,
                    namespace_version: 0,
                })
                .collect();
            BlobTx::new(tx, blobs).into()
        })
        .collect()
}

pub fn bench_calibrate_overhead(c: &mut Criterion) {
    c.bench_function("calibrate overhead - square size 128", |b| {
        b.iter(|| {
            // A fresh estimator has an empty memo.
            let estimator: SquareEstimator = SquareEstimator::default();
            estimator.overhead(128)
        });
    });
}

pub fn bench_estimate_square_size(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let txs = random_txs(&mut rng);

    let estimator = SquareEstimator::new(SquareSizeConstraints::default())
        .expect("default constraints are valid");
    // Calibrate once so that only the estimate itself is measured.
    estimator.overhead(128).expect("calibration failed");

    c.bench_function("estimate_square_size - 2000 txs", |b| {
        b.iter(|| estimator.estimate_square_size(&txs));
    });
}

criterion_group!(
    benches,
    bench_calibrate_overhead,
    bench_estimate_square_size
);
criterion_main!(benches);
