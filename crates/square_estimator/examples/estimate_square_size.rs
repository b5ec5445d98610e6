use envelope::{Blob, BlobTx};
use square_size_estimator::{ParsedTransaction, SquareEstimator, SquareSizeConstraints};
use std::time::Instant;
use tracing_forest::util::LevelFilter;
use tracing_forest::ForestLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

fn dummy_block() -> Vec<ParsedTransaction> {
    (0..1_000)
        .map(|i| {
            let tx = vec![0xCC; 250];
            if i % 4 != 0 {
                return ParsedTransaction::Plain { tx };
            }
            let blob = Blob {
                namespace_id: vec![0xAA; 28],
                data: vec![0xBB; 4_000],
                share_version: 0,
                namespace_version: 0,
            };
            BlobTx::new(tx, vec![blob]).into()
        })
        .collect()
}

fn main() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::DEBUG.into())
        .from_env_lossy();

    Registry::default()
        .with(env_filter)
        .with(ForestLayer::default())
        .init();

    let txs = dummy_block();
    let estimator = SquareEstimator::new(SquareSizeConstraints::default())
        .expect("default constraints are valid");

    let start = Instant::now();
    let layout = estimator
        .estimate_square_size(&txs)
        .expect("failed to estimate square size");
    println!(
        "square size {} with {} tx shares, estimated in {:?}",
        layout.square_size,
        layout.non_reserved_start,
        start.elapsed()
    );

    // The overhead is memoized, the second estimate skips calibration.
    let start = Instant::now();
    estimator
        .estimate_square_size(&txs)
        .expect("failed to estimate square size");
    println!("estimated again in {:?}", start.elapsed());
}
